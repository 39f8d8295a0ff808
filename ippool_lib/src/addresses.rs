use crate::errors::Error;

/// A 32-bit IPv4 address, in host byte order.  `0.0.0.0` maps to 0 and
/// `255.255.255.255` to `u32::MAX`, so the natural integer order is the
/// natural address order.
pub type Address = u32;

/// Parse a dotted-quad string (`"a.b.c.d"`, each component 0..=255) into
/// its packed big-endian value (`a<<24 | b<<16 | c<<8 | d`).
pub fn try_parse_address(ip: &str) -> Result<Address, Error> {
    let mut addr: Address = 0;
    let mut octets = 0;
    for part in ip.split('.') {
        let octet = part.parse::<u8>()?;
        addr = addr << 8 | Address::from(octet);
        octets += 1;
    }
    if octets != 4 {
        return Err(Error::Str(format!(
            "expected four dot-separated octets, got {:?}",
            ip
        )));
    }
    Ok(addr)
}

/// Lenient variant of [`try_parse_address`]: returns 0 for any malformed
/// string.  Note that 0 is also the legitimate value of `"0.0.0.0"`, so a
/// caller handed user-controlled strings cannot use the result to detect
/// bad input; it must validate separately (or use the checked parser).
#[must_use]
pub fn parse_address(ip: &str) -> Address {
    try_parse_address(ip).unwrap_or(0)
}

/// Render an address back to its dotted-quad form.
#[must_use]
pub fn format_address(addr: Address) -> String {
    format!(
        "{}.{}.{}.{}",
        addr >> 24,
        addr >> 16 & 0xff,
        addr >> 8 & 0xff,
        addr & 0xff
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_address("0.0.0.0"), 0);
        assert_eq!(parse_address("0.0.0.1"), 1);
        assert_eq!(parse_address("0.0.1.0"), 256);
        assert_eq!(parse_address("1.2.3.4"), 0x0102_0304);
        assert_eq!(parse_address("192.168.0.1"), 0xc0a8_0001);
        assert_eq!(parse_address("255.255.255.255"), u32::MAX);
    }

    #[test]
    fn test_parse_malformed() {
        //  The lenient parser falls back to 0, indistinguishable from
        //  a parsed "0.0.0.0"
        assert_eq!(parse_address(""), 0);
        assert_eq!(parse_address("garbage"), 0);
        assert_eq!(parse_address("1.2.3"), 0);
        assert_eq!(parse_address("1.2.3.4.5"), 0);
        assert_eq!(parse_address("1.2.3.256"), 0);
        assert_eq!(parse_address("1.2.3.-4"), 0);
        assert_eq!(parse_address("1.2.3.d"), 0);
        assert_eq!(parse_address("1.2. 3.4"), 0);

        assert!(try_parse_address("1.2.3.4").is_ok());
        assert!(try_parse_address("1.2.3").is_err());
        assert!(try_parse_address("1.2.3.256").is_err());
        assert!(try_parse_address("").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_address(0), "0.0.0.0");
        assert_eq!(format_address(1), "0.0.0.1");
        assert_eq!(format_address(0xc0a8_0001), "192.168.0.1");
        assert_eq!(format_address(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_roundtrip() {
        for ip in ["0.0.0.0", "10.0.255.3", "172.16.254.1", "255.0.0.255"] {
            assert_eq!(format_address(parse_address(ip)), ip);
        }
    }
}
