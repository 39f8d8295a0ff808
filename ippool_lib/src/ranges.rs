use crate::addresses::{format_address, parse_address, Address};

/// A closed interval of addresses `[lo, hi]`, inclusive on both ends.
/// The constructor normalizes its arguments, so `lo <= hi` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AddrRange {
    lo: Address,
    hi: Address,
}

impl AddrRange {
    /// Build the range covering both addresses, in either order.
    ///
    /// ```
    ///    use ippool_lib::AddrRange;
    ///    assert_eq!(AddrRange::new(9, 4), AddrRange::new(4, 9));
    /// ```
    #[must_use]
    pub fn new(ip1: Address, ip2: Address) -> Self {
        Self {
            lo: ip1.min(ip2),
            hi: ip1.max(ip2),
        }
    }

    /// Build a range from two dotted-quad strings, using the lenient
    /// parser (malformed strings read as 0, see
    /// [`parse_address`](crate::parse_address)).
    #[must_use]
    pub fn from_strs(ip1: &str, ip2: &str) -> Self {
        Self::new(parse_address(ip1), parse_address(ip2))
    }

    #[must_use]
    pub fn lo(&self) -> Address {
        self.lo
    }

    #[must_use]
    pub fn hi(&self) -> Address {
        self.hi
    }

    /// Whether the address falls within the range (bounds included).
    #[must_use]
    pub fn contains(&self, addr: Address) -> bool {
        self.lo <= addr && addr <= self.hi
    }

    /// Number of addresses covered.  Returned as u64 since the full
    /// address space does not fit in an Address.
    #[must_use]
    pub fn count(&self) -> u64 {
        u64::from(self.hi) - u64::from(self.lo) + 1
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AddrRange {
    /// Deserializes through the normalizing constructor, so a swapped
    /// pair in the input still yields a well-formed range.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            lo: Address,
            hi: Address,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(AddrRange::new(raw.lo, raw.hi))
    }
}

impl ::core::fmt::Display for AddrRange {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(
            f,
            "[{}, {}]",
            format_address(self.lo),
            format_address(self.hi)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize() {
        let r = AddrRange::new(10, 4);
        assert_eq!(r.lo(), 4);
        assert_eq!(r.hi(), 10);
        assert_eq!(r, AddrRange::new(4, 10));

        let single = AddrRange::new(7, 7);
        assert_eq!(single.lo(), 7);
        assert_eq!(single.hi(), 7);
    }

    #[test]
    fn test_from_strs() {
        let r = AddrRange::from_strs("192.168.0.100", "192.168.0.1");
        assert_eq!(r.lo(), 0xc0a8_0001);
        assert_eq!(r.hi(), 0xc0a8_0064);

        //  Malformed strings read as 0.0.0.0
        let r = AddrRange::from_strs("not-an-ip", "10.0.0.1");
        assert_eq!(r.lo(), 0);
        assert_eq!(r.hi(), 0x0a00_0001);
    }

    #[test]
    fn test_contains() {
        let r = AddrRange::new(10, 20);
        assert!(r.contains(10));
        assert!(r.contains(15));
        assert!(r.contains(20));
        assert!(!r.contains(9));
        assert!(!r.contains(21));
    }

    #[test]
    fn test_count() {
        assert_eq!(AddrRange::new(10, 10).count(), 1);
        assert_eq!(AddrRange::new(10, 19).count(), 10);
        assert_eq!(AddrRange::new(0, u32::MAX).count(), 1 << 32);
    }

    #[test]
    fn test_io() {
        assert_eq!(
            format!("{}", AddrRange::from_strs("10.0.0.1", "10.0.0.9")),
            "[10.0.0.1, 10.0.0.9]"
        );
    }
}
