use anyhow::{Context, Result, bail};
use ippool_lib::{AddrRange, Pool, try_parse_address};
use std::path::Path;

/// Load a pool from a text file: one range per line, written as
/// "lo-hi", "lo hi" or a single address.  Blank lines are skipped and
/// '#' starts a comment.
pub(crate) fn load_pool(path: &Path) -> Result<Pool> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let mut pool = Pool::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let range = parse_range(line).with_context(|| {
            format!("{}:{}: invalid range {:?}", path.display(), lineno + 1, line)
        })?;
        pool.add_range(range);
    }
    log::debug!("{}: {} ranges", path.display(), pool.len());
    Ok(pool)
}

fn parse_range(line: &str) -> Result<AddrRange> {
    let cleaned = line.replace('-', " ");
    let mut parts = cleaned.split_whitespace();
    let lo = parts.next().context("empty range")?;
    let hi = parts.next().unwrap_or(lo);
    if parts.next().is_some() {
        bail!("expected at most two addresses");
    }
    Ok(AddrRange::new(try_parse_address(lo)?, try_parse_address(hi)?))
}
