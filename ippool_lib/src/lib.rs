//! This crate tracks pools of IPv4 addresses.  A [`Pool`] is a set of
//! disjoint, inclusive address ranges over the 32-bit space, kept sorted
//! and merged at all times: inserting a range that overlaps stored ones
//! collapses them into a single range, while ranges that do not share any
//! address stay distinct.
//!
//! ```text
//!        [---- A ----]       [---- B ----]
//!               [------ C ------]
//!
//!        [-------------------------------]     after add_range(C)
//! ```
//!
//! Lookups ([`Pool::find_range`]) answer which stored range, if any,
//! contains a given address, and [`removed_ranges`] computes the
//! difference between two pools: the sub-ranges an "old" pool covered
//! that a "new" snapshot no longer does.
//!
//! ```text
//!        [-------- old --------]    [-- old --]
//!             [--- new ---]              [-- new --]
//!
//!        [---)             (----]   [---)              removed
//! ```
//!
//! ```
//!    use ippool_lib::{removed_ranges, AddrRange, Pool};
//!
//!    let mut pool = Pool::new();
//!    pool.add_range(AddrRange::from_strs("192.168.0.1", "192.168.0.100"));
//!    pool.add_range(AddrRange::from_strs("192.168.0.50", "192.168.0.200"));
//!    assert_eq!(pool.len(), 1);
//!
//!    let trimmed: Pool =
//!        [AddrRange::from_strs("192.168.0.1", "192.168.0.150")]
//!            .into_iter()
//!            .collect();
//!    let gone = removed_ranges(&pool, &trimmed);
//!    assert_eq!(
//!        gone.ranges().next(),
//!        Some(AddrRange::from_strs("192.168.0.151", "192.168.0.200"))
//!    );
//! ```
//!
//! Addresses convert to and from dotted-quad strings through the free
//! functions in this crate; [`parse_address`] mirrors the historic lenient
//! behavior of reading any malformed string as 0, [`try_parse_address`]
//! reports the failure instead.
//!
//! Everything here is a plain in-memory value: no I/O, no locking, no
//! hidden sharing between pools.

mod addresses;
mod diff;
mod errors;
mod pool;
mod ranges;

pub use crate::addresses::{
    format_address, parse_address, try_parse_address, Address,
};
pub use crate::diff::removed_ranges;
pub use crate::errors::Error;
pub use crate::pool::Pool;
pub use crate::ranges::AddrRange;
