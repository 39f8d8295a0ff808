use crate::addresses::Address;
use crate::ranges::AddrRange;

/// Whether a boundary opens or closes a stored range.  The derived order
/// puts `Start` before `End`, so the two boundaries of a single-address
/// range sort as an adjacent pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum BoundaryKind {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Boundary {
    addr: Address,
    kind: BoundaryKind,
}

/// A set of disjoint address ranges, kept sorted and merged at all times.
///
/// Internally the pool is a sorted sequence of boundaries, alternating
/// Start, End, Start, End, ...; the i-th range is the i-th (Start, End)
/// pair.  [`Pool::add_range`] maintains this encoding by removing every
/// boundary the new range swallows and re-anchoring the two ends.
///
/// Two ranges merge when they share at least one address (including a
/// single shared endpoint).  Ranges that are merely adjacent, with the end
/// of one exactly one below the start of the other, stay distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    bounds: Vec<Boundary>,
}

impl Pool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of disjoint ranges in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len() / 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Remove all ranges.
    pub fn clear(&mut self) {
        self.bounds.clear();
    }

    /// Insert a range, merging it with every stored range it overlaps.
    ///
    /// ```
    ///    use ippool_lib::{AddrRange, Pool};
    ///    let mut pool = Pool::new();
    ///    pool.add_range(AddrRange::from_strs("10.0.0.1", "10.0.0.50"));
    ///    pool.add_range(AddrRange::from_strs("10.0.0.40", "10.0.0.90"));
    ///    pool.add_range(AddrRange::from_strs("10.0.1.1", "10.0.1.9"));
    ///    assert_eq!(pool.len(), 2);
    /// ```
    pub fn add_range(&mut self, range: AddrRange) {
        let (lo, hi) = (range.lo(), range.hi());

        //  Every boundary whose address falls in [lo, hi] belongs to a
        //  range fully or partially swallowed by the new one.
        let first = self.bounds.partition_point(|b| b.addr < lo);
        let last = self.bounds.partition_point(|b| b.addr <= hi);

        //  A Start surviving just left of `lo` opened a range whose End was
        //  swallowed: the merged range keeps that start, no new one at `lo`.
        let keep_left = first
            .checked_sub(1)
            .and_then(|i| self.bounds.get(i))
            .is_some_and(|b| b.kind == BoundaryKind::Start);
        //  Symmetric on the right: an End just past `hi` closes a range
        //  that continues beyond the new one.
        let keep_right = self
            .bounds
            .get(last)
            .is_some_and(|b| b.kind == BoundaryKind::End);

        let mut fresh = Vec::with_capacity(2);
        if !keep_left {
            fresh.push(Boundary {
                addr: lo,
                kind: BoundaryKind::Start,
            });
        }
        if !keep_right {
            fresh.push(Boundary {
                addr: hi,
                kind: BoundaryKind::End,
            });
        }
        self.bounds.splice(first..last, fresh);

        debug_assert!(self.is_canonical());
    }

    /// The stored range containing the given address, if any.
    #[must_use]
    pub fn find_range(&self, addr: Address) -> Option<AddrRange> {
        //  First boundary at an address >= addr.
        let idx = self.bounds.partition_point(|b| b.addr < addr);
        let anchor = self.bounds.get(idx)?;
        let found = match anchor.kind {
            //  Closing boundary: addr sits inside the range it closes
            //  (its Start is the previous boundary, strictly below addr,
            //  or it would have been the anchor itself).
            BoundaryKind::End => {
                let start = idx.checked_sub(1).and_then(|i| self.bounds.get(i))?;
                AddrRange::new(start.addr, anchor.addr)
            }
            //  Opening boundary: a hit only if addr is exactly the start;
            //  otherwise addr lies in the gap before this range.
            BoundaryKind::Start => {
                if anchor.addr != addr {
                    return None;
                }
                let end = self.bounds.get(idx + 1)?;
                AddrRange::new(anchor.addr, end.addr)
            }
        };
        debug_assert!(found.contains(addr));
        Some(found)
    }

    /// The disjoint ranges in ascending address order.  The iterator is
    /// lazy, double-ended and restartable; it borrows the pool, so the
    /// pool cannot be mutated while one is alive.
    #[must_use]
    pub fn ranges(
        &self,
    ) -> impl DoubleEndedIterator<Item = AddrRange> + ExactSizeIterator + '_ {
        self.bounds.chunks_exact(2).map(|pair| match pair {
            [start, end] => AddrRange::new(start.addr, end.addr),
            misshaped => unreachable!("odd boundary pair {:?}", misshaped),
        })
    }

    fn is_canonical(&self) -> bool {
        self.bounds.len() % 2 == 0
            && self.bounds.windows(2).all(|w| match w {
                [a, b] => a < b,
                misshaped => unreachable!("window of 2 was {:?}", misshaped),
            })
            && self.bounds.iter().enumerate().all(|(i, b)| {
                b.kind
                    == if i % 2 == 0 {
                        BoundaryKind::Start
                    } else {
                        BoundaryKind::End
                    }
            })
    }
}

impl Extend<AddrRange> for Pool {
    fn extend<T: IntoIterator<Item = AddrRange>>(&mut self, iter: T) {
        for range in iter {
            self.add_range(range);
        }
    }
}

impl FromIterator<AddrRange> for Pool {
    fn from_iter<T: IntoIterator<Item = AddrRange>>(iter: T) -> Self {
        let mut pool = Pool::new();
        pool.extend(iter);
        pool
    }
}

impl ::core::fmt::Display for Pool {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{{")?;
        for (idx, range) in self.ranges().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", range)?;
        }
        write!(f, "}}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.ranges())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pool {
    /// Deserializes a sequence of ranges; overlaps in the input are
    /// merged on the way in, so the result is canonical.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ranges = Vec::<AddrRange>::deserialize(deserializer)?;
        Ok(ranges.into_iter().collect())
    }
}
