use crate::pool::Pool;
use crate::ranges::AddrRange;

/// Compute the addresses covered by `old` but no longer covered by `new`,
/// as the coarsest set of disjoint ranges.
///
/// A single sweep walks both pools' ascending range sequences.  Each old
/// range starts out as a remainder which the overlapping new ranges trim
/// from the left, split in the middle, or swallow whole; whatever survives
/// is inserted into the result through [`Pool::add_range`], which takes
/// care of normalizing the pieces.
///
/// ```
///    use ippool_lib::{removed_ranges, AddrRange, Pool};
///
///    let old: Pool = [AddrRange::new(10, 90)].into_iter().collect();
///    let new: Pool = [AddrRange::new(40, 60)].into_iter().collect();
///    let gone = removed_ranges(&old, &new);
///    assert_eq!(
///        gone.ranges().collect::<Vec<_>>(),
///        [AddrRange::new(10, 39), AddrRange::new(61, 90)]
///    );
/// ```
#[must_use]
pub fn removed_ranges(old: &Pool, new: &Pool) -> Pool {
    let mut result = Pool::new();
    let mut covering = new.ranges().peekable();

    for range in old.ranges() {
        let mut remainder = Some(range);
        while let Some(rem) = remainder.take() {
            let Some(&cover) = covering.peek() else {
                result.add_range(rem);
                break;
            };
            if cover.hi() < rem.lo() {
                //  Entirely left of the remainder: it cannot touch this
                //  old range nor any later one, skip it.
                covering.next();
                remainder = Some(rem);
            } else if rem.hi() < cover.lo() {
                //  Entirely right: the remainder survives untouched.
                result.add_range(rem);
            } else {
                //  Overlap.  A left slice of the remainder may stick out;
                //  cover.lo() >= 1 here, so the -1 cannot underflow.
                if rem.lo() < cover.lo() {
                    result.add_range(AddrRange::new(rem.lo(), cover.lo() - 1));
                }
                if cover.hi() < rem.hi() {
                    //  The cover ends inside the remainder (so the +1
                    //  cannot overflow); keep subtracting from the rest.
                    remainder = Some(AddrRange::new(cover.hi() + 1, rem.hi()));
                    covering.next();
                }
                //  Otherwise the cover extends past the remainder: drop
                //  it, and keep the cover since it may swallow the next
                //  old range too.
            }
        }
    }
    result
}
