//! Nearest bracketing pair search.
//!
//! Directive anchors sit on (or within a few meters of) the circle or
//! border they refer to, but almost never coincide with one of its
//! indexed points. The locator snaps a query point onto the two adjacent
//! indexed points that most tightly bracket it.

use crate::error::BoundaryError;
use crate::point::BoundaryPoint;

/// Find the adjacent index pair `(i, i + 1)` bracketing the query point.
///
/// Cost for a pair is the sum of squared coordinate deltas from the query
/// to both ends of the segment, in degrees. This is a planar
/// approximation, adequate because query points deviate from the ring by
/// far less than the ring's point spacing. The scan is O(N) and ties
/// resolve to the first minimum encountered, so the result is
/// deterministic for a fixed ring.
pub fn bracketing_pair(
    ring: &[BoundaryPoint],
    query: &BoundaryPoint,
) -> Result<(usize, usize), BoundaryError> {
    if ring.len() < 2 {
        return Err(BoundaryError::EmptyRing { len: ring.len() });
    }

    log::trace!(
        "finding position on ring for lat:{} lon:{}",
        query.latitude(),
        query.longitude()
    );

    let mut best_cost = f64::INFINITY;
    let mut best_pair = (0, 1);
    for i in 0..ring.len() - 1 {
        let a = &ring[i];
        let b = &ring[i + 1];
        let cost = (query.latitude() - a.latitude()).powi(2)
            + (query.longitude() - a.longitude()).powi(2)
            + (b.latitude() - query.latitude()).powi(2)
            + (b.longitude() - query.longitude()).powi(2);
        if cost < best_cost {
            best_cost = cost;
            best_pair = (i, i + 1);
        }
    }
    Ok(best_pair)
}
