//! Arc extraction from a tessellated circle.
//!
//! Given a closed ring, an arc is the contiguous run of ring points
//! between the start and stop anchors, walked in the direction the
//! directive names. Index order on the ring is clockwise, so a clockwise
//! arc walks forward and may wrap past the ring origin; a
//! counter-clockwise arc walks backward.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::locator::bracketing_pair;
use crate::error::BoundaryError;
use crate::point::BoundaryPoint;

/// Rotational direction of an arc directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

/// Extract the intermediate ring points realizing one arc directive.
///
/// The output holds ring points only; the caller appends the true start
/// and stop anchors itself. When both anchors snap onto the same ring
/// segment the arc has no intermediate points and the result is empty.
pub fn extract_arc_points(
    ring: &[BoundaryPoint],
    start: &BoundaryPoint,
    stop: &BoundaryPoint,
    direction: ArcDirection,
) -> Result<Vec<BoundaryPoint>, BoundaryError> {
    let (s0, s1) = bracketing_pair(ring, start)?;
    let (t0, t1) = bracketing_pair(ring, stop)?;
    let (smin, smax) = (s0.min(s1), s0.max(s1));
    let (tmin, tmax) = (t0.min(t1), t0.max(t1));

    let run = match (direction, smin.cmp(&tmin)) {
        (ArcDirection::Clockwise, Ordering::Less) => ring[smax..=tmin].to_vec(),
        (ArcDirection::Clockwise, Ordering::Greater) => {
            // The run crosses the ring origin: two slices
            log::debug!("extracting clockwise across origin from {} to {}", smax, tmin);
            let mut run = ring[smax..].to_vec();
            run.extend_from_slice(&ring[..=tmin]);
            run
        }
        (ArcDirection::CounterClockwise, Ordering::Less) => {
            // Backward walk crossing the origin: two reversed slices
            log::debug!(
                "extracting counter-clockwise across origin from {} to {}",
                smin,
                tmax
            );
            let mut run: Vec<BoundaryPoint> = ring[..=smin].iter().rev().cloned().collect();
            run.extend(ring[tmax..].iter().rev().cloned());
            run
        }
        (ArcDirection::CounterClockwise, Ordering::Greater) => {
            ring[tmax..smin + 1].iter().rev().cloned().collect()
        }
        // Start and stop snap to the same segment: nothing between them
        (_, Ordering::Equal) => Vec::new(),
    };
    Ok(run)
}
