//! Borders and linear extraction.
//!
//! A border is a shared, named polyline that multiple airspaces may
//! cross. Unlike a tessellated circle it is not closed, so extraction
//! never wraps; the traversal direction is inferred from which bracketing
//! pair comes first in the vertex order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::locator::bracketing_pair;
use crate::error::BoundaryError;
use crate::point::BoundaryPoint;

/// Border table supplied by the loading layer, keyed by border id
pub type BorderTable = HashMap<String, Border>;

/// A named border polyline, immutable once loaded and shared read-only
/// by every airspace that crosses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Border {
    id: String,
    name: String,
    points: Vec<BoundaryPoint>,
}

impl Border {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: Vec<BoundaryPoint>) -> Self {
        Border {
            id: id.into(),
            name: name.into(),
            points,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    /// Look up a border point by its native identifier.
    pub fn point_by_id(&self, id: &str) -> Option<&BoundaryPoint> {
        self.points.iter().find(|p| p.id() == id)
    }
}

/// Extract the intermediate border points between two anchors.
///
/// The anchors sit near the border but are generally not border vertices
/// themselves; each snaps onto a bracketing vertex pair and the run
/// between the pairs is returned, reversed when the stop pair precedes
/// the start pair in vertex order. The caller appends the anchors itself.
///
/// The endpoint-inclusion bounds of the reverse branch differ from the
/// counter-clockwise arc case; consumers depend on the point counts this
/// produces, so both are kept exactly as observed.
pub fn extract_border_points(
    border: &Border,
    start: &BoundaryPoint,
    stop: &BoundaryPoint,
) -> Result<Vec<BoundaryPoint>, BoundaryError> {
    log::debug!("extracting border {} ({})", border.id, border.name);

    let (s0, s1) = bracketing_pair(&border.points, start)?;
    let (t0, t1) = bracketing_pair(&border.points, stop)?;
    let (smin, smax) = (s0.min(s1), s0.max(s1));
    let (tmin, tmax) = (t0.min(t1), t0.max(t1));

    let run = if smin < tmin {
        border.points[smax..=tmin].to_vec()
    } else {
        border.points[tmax..smin + 1].iter().rev().cloned().collect()
    };
    Ok(run)
}
