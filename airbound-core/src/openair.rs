//! OpenAir polygon rendering.
//!
//! Export collaborators report reconstructed outlines as waypoint lists
//! in the simple textual OpenAir point format, one `DP` line per polygon
//! point with colon-separated degree/minute/second coordinates.

use crate::boundary::Airspace;
use crate::coord::{dms_parts, hemisphere};
use crate::point::BoundaryPoint;

fn openair_coordinate(dd: f64, is_longitude: bool) -> String {
    let (degrees, minutes, seconds) = dms_parts(dd);
    let suffix = hemisphere(dd, is_longitude);
    if is_longitude {
        format!("{:03}:{:02}:{:02}{}", degrees, minutes, seconds.trunc() as u32, suffix)
    } else {
        format!("{:02}:{:02}:{:02}{}", degrees, minutes, seconds.trunc() as u32, suffix)
    }
}

/// One `DP` polygon point line.
pub fn point_line(point: &BoundaryPoint) -> String {
    format!(
        "DP {} {}",
        openair_coordinate(point.latitude(), false),
        openair_coordinate(point.longitude(), true)
    )
}

/// Render a whole polygon, one line per point.
pub fn polygon(airspace: &Airspace) -> String {
    airspace
        .polygon()
        .iter()
        .map(point_line)
        .collect::<Vec<_>>()
        .join("\n")
}
