//! Boundary point types.
//!
//! A [`BoundaryPoint`] is an immutable geographic coordinate with identity.
//! Equality compares latitude and longitude rounded to a fixed-point unit,
//! not raw floats, so that points sourced from different directives
//! deduplicate deterministically across platforms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Decimal digits used for coordinate equality (about 1.1 m at the equator)
pub const DEFAULT_PRECISION: u32 = 5;

/// Semantic origin of a boundary point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointTag {
    /// A vertex taken verbatim from the source data
    Vertex,
    /// A point synthesized by circle tessellation
    CirclePoint,
    /// The center of an arc directive
    ArcCenter,
}

/// An immutable coordinate with identity.
///
/// Latitude and longitude are signed decimal degrees, positive north/east.
/// The id is stable and unique within the ring that owns the point: a
/// source CRC for vertices and border points, a tessellation index for
/// circle points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryPoint {
    latitude: f64,
    longitude: f64,
    id: String,
    tag: PointTag,
}

impl BoundaryPoint {
    pub fn new(latitude: f64, longitude: f64, id: impl Into<String>, tag: PointTag) -> Self {
        BoundaryPoint {
            latitude,
            longitude,
            id: id.into(),
            tag,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tag(&self) -> PointTag {
        self.tag
    }

    /// Fixed-point coordinate key at the given number of decimal digits.
    ///
    /// Two points with the same key are considered the same location.
    pub fn coordinate_key(&self, digits: u32) -> (i64, i64) {
        let scale = 10f64.powi(digits as i32);
        (
            (self.latitude * scale).round() as i64,
            (self.longitude * scale).round() as i64,
        )
    }
}

impl PartialEq for BoundaryPoint {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate_key(DEFAULT_PRECISION) == other.coordinate_key(DEFAULT_PRECISION)
    }
}

impl Eq for BoundaryPoint {}

impl Hash for BoundaryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate_key(DEFAULT_PRECISION).hash(state);
    }
}

impl fmt::Display for BoundaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.longitude, self.latitude)
    }
}
