//! Circle tessellation.
//!
//! A circle directive stores only a center and a radius. The engine needs
//! an ordered ring of concrete points, so the center is projected onto a
//! local azimuthal-equidistant plane, a regular polygon is walked around
//! the origin, and every vertex is inverse-projected back to geographic
//! coordinates.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::Ring;
use crate::error::BoundaryError;
use crate::point::{BoundaryPoint, PointTag};
use crate::projection::AzimuthalEquidistant;

/// Ring sides used when the caller has no preference
pub const DEFAULT_RESOLUTION: u32 = 64;

/// A circle given as center plus radius, consumed once by [`tessellate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub center: BoundaryPoint,
    pub radius_m: f64,
}

impl CircleSpec {
    pub fn new(center: BoundaryPoint, radius_m: f64) -> Self {
        CircleSpec { center, radius_m }
    }
}

/// Tessellate a circle into a closed ring of `resolution + 1` points.
///
/// Point ids are the decimal tessellation indices `"0"..="resolution"`;
/// the last point repeats the first point's coordinates to close the
/// ring. Index order is clockwise starting due north of the center, so
/// that walking forward through the ring moves clockwise.
pub fn tessellate(spec: &CircleSpec, resolution: u32) -> Result<Ring, BoundaryError> {
    if !(spec.radius_m > 0.0) {
        return Err(BoundaryError::InvalidRadius {
            radius_m: spec.radius_m,
        });
    }

    log::debug!(
        "tessellating circle at ({}, {}) radius {} m, {} sides",
        spec.center.latitude(),
        spec.center.longitude(),
        spec.radius_m,
        resolution
    );

    let projection = AzimuthalEquidistant::new(spec.center.latitude(), spec.center.longitude());
    let mut ring = Vec::with_capacity(resolution as usize + 1);
    for k in 0..resolution {
        let azimuth = TAU * f64::from(k) / f64::from(resolution);
        let vertex = Vector2::new(spec.radius_m * azimuth.sin(), spec.radius_m * azimuth.cos());
        let (lat, lon) = projection.inverse(vertex);
        ring.push(BoundaryPoint::new(
            lat,
            lon,
            k.to_string(),
            PointTag::CirclePoint,
        ));
    }
    // Close the ring with a copy of point 0 under the next index
    if let Some((lat, lon)) = ring.first().map(|p| (p.latitude(), p.longitude())) {
        ring.push(BoundaryPoint::new(
            lat,
            lon,
            resolution.to_string(),
            PointTag::CirclePoint,
        ));
    }
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> BoundaryPoint {
        BoundaryPoint::new(50.0, 5.0, "C", PointTag::ArcCenter)
    }

    /// Great-circle distance independent of the engine's projection code
    fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
        let dphi = (lat2 - lat1).to_radians();
        let dlambda = (lon2 - lon1).to_radians();
        let a = (dphi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        2.0 * crate::projection::EARTH_RADIUS_M * a.sqrt().asin()
    }

    #[test]
    fn test_ring_is_closed_with_resolution_plus_one_points() {
        let ring = tessellate(&CircleSpec::new(center(), 1000.0), 64).unwrap();
        assert_eq!(ring.len(), 65);
        assert_eq!(ring[0].latitude(), ring[64].latitude());
        assert_eq!(ring[0].longitude(), ring[64].longitude());
    }

    #[test]
    fn test_ids_are_tessellation_indices() {
        let ring = tessellate(&CircleSpec::new(center(), 500.0), 8).unwrap();
        let ids: Vec<&str> = ring.iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["0", "1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(ring.iter().all(|p| p.tag() == PointTag::CirclePoint));
    }

    #[test]
    fn test_zero_radius_is_rejected() {
        let err = tessellate(&CircleSpec::new(center(), 0.0), 64).unwrap_err();
        assert_eq!(err, BoundaryError::InvalidRadius { radius_m: 0.0 });
    }

    #[test]
    fn test_negative_radius_is_rejected() {
        let err = tessellate(&CircleSpec::new(center(), -5.0), 64).unwrap_err();
        assert_eq!(err, BoundaryError::InvalidRadius { radius_m: -5.0 });
    }

    #[test]
    fn test_points_sit_on_the_circle() {
        let ring = tessellate(&CircleSpec::new(center(), 1000.0), 8).unwrap();
        assert_eq!(ring.len(), 9);
        for p in &ring {
            let d = haversine_m(50.0, 5.0, p.latitude(), p.longitude());
            assert!((d - 1000.0).abs() < 0.5, "point {} is {} m out", p.id(), d);
        }
    }

    #[test]
    fn test_first_point_is_due_north() {
        let ring = tessellate(&CircleSpec::new(center(), 1000.0), 8).unwrap();
        assert!(ring[0].latitude() > 50.0);
        assert!((ring[0].longitude() - 5.0).abs() < 1e-9);
        // index 2 is due east: clockwise walk
        assert!(ring[2].longitude() > 5.0);
        assert!((ring[2].latitude() - 50.0).abs() < 1e-4);
    }
}
