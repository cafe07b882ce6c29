//! Local tangent-plane projection.
//!
//! Spherical azimuthal equidistant projection about a reference point.
//! Distances and azimuths measured from the projection center are
//! preserved exactly, which is the property circle tessellation needs:
//! a regular polygon drawn on the plane around the origin inverse-projects
//! to a geodesic circle around the center.

use nalgebra::Vector2;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Azimuthal equidistant projection centered on a geographic point.
///
/// Plane coordinates are meters, x east and y north of the center.
#[derive(Debug, Clone, Copy)]
pub struct AzimuthalEquidistant {
    lat0: f64,
    lon0: f64,
    sin_lat0: f64,
    cos_lat0: f64,
}

impl AzimuthalEquidistant {
    /// Build a projection centered on the given point (decimal degrees).
    pub fn new(center_lat: f64, center_lon: f64) -> Self {
        let lat0 = center_lat.to_radians();
        AzimuthalEquidistant {
            lat0,
            lon0: center_lon.to_radians(),
            sin_lat0: lat0.sin(),
            cos_lat0: lat0.cos(),
        }
    }

    /// Project a geographic point (decimal degrees) onto the plane.
    pub fn forward(&self, lat: f64, lon: f64) -> Vector2<f64> {
        let phi = lat.to_radians();
        let dl = lon.to_radians() - self.lon0;
        let cos_c = self.sin_lat0 * phi.sin() + self.cos_lat0 * phi.cos() * dl.cos();
        let c = cos_c.clamp(-1.0, 1.0).acos();
        if c == 0.0 {
            return Vector2::zeros();
        }
        let azimuth = (dl.sin() * phi.cos())
            .atan2(self.cos_lat0 * phi.sin() - self.sin_lat0 * phi.cos() * dl.cos());
        let rho = EARTH_RADIUS_M * c;
        Vector2::new(rho * azimuth.sin(), rho * azimuth.cos())
    }

    /// Inverse-project a plane point back to decimal degrees (lat, lon).
    pub fn inverse(&self, plane: Vector2<f64>) -> (f64, f64) {
        let rho = plane.norm();
        if rho == 0.0 {
            return (self.lat0.to_degrees(), self.lon0.to_degrees());
        }
        let c = rho / EARTH_RADIUS_M;
        let (sin_c, cos_c) = c.sin_cos();
        let lat = (cos_c * self.sin_lat0 + plane.y * sin_c * self.cos_lat0 / rho).asin();
        let lon = self.lon0
            + (plane.x * sin_c).atan2(rho * self.cos_lat0 * cos_c - plane.y * self.sin_lat0 * sin_c);
        (lat.to_degrees(), lon.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let proj = AzimuthalEquidistant::new(50.0, 5.0);
        let plane = proj.forward(50.0, 5.0);
        assert!(plane.norm() < 0.1, "center offset {} m", plane.norm());
        let (lat, lon) = proj.inverse(Vector2::zeros());
        assert!((lat - 50.0).abs() < 1e-12);
        assert!((lon - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_northward_displacement() {
        let proj = AzimuthalEquidistant::new(50.0, 5.0);
        let (lat, lon) = proj.inverse(Vector2::new(0.0, 10_000.0));
        // 10 km north is about 0.09 degrees of latitude on a sphere
        assert!((lat - 50.0899).abs() < 1e-3, "lat was {}", lat);
        assert!((lon - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let proj = AzimuthalEquidistant::new(50.0, 5.0);
        let plane = Vector2::new(-3_500.0, 7_200.0);
        let (lat, lon) = proj.inverse(plane);
        let back = proj.forward(lat, lon);
        assert!((back.x - plane.x).abs() < 1e-3, "x was {}", back.x);
        assert!((back.y - plane.y).abs() < 1e-3, "y was {}", back.y);
    }
}
