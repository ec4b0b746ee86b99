//! WGS84 to Web Mercator (EPSG:3857) reprojection.

use crate::models::ProjectedPoint;

/// Half the projected world width in meters.
const ORIGIN_SHIFT: f64 = 20037508.342789244;

/// Latitudes beyond this band have no Web Mercator representation.
const MAX_LAT: f64 = 85.05112878;

/// Project a WGS84 coordinate onto the Web Mercator plane.
///
/// Latitude is clamped to ±85.05112878° before the transform, which is
/// singular beyond that band. Always returns a point; there is no error path.
pub fn to_projected(lat: f64, lon: f64) -> ProjectedPoint {
    let lat = lat.clamp(-MAX_LAT, MAX_LAT);
    let x = lon * ORIGIN_SHIFT / 180.0;
    let y = ((90.0 + lat) * std::f64::consts::PI / 360.0).tan().ln() * ORIGIN_SHIFT
        / std::f64::consts::PI;
    ProjectedPoint { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_origin_maps_to_origin() {
        let p = to_projected(0.0, 0.0);
        assert!(p.x.abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn test_antimeridian_maps_to_world_edge() {
        let p = to_projected(0.0, 180.0);
        assert!((p.x - ORIGIN_SHIFT).abs() < EPS);
        assert!(p.y.abs() < EPS);
    }

    #[test]
    fn test_latitude_clamped_above_band() {
        let clamped = to_projected(90.0, 10.0);
        let edge = to_projected(MAX_LAT, 10.0);
        assert_eq!(clamped, edge);
    }

    #[test]
    fn test_latitude_clamped_below_band() {
        let clamped = to_projected(-89.9, -120.0);
        let edge = to_projected(-MAX_LAT, -120.0);
        assert_eq!(clamped, edge);
        assert!(clamped.y < 0.0);
    }

    #[test]
    fn test_clamp_is_idempotent_at_edge() {
        assert_eq!(to_projected(MAX_LAT, 0.0), to_projected(86.0, 0.0));
    }

    #[test]
    fn test_sacramento_lands_in_expected_quadrant() {
        let p = to_projected(38.5816, -121.4944);
        assert!(p.x < 0.0);
        assert!(p.y > 0.0);
    }
}
