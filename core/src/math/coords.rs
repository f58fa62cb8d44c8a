use serde::{Deserialize, Serialize};

/// Sky position in degrees derived from the scan angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyCoord {
    /// Latitude, degrees, [-90, 90].
    pub lat: f64,
    /// Longitude, degrees, [-180, 180).
    pub lon: f64,
}

impl SkyCoord {
    /// Converts colatitude/azimuth in radians to latitude/longitude degrees.
    ///
    /// `theta` runs 0 (north pole) to pi (south pole): `lat = 90 - theta` in
    /// degrees. `phi` runs 0..2pi and is re-centered to [-180, 180).
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Self {
            lat: 90.0 - theta.to_degrees(),
            lon: phi.to_degrees() - 180.0,
        }
    }

    /// Whether the position sits inside the galactic exclusion band.
    pub fn in_plane(&self, cut_deg: f64) -> bool {
        self.lat.abs() <= cut_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn equator_maps_to_zero_latitude() {
        let coord = SkyCoord::from_angles(PI / 2.0, PI);
        assert!(coord.lat.abs() < 1e-9);
        assert!(coord.lon.abs() < 1e-9);
    }

    #[test]
    fn poles_map_to_extreme_latitudes() {
        assert!((SkyCoord::from_angles(0.0, 0.0).lat - 90.0).abs() < 1e-9);
        assert!((SkyCoord::from_angles(PI, 0.0).lat + 90.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_stays_in_range() {
        let west = SkyCoord::from_angles(PI / 2.0, 0.0);
        assert!((west.lon + 180.0).abs() < 1e-9);
        let east = SkyCoord::from_angles(PI / 2.0, 2.0 * PI - 1e-9);
        assert!(east.lon < 180.0);
    }

    #[test]
    fn in_plane_uses_inclusive_band() {
        let coord = SkyCoord { lat: -20.0, lon: 0.0 };
        assert!(coord.in_plane(20.0));
        assert!(!coord.in_plane(19.9));
    }
}
