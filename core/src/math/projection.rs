use std::f64::consts::PI;

/// Planar point produced by the forward Mollweide transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// Forward Mollweide projection of a sky position given in degrees.
///
/// Equal-area: x spans [-2*sqrt(2), 2*sqrt(2)], y spans [-sqrt(2), sqrt(2)].
/// The auxiliary angle solves `2t + sin(2t) = pi * sin(lat)` by Newton
/// iteration; the poles are handled directly since the iteration degenerates
/// there.
pub fn mollweide(lat_deg: f64, lon_deg: f64) -> MapPoint {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    let mut t = lat;
    if lat.abs() >= PI / 2.0 - 1e-9 {
        t = if lat < 0.0 { -PI / 2.0 } else { PI / 2.0 };
    } else {
        for _ in 0..16 {
            let delta = (2.0 * t + (2.0 * t).sin() - PI * lat.sin())
                / (2.0 + 2.0 * (2.0 * t).cos());
            t -= delta;
            if delta.abs() < 1e-12 {
                break;
            }
        }
    }

    MapPoint {
        x: 2.0 * 2.0_f64.sqrt() / PI * lon * t.cos(),
        y: 2.0_f64.sqrt() * t.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let point = mollweide(0.0, 0.0);
        assert!(point.x.abs() < 1e-9);
        assert!(point.y.abs() < 1e-9);
    }

    #[test]
    fn poles_collapse_to_vertical_extremes() {
        let north = mollweide(90.0, 45.0);
        assert!(north.x.abs() < 1e-9);
        assert!((north.y - 2.0_f64.sqrt()).abs() < 1e-9);

        let south = mollweide(-90.0, -120.0);
        assert!((south.y + 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn equator_edge_reaches_horizontal_extent() {
        let edge = mollweide(0.0, 180.0);
        assert!((edge.x - 2.0 * 2.0_f64.sqrt()).abs() < 1e-9);
        assert!(edge.y.abs() < 1e-9);
    }

    #[test]
    fn mid_latitude_converges() {
        let point = mollweide(45.0, 90.0);
        assert!(point.y > 0.0 && point.y < 2.0_f64.sqrt());
        assert!(point.x > 0.0);
    }
}
