use anyhow::anyhow;
use huntcore::catalog::{Candidate, RingRecord};
use huntcore::math::{mollweide, MapPoint};
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 700;

// Mollweide extents; the canvas keeps the projection's 2:1 aspect.
const X_SPAN: f64 = 2.0 * std::f64::consts::SQRT_2;
const Y_SPAN: f64 = std::f64::consts::SQRT_2;

const BACKDROP: RGBColor = RGBColor(8, 8, 16);
const GRID: RGBColor = RGBColor(52, 52, 74);
const RING_DOT: RGBColor = RGBColor(96, 96, 118);
const MASK_BAND: RGBColor = RGBColor(150, 130, 40);
const CORR_POSITIVE: RGBColor = RGBColor(255, 80, 60);
const CORR_NEGATIVE: RGBColor = RGBColor(60, 220, 255);

fn project(lat: f64, lon: f64) -> (f64, f64) {
    let MapPoint { x, y } = mollweide(lat, lon);
    (x, y)
}

fn parallel_points(lat: f64) -> Vec<(f64, f64)> {
    (-180..=180).map(|lon| project(lat, lon as f64)).collect()
}

/// Renders the sky-map artifact: every ring as a dim point, survivors as
/// highlighted circles colored by correlation sign, the galactic mask band
/// outlined when one was applied.
pub fn render(
    path: &Path,
    rings: &[RingRecord],
    survivors: &[Candidate],
    mask_cut: Option<f64>,
    caption: &str,
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&BACKDROP)
        .map_err(|err| anyhow!("filling chart backdrop: {}", err))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24).into_font().color(&WHITE))
        .margin(12)
        .build_cartesian_2d(-X_SPAN..X_SPAN, -Y_SPAN..Y_SPAN)
        .map_err(|err| anyhow!("building sky chart: {}", err))?;

    // Graticule: parallels every 30 degrees, meridians every 60.
    for lat_line in (-60..=60).step_by(30) {
        chart
            .draw_series(std::iter::once(PathElement::new(
                parallel_points(lat_line as f64),
                GRID,
            )))
            .map_err(|err| anyhow!("drawing graticule: {}", err))?;
    }
    for lon_line in (-180..=180).step_by(60) {
        let points: Vec<(f64, f64)> = (-90..=90)
            .map(|lat| project(lat as f64, lon_line as f64))
            .collect();
        chart
            .draw_series(std::iter::once(PathElement::new(points, GRID)))
            .map_err(|err| anyhow!("drawing graticule: {}", err))?;
    }

    if let Some(cut) = mask_cut {
        for band_edge in [cut, -cut] {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    parallel_points(band_edge),
                    MASK_BAND.stroke_width(2),
                )))
                .map_err(|err| anyhow!("drawing mask band: {}", err))?;
        }
    }

    chart
        .draw_series(rings.iter().map(|ring| {
            let coord = ring.coord();
            let (x, y) = project(coord.lat, coord.lon);
            Circle::new((x, y), 2, RING_DOT.filled())
        }))
        .map_err(|err| anyhow!("drawing ring backdrop: {}", err))?;

    chart
        .draw_series(survivors.iter().map(|candidate| {
            let (x, y) = project(candidate.lat, candidate.lon);
            Circle::new((x, y), 6, highlight_color(candidate.corr_ip).stroke_width(2))
        }))
        .map_err(|err| anyhow!("drawing candidates: {}", err))?;

    root.present()
        .map_err(|err| anyhow!("writing sky map {}: {}", path.display(), err))?;
    Ok(())
}

/// Warm for positive correlation, cold for negative (the convention the
/// survey's fracture maps used).
fn highlight_color(corr: f64) -> RGBColor {
    if corr >= 0.0 {
        CORR_POSITIVE
    } else {
        CORR_NEGATIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_color_follows_correlation_sign() {
        assert_eq!(highlight_color(0.3), CORR_POSITIVE);
        assert_eq!(highlight_color(-0.3), CORR_NEGATIVE);
    }

    #[test]
    fn parallels_stay_inside_projection_bounds() {
        for point in parallel_points(60.0) {
            assert!(point.0.abs() <= X_SPAN + 1e-9);
            assert!(point.1.abs() <= Y_SPAN + 1e-9);
        }
    }
}
