//! Line Chart Primitives
//! Marker line series with legend entries, usable on linear and log axes.

use plotters::chart::ChartContext;
use plotters::coord::CoordTranslate;
use plotters::prelude::*;

use crate::error::FigureError;

/// Marker drawn on every data point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

/// Draw a line series with per-point markers and a legend entry.
pub fn marker_series<'b, DB, CT>(
    chart: &mut ChartContext<'b, DB, CT>,
    points: &[(f64, f64)],
    color: RGBColor,
    marker: Marker,
    label: &str,
) -> Result<(), FigureError>
where
    DB: DrawingBackend,
    CT: CoordTranslate<From = (f64, f64)>,
{
    chart
        .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(3)))?
        .label(label)
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 22, y)], color.stroke_width(3))
        });

    match marker {
        Marker::Circle => {
            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 5, color.filled())),
            )?;
        }
        Marker::Square => {
            chart.draw_series(points.iter().map(|&(x, y)| {
                EmptyElement::at((x, y)) + Rectangle::new([(-4, -4), (4, 4)], color.filled())
            }))?;
        }
        Marker::Triangle => {
            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| TriangleMarker::new((x, y), 6, color.filled())),
            )?;
        }
    }

    Ok(())
}

/// Zip separate x and y slices into the point list `marker_series` expects.
pub fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_points_pairs_up_to_shorter_slice() {
        let pts = zip_points(&[1.0, 2.0, 3.0], &[4.0, 5.0]);
        assert_eq!(pts, vec![(1.0, 4.0), (2.0, 5.0)]);
    }

    #[test]
    fn marker_series_draws_on_linear_axes() {
        let mut buf = vec![0u8; 300 * 200 * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (300, 200)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0.0..10.0, 0.0..10.0)
                .unwrap();
            marker_series(
                &mut chart,
                &[(1.0, 1.0), (5.0, 6.0), (9.0, 4.0)],
                RED,
                Marker::Triangle,
                "series",
            )
            .unwrap();
        }
        assert!(buf.chunks(3).any(|p| p != [255, 255, 255]));
    }
}
