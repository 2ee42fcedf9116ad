//! Quality metrics across the four adopted architecture phases, with a fitted
//! maintainability trend curve.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::charts::{axis, bars, BarSeries};
use crate::error::FigureError;
use crate::stats;
use crate::style;

pub const TITLE: &str = "Quality Metrics Across Adopted Architectures";

const PHASES: [&str; 4] = [
    "Phase 1\nMonolith",
    "Phase 2\nN-Tier",
    "Phase 3\nN-Tier + DDD",
    "Phase 4\nMicroservices\n(planned)",
];
const COMPLEXITY: [f64; 4] = [30.0, 50.0, 70.0, 90.0];
const MAINTAINABILITY: [f64; 4] = [40.0, 75.0, 85.0, 95.0];
const SCALABILITY: [f64; 4] = [20.0, 60.0, 75.0, 98.0];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (style::FONT, style::TITLE_SIZE).into_font())
        .margin(20)
        .x_label_area_size(130)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..3.5, 0.0..110.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .x_desc("Project Phase")
        .y_desc("Quality Index (%)")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::grouped_vertical(
        &mut chart,
        &[
            BarSeries {
                label: "Initial complexity",
                color: style::RED,
                values: &COMPLEXITY,
            },
            BarSeries {
                label: "Maintainability",
                color: style::BLUE,
                values: &MAINTAINABILITY,
            },
            BarSeries {
                label: "Scalability",
                color: style::GREEN,
                values: &SCALABILITY,
            },
        ],
        None,
    )?;

    // Maintainability trend across the phases
    let xs: Vec<f64> = (0..PHASES.len()).map(|i| i as f64).collect();
    let fit = stats::quadratic_fit(&xs, &MAINTAINABILITY)
        .ok_or_else(|| FigureError::Draw("maintainability trend fit failed".into()))?;
    chart.draw_series(DashedLineSeries::new(
        fit.sample(0.0, 3.0, 100),
        10,
        8,
        style::BLUE.mix(0.5).stroke_width(3),
    ))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    axis::category_labels(root, &chart, &PHASES, 0.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(PHASES.len(), COMPLEXITY.len());
        assert_eq!(PHASES.len(), MAINTAINABILITY.len());
        assert_eq!(PHASES.len(), SCALABILITY.len());
    }

    #[test]
    fn maintainability_trend_is_fittable() {
        let xs: Vec<f64> = (0..PHASES.len()).map(|i| i as f64).collect();
        let fit = stats::quadratic_fit(&xs, &MAINTAINABILITY).expect("fit");
        // The curve should stay close to the data it was fitted on.
        for (&x, &y) in xs.iter().zip(MAINTAINABILITY.iter()) {
            assert!((fit.eval(x) - y).abs() < 10.0);
        }
    }
}
