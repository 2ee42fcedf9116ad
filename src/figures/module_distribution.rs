//! Component counts per module and the per-module cyclomatic complexity.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{axis, bars, BarSeries};
use crate::error::FigureError;
use crate::style;

pub const TITLE: &str = "Component Distribution and Complexity by Module";

const MODULES: [&str; 5] = ["Security", "Operations", "Parameters", "Geographic", "Core"];
const SERVICES: [f64; 5] = [12.0, 15.0, 5.0, 4.0, 3.0];
const REPOSITORIES: [f64; 5] = [10.0, 14.0, 6.0, 4.0, 3.0];
const COMPLEXITY: [f64; 5] = [8.5, 12.3, 6.2, 5.8, 4.5];
const COMPLEXITY_THRESHOLD: f64 = 10.0;

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let panels = root.split_evenly((1, 2));

    draw_components(&panels[0])?;
    draw_complexity(&panels[1])?;

    Ok(())
}

fn draw_components<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(area)
        .caption("Components per Module", (style::FONT, 30).into_font())
        .margin(16)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..4.5, 0.0..17.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .y_desc("Component Count")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::grouped_vertical(
        &mut chart,
        &[
            BarSeries {
                label: "Services",
                color: style::BLUE,
                values: &SERVICES,
            },
            BarSeries {
                label: "Repositories",
                color: style::RED,
                values: &REPOSITORIES,
            },
        ],
        None,
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    axis::category_labels(area, &chart, &MODULES, 0.0)?;

    Ok(())
}

fn draw_complexity<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(area)
        .caption(
            "Average Cyclomatic Complexity",
            (style::FONT, 30).into_font(),
        )
        .margin(16)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..4.5, 0.0..14.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .y_desc("Average Complexity")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::vertical_colored(
        &mut chart,
        &COMPLEXITY,
        &style::WARM,
        0.3,
        Some(&|v| format!("{v:.1}")),
    )?;

    axis::h_reference(
        &mut chart,
        COMPLEXITY_THRESHOLD,
        (-0.5, 4.5),
        style::RED,
        "Critical threshold",
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    axis::category_labels(area, &chart, &MODULES, 0.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(MODULES.len(), SERVICES.len());
        assert_eq!(MODULES.len(), REPOSITORIES.len());
        assert_eq!(MODULES.len(), COMPLEXITY.len());
        assert_eq!(MODULES.len(), style::WARM.len());
    }

    #[test]
    fn only_operations_exceeds_the_threshold() {
        let over: Vec<&str> = MODULES
            .iter()
            .zip(COMPLEXITY.iter())
            .filter(|(_, &c)| c > COMPLEXITY_THRESHOLD)
            .map(|(&m, _)| m)
            .collect();
        assert_eq!(over, vec!["Operations"]);
    }
}
