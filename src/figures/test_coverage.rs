//! Test coverage per architectural layer: coverage pie plus total-vs-tested
//! lines of code.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::{axis, bars, pie, BarSeries};
use crate::error::FigureError;
use crate::style;

pub const TITLE: &str = "Test Coverage by Architectural Layer";

const LAYERS: [&str; 4] = [
    "API\nControllers",
    "Business\nServices",
    "Data\nRepositories",
    "Entity\nModels",
];
const COVERAGE: [f64; 4] = [85.0, 95.0, 90.0, 100.0];
const LINES_OF_CODE: [f64; 4] = [1200.0, 3500.0, 2800.0, 1500.0];
const LAYER_COLORS: [RGBColor; 4] = [style::BLUE, style::RED, style::GREEN, style::ORANGE];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let panels = root.split_evenly((1, 2));

    // Left: coverage pie
    let (pw, _) = panels[0].dim_in_pixel();
    panels[0].draw(&Text::new(
        TITLE,
        (pw as i32 / 2, 16),
        (style::FONT, 30)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;
    pie::draw(&panels[0], &COVERAGE, &LAYER_COLORS, &LAYERS)?;

    // Right: total vs tested lines
    let tested: Vec<f64> = LINES_OF_CODE
        .iter()
        .zip(COVERAGE.iter())
        .map(|(&loc, &cov)| (loc * cov / 100.0).round())
        .collect();

    let mut chart = ChartBuilder::on(&panels[1])
        .caption("Tested Lines of Code", (style::FONT, 30).into_font())
        .margin(16)
        .x_label_area_size(100)
        .y_label_area_size(110)
        .build_cartesian_2d(-0.5..3.5, 0.0..4100.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .y_desc("Lines of Code")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::grouped_vertical(
        &mut chart,
        &[
            BarSeries {
                label: "Total lines",
                color: style::GRAY,
                values: &LINES_OF_CODE,
            },
            BarSeries {
                label: "Tested lines",
                color: style::DARK_GREEN,
                values: &tested,
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

    axis::category_labels(&panels[1], &chart, &LAYERS, 0.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(LAYERS.len(), COVERAGE.len());
        assert_eq!(LAYERS.len(), LINES_OF_CODE.len());
        assert_eq!(LAYERS.len(), LAYER_COLORS.len());
    }

    #[test]
    fn coverage_is_a_percentage() {
        assert!(COVERAGE.iter().all(|&c| (0.0..=100.0).contains(&c)));
    }
}
