//! Implemented architectural components, one horizontal bar per kind.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{axis, bars};
use crate::error::FigureError;
use crate::style;

pub const TITLE: &str = "Architectural Components Implemented in the Platform";

const KINDS: [&str; 6] = [
    "Controllers",
    "Services",
    "Repositories",
    "Entities",
    "Interfaces",
    "Builders",
];
const COUNTS: [f64; 6] = [38.0, 39.0, 37.0, 40.0, 75.0, 4.0];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let x_max = 75.0 * 1.15;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (style::FONT, style::TITLE_SIZE).into_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(180)
        .build_cartesian_2d(0.0..x_max, -0.5..5.5)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .x_desc("Number of Components")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .y_label_formatter(&|_: &f64| String::new())
        .x_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::horizontal_rows(
        &mut chart,
        &COUNTS,
        &style::PALETTE,
        1.0,
        Some(&|v| format!("{v:.0}")),
    )?;

    axis::row_labels(root, &chart, &KINDS, 0.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(KINDS.len(), COUNTS.len());
        assert!(COUNTS.iter().all(|&c| c > 0.0));
    }
}
