//! SOLID principle compliance against the target, and measured impact on code
//! quality.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{axis, bars};
use crate::error::FigureError;
use crate::style;

pub const TITLE: &str = "SOLID Principles: Compliance and Quality Impact";

const PRINCIPLES: [&str; 5] = [
    "SRP\nSingle\nResponsibility",
    "OCP\nOpen/Closed",
    "LSP\nLiskov\nSubstitution",
    "ISP\nInterface\nSegregation",
    "DIP\nDependency\nInversion",
];
const COMPLIANCE: [f64; 5] = [95.0, 88.0, 92.0, 90.0, 98.0];
const QUALITY_IMPACT: [f64; 5] = [9.2, 8.5, 8.8, 8.7, 9.5];
const COMPLIANCE_TARGET: f64 = 85.0;

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let panels = root.split_evenly((1, 2));

    draw_compliance(&panels[0])?;
    draw_impact(&panels[1])?;

    Ok(())
}

fn draw_compliance<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(area)
        .caption("SOLID Compliance", (style::FONT, 30).into_font())
        .margin(16)
        .x_label_area_size(120)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..4.5, 0.0..110.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .y_desc("Compliance (%)")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::vertical_colored(
        &mut chart,
        &COMPLIANCE,
        &[style::BLUE],
        2.0,
        Some(&|v| format!("{v:.0}%")),
    )?;

    axis::h_reference(
        &mut chart,
        COMPLIANCE_TARGET,
        (-0.5, 4.5),
        style::DARK_GREEN,
        "Target: 85%",
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    axis::category_labels(area, &chart, &PRINCIPLES, 0.0)?;

    Ok(())
}

fn draw_impact<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(area)
        .caption("Impact on Code Quality", (style::FONT, 30).into_font())
        .margin(16)
        .x_label_area_size(120)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..4.5, 0.0..10.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .y_desc("Quality Impact (0-10)")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::vertical_colored(
        &mut chart,
        &QUALITY_IMPACT,
        &style::REDS,
        0.2,
        Some(&|v| format!("{v:.1}")),
    )?;

    axis::category_labels(area, &chart, &PRINCIPLES, 0.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(PRINCIPLES.len(), COMPLIANCE.len());
        assert_eq!(PRINCIPLES.len(), QUALITY_IMPACT.len());
        assert_eq!(PRINCIPLES.len(), style::REDS.len());
    }

    #[test]
    fn all_principles_meet_the_target() {
        assert!(COMPLIANCE.iter().all(|&c| c >= COMPLIANCE_TARGET));
    }
}
