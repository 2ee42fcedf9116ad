//! Response time (log scale) and memory use against concurrent users for the
//! three architecture variants.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{lines, Marker};
use crate::error::FigureError;
use crate::style;

pub const TITLE: &str = "Performance and Scalability by Architecture";

const USERS: [f64; 7] = [10.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0];

const RESPONSE_MONOLITH: [f64; 7] = [120.0, 180.0, 350.0, 850.0, 2200.0, 5500.0, 12000.0];
const RESPONSE_NTIER: [f64; 7] = [115.0, 160.0, 280.0, 520.0, 1100.0, 2200.0, 4500.0];
const RESPONSE_PATTERNS: [f64; 7] = [110.0, 145.0, 240.0, 420.0, 850.0, 1500.0, 2800.0];

const MEMORY_MONOLITH: [f64; 7] = [180.0, 250.0, 380.0, 650.0, 1200.0, 2100.0, 3500.0];
const MEMORY_NTIER: [f64; 7] = [150.0, 210.0, 320.0, 520.0, 880.0, 1400.0, 2200.0];
const MEMORY_PATTERNS: [f64; 7] = [140.0, 195.0, 290.0, 450.0, 750.0, 1150.0, 1800.0];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let panels = root.split_evenly((1, 2));

    draw_response_time(&panels[0])?;
    draw_memory(&panels[1])?;

    Ok(())
}

fn draw_response_time<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(area)
        .caption("Scalability: Response Time", (style::FONT, 30).into_font())
        .margin(16)
        .x_label_area_size(80)
        .y_label_area_size(110)
        .build_cartesian_2d(0.0..2100.0, (100.0..15000.0).log_scale())?;

    chart
        .configure_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .x_desc("Concurrent Users")
        .y_desc("Response Time (ms)")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|v: &f64| format!("{v:.0}"))
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    draw_variants(
        &mut chart,
        &[
            (&RESPONSE_MONOLITH, style::RED, Marker::Circle, "Monolith"),
            (&RESPONSE_NTIER, style::BLUE, Marker::Square, "N-Tier"),
            (
                &RESPONSE_PATTERNS,
                style::GREEN,
                Marker::Triangle,
                "N-Tier + Patterns",
            ),
        ],
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    Ok(())
}

fn draw_memory<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(area)
        .caption("Memory Efficiency", (style::FONT, 30).into_font())
        .margin(16)
        .x_label_area_size(80)
        .y_label_area_size(110)
        .build_cartesian_2d(0.0..2100.0, 0.0..3700.0)?;

    chart
        .configure_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .x_desc("Concurrent Users")
        .y_desc("Memory Use (MB)")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|v: &f64| format!("{v:.0}"))
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    draw_variants(
        &mut chart,
        &[
            (&MEMORY_MONOLITH, style::RED, Marker::Circle, "Monolith"),
            (&MEMORY_NTIER, style::BLUE, Marker::Square, "N-Tier"),
            (
                &MEMORY_PATTERNS,
                style::GREEN,
                Marker::Triangle,
                "N-Tier + Patterns",
            ),
        ],
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    Ok(())
}

fn draw_variants<'b, DB, CT>(
    chart: &mut plotters::chart::ChartContext<'b, DB, CT>,
    variants: &[(&[f64; 7], RGBColor, Marker, &str)],
) -> Result<(), FigureError>
where
    DB: DrawingBackend,
    CT: plotters::coord::CoordTranslate<From = (f64, f64)>,
{
    for &(values, color, marker, label) in variants {
        lines::marker_series(chart, &lines::zip_points(&USERS, values), color, marker, label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_match_the_user_steps() {
        for series in [
            &RESPONSE_MONOLITH,
            &RESPONSE_NTIER,
            &RESPONSE_PATTERNS,
            &MEMORY_MONOLITH,
            &MEMORY_NTIER,
            &MEMORY_PATTERNS,
        ] {
            assert_eq!(series.len(), USERS.len());
        }
    }

    #[test]
    fn patterns_variant_outperforms_the_monolith() {
        for (optimized, monolith) in RESPONSE_PATTERNS.iter().zip(RESPONSE_MONOLITH.iter()) {
            assert!(optimized <= monolith);
        }
        for (optimized, monolith) in MEMORY_PATTERNS.iter().zip(MEMORY_MONOLITH.iter()) {
            assert!(optimized <= monolith);
        }
    }

    #[test]
    fn response_times_fit_the_log_axis() {
        for series in [&RESPONSE_MONOLITH, &RESPONSE_NTIER, &RESPONSE_PATTERNS] {
            assert!(series.iter().all(|&v| v >= 100.0 && v <= 15000.0));
        }
    }
}
