//! Task completion times with and without design patterns, with per-task
//! improvement annotations.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::{axis, bars, BarSeries};
use crate::error::FigureError;
use crate::stats;
use crate::style;

pub const TITLE: &str = "Task Time Comparison: Impact of Design Patterns";

const TASKS: [&str; 4] = [
    "Developer\nOnboarding",
    "Database\nMigration",
    "New Module\nDelivery",
    "Major\nRefactoring",
];
const WITHOUT_PATTERNS: [f64; 4] = [12.0, 20.0, 15.0, 25.0];
const WITH_PATTERNS: [f64; 4] = [2.5, 1.0, 3.0, 8.0];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (style::FONT, style::TITLE_SIZE).into_font())
        .margin(20)
        .x_label_area_size(100)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..3.5, 0.0..29.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .y_desc("Time (days)")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    bars::grouped_vertical(
        &mut chart,
        &[
            BarSeries {
                label: "Without patterns",
                color: style::RED,
                values: &WITHOUT_PATTERNS,
            },
            BarSeries {
                label: "With patterns",
                color: style::GREEN,
                values: &WITH_PATTERNS,
            },
        ],
        Some(&|v| format!("{v:.1}d")),
    )?;

    // Improvement above each task group
    let annotation = (style::FONT, style::ANNOTATION_SIZE)
        .into_font()
        .color(&style::DARK_GREEN)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(WITHOUT_PATTERNS.iter().zip(WITH_PATTERNS.iter()).enumerate().map(
        |(i, (&before, &after))| {
            let cut = stats::percent_reduction(before, after);
            Text::new(
                format!("-{cut:.0}%"),
                (i as f64, before.max(after) + 1.5),
                annotation.clone(),
            )
        },
    ))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    axis::category_labels(root, &chart, &TASKS, 0.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(TASKS.len(), WITHOUT_PATTERNS.len());
        assert_eq!(TASKS.len(), WITH_PATTERNS.len());
    }

    #[test]
    fn patterns_always_reduce_time() {
        for (before, after) in WITHOUT_PATTERNS.iter().zip(WITH_PATTERNS.iter()) {
            assert!(after < before);
        }
    }
}
