//! Production error counts by severity across eight months, with the
//! architecture phases shaded behind the series.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::{axis, lines, Marker};
use crate::error::FigureError;
use crate::stats;
use crate::style;

pub const TITLE: &str = "Production Errors Across Architecture Phases";

const MONTHS: [&str; 8] = [
    "Month 1\n(Monolith)",
    "Month 2",
    "Month 3\n(N-Tier)",
    "Month 4",
    "Month 5",
    "Month 6\n(+Patterns)",
    "Month 7",
    "Month 8",
];
const CRITICAL: [f64; 8] = [12.0, 10.0, 8.0, 5.0, 4.0, 2.0, 1.0, 1.0];
const MEDIUM: [f64; 8] = [25.0, 22.0, 18.0, 15.0, 10.0, 8.0, 5.0, 4.0];
const MINOR: [f64; 8] = [45.0, 40.0, 35.0, 28.0, 22.0, 15.0, 12.0, 10.0];

const Y_MAX: f64 = 50.0;

const PHASES: [(f64, f64, RGBColor, &str); 3] = [
    (-0.5, 1.5, style::RED, "Monolithic phase"),
    (1.5, 4.5, style::ORANGE, "N-tier phase"),
    (4.5, 7.5, style::GREEN, "Patterns phase"),
];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (style::FONT, style::TITLE_SIZE).into_font())
        .margin(20)
        .x_label_area_size(100)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..7.5, 0.0..Y_MAX)?;

    chart
        .configure_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .x_desc("Development Period")
        .y_desc("Number of Errors")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    // Shaded phase spans sit behind the series
    for (x0, x1, color, label) in PHASES {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x0, 0.0), (x1, Y_MAX)],
                color.mix(0.15).filled(),
            )))?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 7), (x + 16, y + 7)], color.mix(0.3).filled())
            });
    }

    let xs: Vec<f64> = (0..MONTHS.len()).map(|i| i as f64).collect();
    lines::marker_series(
        &mut chart,
        &lines::zip_points(&xs, &CRITICAL),
        style::RED,
        Marker::Circle,
        "Critical",
    )?;
    lines::marker_series(
        &mut chart,
        &lines::zip_points(&xs, &MEDIUM),
        style::ORANGE,
        Marker::Square,
        "Medium",
    )?;
    lines::marker_series(
        &mut chart,
        &lines::zip_points(&xs, &MINOR),
        style::BLUE,
        Marker::Triangle,
        "Minor",
    )?;

    // Overall reduction from the first to the last month
    let initial = CRITICAL[0] + MEDIUM[0] + MINOR[0];
    let last = CRITICAL[7] + MEDIUM[7] + MINOR[7];
    let cut = stats::percent_reduction(initial, last);
    chart.draw_series(std::iter::once(Rectangle::new(
        [(2.4, 41.5), (4.7, 46.5)],
        style::GREEN.mix(0.3).filled(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        format!("Total reduction: {cut:.0}%"),
        (3.55, 44.0),
        (style::FONT, style::ANNOTATION_SIZE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((style::FONT, style::TICK_SIZE))
        .draw()?;

    axis::category_labels(root, &chart, &MONTHS, 0.0)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(MONTHS.len(), CRITICAL.len());
        assert_eq!(MONTHS.len(), MEDIUM.len());
        assert_eq!(MONTHS.len(), MINOR.len());
    }

    #[test]
    fn phase_spans_cover_every_month() {
        assert_eq!(PHASES[0].0, -0.5);
        assert_eq!(PHASES[2].1, 7.5);
        for pair in PHASES.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn errors_trend_downward() {
        for series in [&CRITICAL, &MEDIUM, &MINOR] {
            assert!(series[7] < series[0]);
        }
    }
}
