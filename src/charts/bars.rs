//! Bar Chart Primitives
//! Grouped vertical bars and horizontal bar rows, drawn as translucent fills
//! with solid outlines and optional value labels.

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::FigureError;
use crate::style;

/// One series within a grouped bar chart.
pub struct BarSeries<'a> {
    pub label: &'a str,
    pub color: RGBColor,
    pub values: &'a [f64],
}

/// Fraction of each category slot occupied by the full bar group.
const GROUP_WIDTH: f64 = 0.7;

/// Draw grouped vertical bars around integer category positions.
///
/// `value_label` formats the number drawn on top of each bar; `None` disables
/// the labels. Each series gets a legend entry.
pub fn grouped_vertical<'b, DB: DrawingBackend>(
    chart: &mut ChartContext<'b, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    series: &[BarSeries<'_>],
    value_label: Option<&dyn Fn(f64) -> String>,
) -> Result<(), FigureError> {
    let bar_w = GROUP_WIDTH / series.len().max(1) as f64;

    for (s_idx, s) in series.iter().enumerate() {
        let offset = -GROUP_WIDTH / 2.0 + s_idx as f64 * bar_w;
        let color = s.color;

        chart
            .draw_series(s.values.iter().enumerate().map(|(i, &v)| {
                let x0 = i as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + bar_w, v)], color.mix(0.8).filled())
            }))?
            .label(s.label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 7), (x + 16, y + 7)], color.mix(0.8).filled())
            });

        chart.draw_series(s.values.iter().enumerate().map(|(i, &v)| {
            let x0 = i as f64 + offset;
            Rectangle::new([(x0, 0.0), (x0 + bar_w, v)], BLACK.stroke_width(1))
        }))?;

        if let Some(fmt) = value_label {
            let label_style = (style::FONT, style::VALUE_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            chart.draw_series(s.values.iter().enumerate().map(|(i, &v)| {
                let x = i as f64 + offset + bar_w / 2.0;
                Text::new(fmt(v), (x, v), label_style.clone())
            }))?;
        }
    }

    Ok(())
}

/// Draw vertical bars with one color per category (a single series).
///
/// `colors` cycles when shorter than `values`.
pub fn vertical_colored<'b, DB: DrawingBackend>(
    chart: &mut ChartContext<'b, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    values: &[f64],
    colors: &[RGBColor],
    label_pad: f64,
    value_label: Option<&dyn Fn(f64) -> String>,
) -> Result<(), FigureError> {
    const BAR_WIDTH: f64 = 0.6;

    for (i, &v) in values.iter().enumerate() {
        let color = colors[i % colors.len()];
        let x0 = i as f64 - BAR_WIDTH / 2.0;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x0 + BAR_WIDTH, v)],
            color.mix(0.8).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x0 + BAR_WIDTH, v)],
            BLACK.stroke_width(1),
        )))?;

        if let Some(fmt) = value_label {
            let label_style = (style::FONT, style::VALUE_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            chart.draw_series(std::iter::once(Text::new(
                fmt(v),
                (i as f64, v + label_pad),
                label_style,
            )))?;
        }
    }

    Ok(())
}

/// Draw one horizontal bar per category, index 0 at the bottom.
///
/// `colors` cycles when shorter than `values`; `label_pad` is the data-space
/// gap between a bar end and its value label.
pub fn horizontal_rows<'b, DB: DrawingBackend>(
    chart: &mut ChartContext<'b, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    values: &[f64],
    colors: &[RGBColor],
    label_pad: f64,
    value_label: Option<&dyn Fn(f64) -> String>,
) -> Result<(), FigureError> {
    const BAR_HEIGHT: f64 = 0.6;

    for (i, &v) in values.iter().enumerate() {
        let color = colors[i % colors.len()];
        let y0 = i as f64 - BAR_HEIGHT / 2.0;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, y0), (v, y0 + BAR_HEIGHT)],
            color.mix(0.8).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, y0), (v, y0 + BAR_HEIGHT)],
            BLACK.stroke_width(1),
        )))?;

        if let Some(fmt) = value_label {
            let label_style = (style::FONT, style::VALUE_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center));
            chart.draw_series(std::iter::once(Text::new(
                fmt(v),
                (v + label_pad, i as f64),
                label_style,
            )))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_white(buf: &[u8]) -> bool {
        buf.chunks(3).any(|p| p != [255, 255, 255])
    }

    #[test]
    fn grouped_bars_mark_the_canvas() {
        let mut buf = vec![0u8; 300 * 200 * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (300, 200)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(-0.5..2.5, 0.0..10.0)
                .unwrap();
            grouped_vertical(
                &mut chart,
                &[
                    BarSeries { label: "a", color: RED, values: &[1.0, 5.0, 9.0] },
                    BarSeries { label: "b", color: BLUE, values: &[2.0, 4.0, 8.0] },
                ],
                None,
            )
            .unwrap();
        }
        assert!(non_white(&buf));
    }

    #[test]
    fn horizontal_rows_mark_the_canvas() {
        let mut buf = vec![0u8; 300 * 200 * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (300, 200)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0.0..10.0, -0.5..2.5)
                .unwrap();
            horizontal_rows(&mut chart, &[3.0, 7.0, 9.0], &[GREEN], 0.2, None).unwrap();
        }
        assert!(non_white(&buf));
    }
}
