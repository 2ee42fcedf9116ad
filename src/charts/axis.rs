//! Axis Decoration Primitives
//! Categorical tick labels drawn beneath (or beside) numeric axes, and dashed
//! reference lines.

use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::CoordTranslate;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::FigureError;
use crate::style;

/// Draw category names under the x axis at integer positions 0..n.
///
/// Embedded `\n` splits a name onto stacked lines.
pub fn category_labels<'b, DB, CT>(
    area: &DrawingArea<DB, Shift>,
    chart: &ChartContext<'b, DB, CT>,
    names: &[&str],
    baseline: f64,
) -> Result<(), FigureError>
where
    DB: DrawingBackend,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let positions: Vec<f64> = (0..names.len()).map(|i| i as f64).collect();
    labels_below(area, chart, &positions, names, baseline)
}

/// Draw names under the x axis at explicit x positions.
pub fn labels_below<'b, DB, CT>(
    area: &DrawingArea<DB, Shift>,
    chart: &ChartContext<'b, DB, CT>,
    positions: &[f64],
    names: &[&str],
    baseline: f64,
) -> Result<(), FigureError>
where
    DB: DrawingBackend,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let (base_x, base_y) = area.get_base_pixel();
    let font = (style::FONT, style::TICK_SIZE).into_font().color(&BLACK);
    let anchor = Pos::new(HPos::Center, VPos::Top);

    for (&x, name) in positions.iter().zip(names) {
        let (px, py) = chart.plotting_area().map_coordinate(&(x, baseline));
        let (px, py) = (px - base_x, py - base_y);
        for (row, line) in name.split('\n').enumerate() {
            let y = py + 8 + row as i32 * (style::TICK_SIZE + 4);
            area.draw(&Text::new(line.to_string(), (px, y), font.clone().pos(anchor)))?;
        }
    }

    Ok(())
}

/// Draw category names left of the y axis at integer positions 0..n.
///
/// Multi-line names stack downward from the row center.
pub fn row_labels<'b, DB, CT>(
    area: &DrawingArea<DB, Shift>,
    chart: &ChartContext<'b, DB, CT>,
    names: &[&str],
    x_anchor: f64,
) -> Result<(), FigureError>
where
    DB: DrawingBackend,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let (base_x, base_y) = area.get_base_pixel();
    let font = (style::FONT, style::TICK_SIZE).into_font().color(&BLACK);
    let anchor = Pos::new(HPos::Right, VPos::Center);
    let line_h = style::TICK_SIZE + 4;

    for (i, name) in names.iter().enumerate() {
        let (px, py) = chart.plotting_area().map_coordinate(&(x_anchor, i as f64));
        let (px, py) = (px - base_x, py - base_y);
        let rows = name.split('\n').count() as i32;
        let top = py - (rows - 1) * line_h / 2;
        for (row, line) in name.split('\n').enumerate() {
            let y = top + row as i32 * line_h;
            area.draw(&Text::new(
                line.to_string(),
                (px - 10, y),
                font.clone().pos(anchor),
            ))?;
        }
    }

    Ok(())
}

/// Dashed horizontal reference line across `x_range`, with a legend entry.
pub fn h_reference<'b, DB: DrawingBackend>(
    chart: &mut ChartContext<'b, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    y: f64,
    x_range: (f64, f64),
    color: RGBColor,
    label: &str,
) -> Result<(), FigureError> {
    chart
        .draw_series(DashedLineSeries::new(
            [(x_range.0, y), (x_range.1, y)].iter().copied(),
            10,
            8,
            color.mix(0.7).stroke_width(2),
        ))?
        .label(label)
        .legend(move |(x, yy)| {
            PathElement::new(vec![(x, yy), (x + 22, yy)], color.stroke_width(2))
        });
    Ok(())
}
