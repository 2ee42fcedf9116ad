//! Pie Chart Primitives
//! Pie panel with outside labels and inside percentage text.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::FigureError;
use crate::style;

/// Draw a pie chart centered in `area`.
///
/// Slice weights need not sum to 100; percentage labels are derived from the
/// weights. Multi-line category names are flattened to one line.
pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    sizes: &[f64],
    colors: &[RGBColor],
    labels: &[&str],
) -> Result<(), FigureError> {
    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.3;
    let sizes = sizes.to_vec();
    let colors = colors.to_vec();
    let labels: Vec<String> = labels.iter().map(|s| s.replace('\n', " ")).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((style::FONT, style::TICK_SIZE).into_font().color(&BLACK));
    pie.percentages(
        (style::FONT, style::VALUE_SIZE)
            .into_font()
            .color(&WHITE),
    );
    area.draw(&pie)?;

    Ok(())
}
