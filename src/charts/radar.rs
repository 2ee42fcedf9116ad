//! Radar Chart Primitives
//! Polar grid, spokes, and series polygons drawn with path/polygon elements on
//! the raw drawing area (plotters has no polar chart type).

use std::f64::consts::PI;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::FigureError;
use crate::style;

/// One polygon on the radar, values aligned with the category axes.
pub struct RadarSeries<'a> {
    pub label: &'a str,
    pub color: RGBColor,
    pub values: &'a [f64],
}

/// Draw a radar chart filling `area`.
///
/// Axes start at the top and advance clockwise; `max_value` maps to the outer
/// ring and `rings` lists the grid levels (labelled along the first axis).
pub fn draw<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    categories: &[&str],
    series: &[RadarSeries<'_>],
    max_value: f64,
    rings: &[f64],
) -> Result<(), FigureError> {
    let (w, h) = area.dim_in_pixel();
    let cx = f64::from(w) / 2.0;
    let cy = f64::from(h) / 2.0 + 10.0;
    let radius = f64::from(w.min(h)) * 0.36;
    let n = categories.len();

    let angle = |axis: usize| -> f64 { -PI / 2.0 + axis as f64 * 2.0 * PI / n as f64 };
    let point = |axis: usize, value: f64| -> (i32, i32) {
        let r = radius * (value / max_value);
        let a = angle(axis);
        (
            (cx + r * a.cos()).round() as i32,
            (cy + r * a.sin()).round() as i32,
        )
    };

    // Grid rings and spokes
    for &ring in rings {
        let outline: Vec<(i32, i32)> = (0..=n).map(|i| point(i % n, ring)).collect();
        area.draw(&PathElement::new(outline, style::GRID.stroke_width(1)))?;
    }
    for i in 0..n {
        area.draw(&PathElement::new(
            vec![point(i, 0.0), point(i, max_value)],
            style::GRID.stroke_width(1),
        ))?;
    }

    // Ring values along the first axis
    let ring_font = (style::FONT, 18).into_font().color(&BLACK);
    for &ring in rings {
        let (px, py) = point(0, ring);
        area.draw(&Text::new(
            format!("{ring:.0}"),
            (px + 6, py),
            ring_font.clone().pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
    }

    // Category labels just outside the outer ring
    let cat_font = (style::FONT, style::TICK_SIZE).into_font().color(&BLACK);
    for (i, name) in categories.iter().enumerate() {
        let a = angle(i);
        let lx = (cx + (radius + 16.0) * a.cos()).round() as i32;
        let ly = (cy + (radius + 16.0) * a.sin()).round() as i32;
        let hpos = if a.cos() > 0.3 {
            HPos::Left
        } else if a.cos() < -0.3 {
            HPos::Right
        } else {
            HPos::Center
        };
        let vpos = if a.sin() > 0.3 {
            VPos::Top
        } else if a.sin() < -0.3 {
            VPos::Bottom
        } else {
            VPos::Center
        };
        for (row, line) in name.split('\n').enumerate() {
            area.draw(&Text::new(
                line.to_string(),
                (lx, ly + row as i32 * (style::TICK_SIZE + 2)),
                cat_font.clone().pos(Pos::new(hpos, vpos)),
            ))?;
        }
    }

    // Series polygons: translucent fill, solid outline, point markers
    for s in series {
        let corners: Vec<(i32, i32)> = s
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| point(i, v))
            .collect();
        area.draw(&Polygon::new(corners.clone(), s.color.mix(0.15)))?;

        let mut outline = corners.clone();
        outline.push(corners[0]);
        area.draw(&PathElement::new(outline, s.color.stroke_width(2)))?;

        for &(px, py) in &corners {
            area.draw(&Circle::new((px, py), 4, s.color.filled()))?;
        }
    }

    Ok(())
}

/// Legend rows in the upper-right corner of `area`.
pub fn legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &[RadarSeries<'_>],
) -> Result<(), FigureError> {
    let (w, _) = area.dim_in_pixel();
    let font = (style::FONT, style::TICK_SIZE).into_font().color(&BLACK);
    let x = w as i32 - 300;

    for (i, s) in series.iter().enumerate() {
        let y = 50 + i as i32 * 34;
        area.draw(&Rectangle::new(
            [(x, y - 8), (x + 26, y + 8)],
            s.color.mix(0.8).filled(),
        ))?;
        area.draw(&Text::new(
            s.label.to_string(),
            (x + 34, y),
            font.clone().pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
    }

    Ok(())
}
