//! Design pattern usage counts, colored by pattern category.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::{axis, bars};
use crate::error::FigureError;
use crate::style;

pub const TITLE: &str = "Design Pattern Usage Frequency in the Platform";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    fn color(self) -> RGBColor {
        match self {
            Category::Creational => style::BLUE,
            Category::Structural => style::RED,
            Category::Behavioral => style::GREEN,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }
}

const PATTERNS: [&str; 7] = [
    "Repository",
    "Builder",
    "Singleton",
    "Observer\n(SignalR)",
    "Facade",
    "Factory",
    "Proxy\n(JWT)",
];
const COUNTS: [f64; 7] = [37.0, 4.0, 8.0, 12.0, 5.0, 6.0, 15.0];
const CATEGORIES: [Category; 7] = [
    Category::Structural,
    Category::Creational,
    Category::Creational,
    Category::Behavioral,
    Category::Structural,
    Category::Creational,
    Category::Structural,
];

const LEGEND_ENTRIES: [Category; 3] = [
    Category::Creational,
    Category::Structural,
    Category::Behavioral,
];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let x_max = 37.0 * 1.15;

    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, (style::FONT, style::TITLE_SIZE).into_font())
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(210)
        .build_cartesian_2d(0.0..x_max, -0.5..6.5)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(style::GRID.mix(0.3).stroke_width(1))
        .bold_line_style(style::GRID.mix(0.0).stroke_width(1))
        .x_desc("Number of Implementations")
        .axis_desc_style((style::FONT, style::AXIS_DESC_SIZE).into_font())
        .label_style((style::FONT, style::TICK_SIZE).into_font())
        .y_label_formatter(&|_: &f64| String::new())
        .x_label_formatter(&|v: &f64| format!("{v:.0}"))
        .draw()?;

    let colors: Vec<RGBColor> = CATEGORIES.iter().map(|c| c.color()).collect();
    bars::horizontal_rows(
        &mut chart,
        &COUNTS,
        &colors,
        0.5,
        Some(&|v| format!("{v:.0}")),
    )?;

    axis::row_labels(root, &chart, &PATTERNS, 0.0)?;

    // Category legend, lower right
    let (w, h) = root.dim_in_pixel();
    let font = (style::FONT, style::TICK_SIZE).into_font().color(&BLACK);
    let x = w as i32 - 280;
    let y0 = h as i32 - 180;
    root.draw(&Rectangle::new(
        [(x - 16, y0 - 56), (x + 220, y0 + 2 * 34 + 24)],
        WHITE.mix(0.9).filled(),
    ))?;
    root.draw(&Rectangle::new(
        [(x - 16, y0 - 56), (x + 220, y0 + 2 * 34 + 24)],
        BLACK.stroke_width(1),
    ))?;
    root.draw(&Text::new(
        "Category",
        (x, y0 - 34),
        font.clone().pos(Pos::new(HPos::Left, VPos::Center)),
    ))?;
    for (i, category) in LEGEND_ENTRIES.iter().enumerate() {
        let y = y0 + i as i32 * 34;
        root.draw(&Rectangle::new(
            [(x, y - 8), (x + 26, y + 8)],
            category.color().mix(0.8).filled(),
        ))?;
        root.draw(&Text::new(
            category.label(),
            (x + 34, y),
            font.clone().pos(Pos::new(HPos::Left, VPos::Center)),
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_tables_line_up() {
        assert_eq!(PATTERNS.len(), COUNTS.len());
        assert_eq!(PATTERNS.len(), CATEGORIES.len());
    }

    #[test]
    fn every_category_appears_in_the_legend() {
        for category in CATEGORIES {
            assert!(LEGEND_ENTRIES.contains(&category));
        }
    }
}
