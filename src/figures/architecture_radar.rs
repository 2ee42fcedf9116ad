//! Multidimensional architecture comparison on a radar grid.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{radar, RadarSeries};
use crate::error::FigureError;
use crate::style;

pub const TITLE: &str = "Multidimensional Comparison of Software Architectures";

const DIMENSIONS: [&str; 6] = [
    "Maintainability",
    "Scalability",
    "Testability",
    "Decoupling",
    "Performance",
    "Initial\nComplexity",
];

const SERIES: [RadarSeries<'static>; 4] = [
    RadarSeries {
        label: "Monolith",
        color: style::RED,
        values: &[4.0, 3.0, 3.0, 2.0, 8.0, 9.0],
    },
    RadarSeries {
        label: "N-Tier",
        color: style::BLUE,
        values: &[7.0, 6.0, 8.0, 7.0, 7.0, 5.0],
    },
    RadarSeries {
        label: "N-Tier + DDD",
        color: style::GREEN,
        values: &[9.0, 8.0, 9.0, 9.0, 6.0, 3.0],
    },
    RadarSeries {
        label: "Microservices",
        color: style::PURPLE,
        values: &[9.0, 10.0, 8.0, 10.0, 5.0, 2.0],
    },
];

const SCALE_MAX: f64 = 10.0;
const RINGS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
    let inner = root.titled(TITLE, (style::FONT, style::TITLE_SIZE).into_font())?;

    radar::draw(&inner, &DIMENSIONS, &SERIES, SCALE_MAX, &RINGS)?;
    radar::legend(&inner, &SERIES)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_scores_every_dimension() {
        for s in &SERIES {
            assert_eq!(s.values.len(), DIMENSIONS.len());
            assert!(s.values.iter().all(|&v| (0.0..=SCALE_MAX).contains(&v)));
        }
    }

    #[test]
    fn rings_end_at_the_scale_maximum() {
        assert_eq!(RINGS[RINGS.len() - 1], SCALE_MAX);
    }
}
