//! Static figure generator for the design patterns & architecture article.
//!
//! Renders the article's ten figures (bar, pie, radar, and line charts built
//! from fixed data tables) to PNG and SVG files plus a JSON manifest.

pub mod charts;
pub mod error;
pub mod figures;
pub mod output;
pub mod render;
pub mod stats;
pub mod style;

pub use error::FigureError;
pub use figures::Figure;
pub use output::FigureArtifact;
pub use render::{render_all, render_figure};
