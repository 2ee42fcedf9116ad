//! Charts module - Reusable plotting primitives

pub mod axis;
pub mod bars;
pub mod lines;
pub mod pie;
pub mod radar;

pub use bars::BarSeries;
pub use lines::Marker;
pub use radar::RadarSeries;
