//! Error Module
//! Error type shared by the figure rendering pipeline.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigureError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

// plotters drawing errors are generic over the backend error type; flatten them
// to a message so figure routines stay backend-generic.
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for FigureError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        FigureError::Draw(err.to_string())
    }
}
