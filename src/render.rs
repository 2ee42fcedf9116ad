//! Render Module
//! Renders each figure to PNG (through an RGB buffer encoded with the image
//! crate) and SVG, fanning the set out in parallel.

use std::fs;
use std::path::Path;

use plotters::prelude::*;
use rayon::prelude::*;
use tracing::info;

use crate::error::FigureError;
use crate::figures::Figure;
use crate::output::FigureArtifact;

/// Render the full figure set into `out_dir`.
///
/// Figures are independent, so they render in parallel; the returned artifact
/// list keeps the registry order.
pub fn render_all(out_dir: &Path) -> Result<Vec<FigureArtifact>, FigureError> {
    fs::create_dir_all(out_dir)?;
    Figure::ALL
        .par_iter()
        .map(|&fig| render_figure(fig, out_dir))
        .collect()
}

/// Render one figure to `<out_dir>/<name>.png` and `<out_dir>/<name>.svg`.
pub fn render_figure(fig: Figure, out_dir: &Path) -> Result<FigureArtifact, FigureError> {
    let (width, height) = fig.size();

    // Raster pass: draw into an RGB buffer, then encode through `image`
    let mut buffer = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        fig.draw(&root)?;
        root.present()?;
    }
    let png_path = out_dir.join(format!("{}.png", fig.name()));
    let png = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| FigureError::Draw(format!("{}: pixel buffer size mismatch", fig.name())))?;
    png.save(&png_path)?;

    // Vector pass
    let svg_path = out_dir.join(format!("{}.svg", fig.name()));
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        fig.draw(&root)?;
        root.present()?;
    }
    fs::write(&svg_path, svg)?;

    info!(figure = fig.name(), "rendered");

    Ok(FigureArtifact {
        name: fig.name().to_string(),
        title: fig.title().to_string(),
        width,
        height,
        png: png_path,
        svg: svg_path,
    })
}
