//! Article Figures - Static figure generator for the design patterns article
//!
//! Run once to render every figure to the output directory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use article_figures::{output, render};

#[derive(Parser)]
#[command(
    name = "article-figures",
    about = "Renders the article figure set to PNG and SVG files"
)]
struct Options {
    /// Directory the figures are written to
    #[arg(long, default_value = "graphics")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let options = Options::parse();

    let artifacts = render::render_all(&options.out_dir).context("figure rendering failed")?;
    let manifest =
        output::write_manifest(&options.out_dir, &artifacts).context("manifest writing failed")?;

    info!(
        figures = artifacts.len(),
        out_dir = %options.out_dir.display(),
        manifest = %manifest.display(),
        "all figures generated"
    );

    Ok(())
}
