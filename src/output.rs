//! Output Module
//! Artifact descriptions and the JSON manifest written next to the figures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::FigureError;

pub const MANIFEST_NAME: &str = "manifest.json";

/// Files produced for one figure.
#[derive(Debug, Clone, Serialize)]
pub struct FigureArtifact {
    pub name: String,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub png: PathBuf,
    pub svg: PathBuf,
}

/// Write the manifest describing every rendered artifact; returns its path.
pub fn write_manifest(
    out_dir: &Path,
    artifacts: &[FigureArtifact],
) -> Result<PathBuf, FigureError> {
    let path = out_dir.join(MANIFEST_NAME);
    let json = serde_json::to_string_pretty(artifacts)?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_round_trips_as_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let artifacts = vec![FigureArtifact {
            name: "demo".into(),
            title: "Demo".into(),
            width: 640,
            height: 480,
            png: dir.path().join("demo.png"),
            svg: dir.path().join("demo.svg"),
        }];

        let path = write_manifest(dir.path(), &artifacts).expect("write");
        let text = fs::read_to_string(path).expect("read");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed[0]["name"], "demo");
        assert_eq!(parsed[0]["width"], 640);
    }
}
