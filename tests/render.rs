//! End-to-end rendering: the full figure set lands on disk intact.

use std::fs;

use article_figures::{output, render, Figure};

#[test]
fn renders_the_full_set_with_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");

    let artifacts = render::render_all(dir.path()).expect("render");
    assert_eq!(artifacts.len(), Figure::ALL.len());

    for (fig, artifact) in Figure::ALL.iter().zip(&artifacts) {
        assert_eq!(artifact.name, fig.name());

        let png = image::open(&artifact.png).expect("png decodes");
        assert_eq!((png.width(), png.height()), fig.size());

        let svg = fs::read_to_string(&artifact.svg).expect("svg readable");
        assert!(svg.contains("<svg"), "{} svg output is malformed", fig.name());
    }

    let manifest = output::write_manifest(dir.path(), &artifacts).expect("manifest");
    let text = fs::read_to_string(manifest).expect("manifest readable");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(Figure::ALL.len()));
}

#[test]
fn single_figure_render_is_self_contained() {
    let dir = tempfile::tempdir().expect("tempdir");

    let artifact =
        render::render_figure(Figure::ComponentMetrics, dir.path()).expect("render one");

    assert!(artifact.png.exists());
    assert!(artifact.svg.exists());
    assert_eq!(artifact.name, "component_metrics");
}
