// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Every presentation rasterizes to a decodable PNG of the panel's size.

use linechart_core::{Accessors, ChartConfig, ChartPanel, ColorCycler, LineChart, LoadState, Scene};
use linechart_render_skia::{RenderOptions, SkiaRenderer};

#[test]
fn each_presentation_renders_png() {
    let mut chart = LineChart::new(ChartConfig::default().with_labels("Time", "Value"), Accessors::tuple());
    chart.set_data(Some((0..50).map(|i| (i as f64, (i as f64 * 0.2).sin())).collect()));
    let mut panel = ChartPanel::new(chart, ColorCycler::default());
    let renderer = SkiaRenderer::new();
    let mut scene = Scene::new(700, 400);

    for state in [LoadState::LOADING, LoadState::FAILED, LoadState::READY] {
        panel.set_load_state(state);
        panel.render(&mut scene);
        let bytes = renderer.render_png_bytes(&scene, &RenderOptions::default()).expect("png bytes");
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!(img.dimensions(), (700, 400));
    }
}

#[test]
fn render_to_png_creates_parent_dirs() {
    let mut chart = LineChart::new(ChartConfig::default(), Accessors::tuple());
    chart.set_data(Some(vec![(0.0, 0.0), (1.0, 1.0)]));
    let mut scene = Scene::new(700, 400);
    chart.redraw(&mut scene);

    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke/nested/line.png");
    let _ = std::fs::remove_file(&out);
    SkiaRenderer::new()
        .render_to_png(&scene, &RenderOptions::default(), &out)
        .expect("render to png");
    assert!(out.exists());
}
