// File: crates/demo/src/main.rs
// Summary: Demo fetches the dataset, renders the chart panel through loading -> chart, replays a
// pointer sweep across the plot, and writes one PNG + SVG frame per background color.

mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use linechart_core::{ChartPanel, ColorCycler, LineChart, PointerEvent, Presentation, Scene};
use linechart_data::{DataPoint, Query};
use linechart_render_skia::{RenderOptions, SkiaRenderer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::settings::load_app_config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = load_app_config().context("loading config/linechart")?;
    cfg.chart.validate().context("invalid [chart] table")?;

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::default();
    let out_dir = cfg.output_dir.clone();

    let chart = LineChart::new(cfg.chart.clone(), DataPoint::accessors());
    let mut panel = ChartPanel::new(chart, ColorCycler::default());
    let mut scene = Scene::new(cfg.chart.width, cfg.chart.height);

    let mut query = Query::new();
    panel.set_load_state(query.load_state());
    panel.render(&mut scene);
    write_frame(&renderer, &scene, &opts, &out_dir, "loading")?;

    // Accept a dataset path from CLI, else whatever the config points at, else a built-in sample.
    let arg = std::env::args().nth(1).map(PathBuf::from);
    match cfg.source.build(arg) {
        Some(source) => {
            info!(source = %source.describe(), "fetching dataset");
            query.run(source.fetch()).await;
        }
        None => {
            warn!("no data source configured; using built-in sample");
            query.run(async { Ok(sample_points(60)) }).await;
        }
    }
    panel.set_load_state(query.load_state());
    panel.chart_mut().set_data(query.take_data());

    if panel.render(&mut scene) == Presentation::Error {
        write_frame(&renderer, &scene, &opts, &out_dir, "error")?;
        if let Some(e) = query.error() {
            anyhow::bail!("dataset unavailable: {e}");
        }
        return Ok(());
    }
    info!(points = panel.chart().data().map_or(0, |d| d.len()), "chart ready");

    sweep(&mut panel, &mut scene);

    // One frame per palette color with the pointer resting at a different spot each time.
    let colors = panel.colors().palette().len();
    for i in 0..colors {
        let (w, h) = (scene.width() as f32, scene.height() as f32);
        let x = w * (i as f32 + 1.0) / (colors as f32 + 1.0);
        panel.handle_event(PointerEvent::Move { x, y: h / 2.0 }, &mut scene);
        panel.render(&mut scene);
        write_frame(&renderer, &scene, &opts, &out_dir, &format!("color_{i}"))?;
        panel.change_color();
    }

    panel.handle_event(PointerEvent::Leave, &mut scene);
    panel.render(&mut scene);
    write_frame(&renderer, &scene, &opts, &out_dir, "final")?;
    Ok(())
}

/// Move the pointer left to right along the vertical middle and log each new hover target.
fn sweep(panel: &mut ChartPanel<DataPoint>, scene: &mut Scene) {
    let (w, h) = (scene.width(), scene.height() as f32 / 2.0);
    let mut last = None;
    for x in (0..w).step_by(10) {
        panel.handle_event(PointerEvent::Move { x: x as f32, y: h }, scene);
        if let Some((index, point)) = panel.chart().hovered() {
            if last != Some(index) {
                info!(index, id = point.id, x = point.x, y = point.y, "hover");
                last = Some(index);
            }
        }
    }
    panel.handle_event(PointerEvent::Leave, scene);
}

fn write_frame(renderer: &SkiaRenderer, scene: &Scene, opts: &RenderOptions, dir: &Path, name: &str) -> Result<()> {
    let png = dir.join(format!("linechart_{name}.png"));
    renderer
        .render_to_png(scene, opts, &png)
        .with_context(|| format!("writing {}", png.display()))?;
    let svg = png.with_extension("svg");
    std::fs::write(&svg, scene.to_svg()).with_context(|| format!("writing {}", svg.display()))?;
    info!(png = %png.display(), svg = %svg.display(), "wrote frame");
    Ok(())
}

/// Deterministic prediction-vs-target style curve.
fn sample_points(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = (x * 0.25).sin() * 20.0 + x * 0.5;
            DataPoint {
                id: i as i64,
                x,
                y,
                target: (y > x * 0.5) as i64 as f64,
                prediction: ((x * 0.25).cos() > 0.0) as i64 as f64,
                diagnosis_group_id: (i % 3) as i64,
            }
        })
        .collect()
}
