// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless CPU raster rendering of a linechart-core Scene to PNG or RGBA8 via Skia.

use std::path::Path;

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use linechart_core::{Primitive, Rgba, Scene, Stroke};

pub mod text;

pub use text::TextShaper;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Text primitives are skipped when false; snapshot tests use this to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

#[derive(Default)]
pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `scene` to an encoded PNG.
    pub fn render_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `scene` to a PNG file at `path`, creating parent directories as needed.
    pub fn render_to_png(&self, scene: &Scene, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene, opts)?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_bytes)`.
    pub fn render_rgba8(&self, scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(scene, opts)?;
        let (w, h) = (scene.width(), scene.height());
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("read pixels failed"));
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn rasterize(&self, scene: &Scene, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = (scene.width() as i32, scene.height() as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(color(scene.background()));

        let mut drawn = 0usize;
        for node in scene.paint_order() {
            if self.draw_primitive(canvas, &node.primitive, opts) {
                drawn += 1;
            }
        }
        debug!(width = w, height = h, drawn, "scene rasterized");
        Ok(surface)
    }

    fn draw_primitive(&self, canvas: &skia::Canvas, primitive: &Primitive, opts: &RenderOptions) -> bool {
        match primitive {
            Primitive::Line { from, to, stroke } => {
                canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke));
            }
            Primitive::Polyline { points, stroke } => {
                let Some((first, rest)) = points.split_first() else {
                    return false;
                };
                let mut path = skia::Path::new();
                path.move_to((first.x, first.y));
                for p in rest {
                    path.line_to((p.x, p.y));
                }
                canvas.draw_path(&path, &stroke_paint(stroke));
            }
            Primitive::Text { at, text, size, color: c, anchor, rotation } => {
                if !opts.draw_labels {
                    return false;
                }
                self.text.draw(canvas, text, (at.x, at.y), *size, color(*c), *anchor, *rotation);
            }
            Primitive::Circle { center, radius, fill, stroke } => {
                if let Some(fill) = fill {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Fill);
                    paint.set_color(color(*fill));
                    canvas.draw_circle((center.x, center.y), *radius, &paint);
                }
                if let Some(stroke) = stroke {
                    canvas.draw_circle((center.x, center.y), *radius, &stroke_paint(stroke));
                }
            }
        }
        true
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(color(stroke.color));
    // Skia wants an even number of intervals; repeat odd patterns like SVG does
    if let Some(dash) = &stroke.dash {
        let intervals: Vec<f32> = if dash.len() % 2 == 1 { dash.repeat(2) } else { dash.clone() };
        if let Some(effect) = skia::PathEffect::dash(&intervals, 0.0) {
            paint.set_path_effect(effect);
        }
    }
    paint
}
