// File: crates/chart-core/src/axis.rs
// Summary: Axis model, tick layout from a scale, and axis/grid drawing onto a surface.

use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::grid::format_tick;
use crate::scale::{LinearScale, ScaleTransform};
use crate::scene::{DrawSurface, Layer, Primitive, Stroke, TextAnchor};
use crate::types::Frame;

/// Gap between the surface edge and the baseline of an axis title.
const TITLE_INSET: f32 = 8.0;

/// Minimum room per tick along an axis so labels stay readable.
pub const MIN_TICK_SPACING: f32 = 40.0;

/// Clamp a requested tick count to what fits along `span_px` pixels
/// (never below 2, so both ends of a short axis still get a label).
pub fn tick_budget(requested: usize, span_px: f32) -> usize {
    let fits = (span_px.max(0.0) / MIN_TICK_SPACING).floor() as usize;
    requested.min(fits.max(2))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis along the bottom of the plot, labels below.
    Bottom,
    /// Vertical axis along the left of the plot, labels to the left.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub orient: AxisOrient,
    pub tick_size: f32,
    pub tick_padding: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, orient: AxisOrient) -> Self {
        Self { label: label.into(), orient, tick_size: 6.0, tick_padding: 3.0 }
    }

    pub fn bottom(label: impl Into<String>) -> Self {
        Self::new(label, AxisOrient::Bottom)
    }

    pub fn left(label: impl Into<String>) -> Self {
        Self::new(label, AxisOrient::Left)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis (x for Bottom, y for Left).
    pub pos: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    pub text: String,
    pub at: Point,
    pub rotation: f32,
}

/// Resolved geometry of one axis for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub orient: AxisOrient,
    pub tick_size: f32,
    pub tick_padding: f32,
    /// Pixel offset of the axis line from the perpendicular origin
    /// (the y of a Bottom axis, the x of a Left axis).
    pub offset: f32,
    pub line: (Point, Point),
    pub ticks: Vec<Tick>,
    pub title: Option<Title>,
}

impl AxisLayout {
    /// Lay out `axis` for `scale`, asking the tick heuristic for about `tick_count` ticks.
    pub fn compute(axis: &Axis, scale: &LinearScale, frame: &Frame, tick_count: usize) -> Self {
        let step = scale.tick_step(tick_count).unwrap_or(1.0);
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| Tick { value, pos: scale.to_px(value), label: format_tick(value, step) })
            .collect();

        let (r0, r1) = scale.range;
        let (offset, line) = match axis.orient {
            AxisOrient::Bottom => {
                let y = frame.plot_bottom();
                (y, (Point::new(r0, y), Point::new(r1, y)))
            }
            AxisOrient::Left => {
                let x = frame.plot_left();
                (x, (Point::new(x, r0), Point::new(x, r1)))
            }
        };

        let title = (!axis.label.is_empty()).then(|| match axis.orient {
            AxisOrient::Bottom => Title {
                text: axis.label.clone(),
                at: Point::new(frame.width as f32 / 2.0, frame.height as f32 - TITLE_INSET),
                rotation: 0.0,
            },
            AxisOrient::Left => Title {
                text: axis.label.clone(),
                at: Point::new(TITLE_INSET, frame.height as f32 / 2.0),
                rotation: -90.0,
            },
        });

        Self {
            orient: axis.orient,
            tick_size: axis.tick_size,
            tick_padding: axis.tick_padding,
            offset,
            line,
            ticks,
            title,
        }
    }
}

/// Draw the axis line, tick marks, tick labels and title. Returns the number of primitives added.
pub fn draw_axis<S: DrawSurface + ?Sized>(surface: &mut S, layout: &AxisLayout, cfg: &ChartConfig) -> usize {
    let stroke = Stroke::solid(cfg.auxiliary_color, 1.0);
    let mut added = 0;

    surface.append(
        Layer::Chart,
        Primitive::Line { from: layout.line.0, to: layout.line.1, stroke: stroke.clone() },
    );
    added += 1;

    let reach = layout.tick_size + layout.tick_padding;
    for tick in &layout.ticks {
        let (from, to, label_at, anchor) = match layout.orient {
            AxisOrient::Bottom => (
                Point::new(tick.pos, layout.offset),
                Point::new(tick.pos, layout.offset + layout.tick_size),
                // baseline sits one cap-height below the tick end
                Point::new(tick.pos, layout.offset + reach + cfg.font_size * 0.71),
                TextAnchor::Middle,
            ),
            AxisOrient::Left => (
                Point::new(layout.offset, tick.pos),
                Point::new(layout.offset - layout.tick_size, tick.pos),
                Point::new(layout.offset - reach, tick.pos + cfg.font_size * 0.32),
                TextAnchor::End,
            ),
        };
        surface.append(Layer::Chart, Primitive::Line { from, to, stroke: stroke.clone() });
        surface.append(
            Layer::Chart,
            Primitive::Text {
                at: label_at,
                text: tick.label.clone(),
                size: cfg.font_size,
                color: cfg.label_color,
                anchor,
                rotation: 0.0,
            },
        );
        added += 2;
    }

    if let Some(title) = &layout.title {
        let at = match layout.orient {
            AxisOrient::Bottom => title.at,
            // rotated text grows toward -x from its baseline; keep it on-surface
            AxisOrient::Left => Point::new(title.at.x + cfg.font_size, title.at.y),
        };
        surface.append(
            Layer::Chart,
            Primitive::Text {
                at,
                text: title.text.clone(),
                size: cfg.font_size,
                color: cfg.label_color,
                anchor: TextAnchor::Middle,
                rotation: title.rotation,
            },
        );
        added += 1;
    }
    added
}

/// One gridline per tick, perpendicular to the axis and spanning the plot's other dimension.
pub fn draw_grid<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &AxisLayout,
    frame: &Frame,
    cfg: &ChartConfig,
) -> usize {
    let stroke = Stroke::solid(cfg.grid_color, 1.0).dashed(cfg.grid_dash.clone());
    for tick in &layout.ticks {
        let (from, to) = match layout.orient {
            AxisOrient::Bottom => (
                Point::new(tick.pos, frame.plot_bottom()),
                Point::new(tick.pos, frame.plot_top()),
            ),
            AxisOrient::Left => (
                Point::new(frame.plot_left(), tick.pos),
                Point::new(frame.plot_right(), tick.pos),
            ),
        };
        surface.append(Layer::Chart, Primitive::Line { from, to, stroke: stroke.clone() });
    }
    layout.ticks.len()
}
