// File: crates/chart-core/src/chart.rs
// Summary: LineChart: clear-then-build render pipeline (grid, axes, line) plus pointer-driven
// hover and crosshair, generic over the record type.

use tracing::{debug, trace};

use crate::axis::{draw_axis, draw_grid, tick_budget, Axis, AxisLayout};
use crate::config::ChartConfig;
use crate::geometry::{Point, Rect};
use crate::hover::{HoverHit, HoverTracker, PointerEvent};
use crate::overlay::{Crosshair, CrosshairStyle};
use crate::scene::{DrawSurface, Layer, Primitive, Stroke};
use crate::series::{Accessors, Series};
use crate::view::{Scales, ViewState};

pub struct LineChart<T> {
    config: ChartConfig,
    accessors: Accessors<T>,
    data: Option<Vec<T>>,
    scales: Option<Scales>,
    hover: HoverTracker,
    crosshair: Crosshair,
}

impl<T> LineChart<T> {
    pub fn new(config: ChartConfig, accessors: Accessors<T>) -> Self {
        Self {
            config,
            accessors,
            data: None,
            scales: None,
            hover: HoverTracker::new(),
            crosshair: Crosshair::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next [`redraw`](Self::redraw).
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
    }

    /// Replace the dataset (`None` = not loaded yet). Takes effect on the next redraw.
    pub fn set_data(&mut self, data: Option<Vec<T>>) {
        self.data = data;
    }

    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    pub fn series(&self) -> Series<'_, T> {
        Series::new(self.data.as_deref().unwrap_or(&[]), &self.accessors)
    }

    /// Scales of the last redraw; `None` before the first redraw or without data.
    pub fn scales(&self) -> Option<&Scales> {
        self.scales.as_ref()
    }

    pub fn hover_target(&self) -> Option<Point> {
        self.hover.target()
    }

    /// The hovered record together with its index.
    pub fn hovered(&self) -> Option<(usize, &T)> {
        let HoverHit { index, .. } = self.hover.hit()?;
        self.data.as_ref()?.get(index).map(|d| (index, d))
    }

    pub fn crosshair(&self) -> &Crosshair {
        &self.crosshair
    }

    /// Remove everything this chart drew and rebuild it from the current data and config.
    /// Returns the number of chart-layer primitives drawn.
    pub fn redraw<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let removed = surface.clear_layer(Layer::Chart);
        let frame = self.config.frame();
        let series = Series::new(self.data.as_deref().unwrap_or(&[]), &self.accessors);

        self.scales = if frame.has_plot_area() {
            ViewState::from_series(&series).map(|v| v.scales(&frame))
        } else {
            None
        };

        let mut drawn = 0;
        if let Some(scales) = &self.scales {
            let cfg = &self.config;
            let x_ticks = tick_budget(series.len(), frame.plot_width());
            let y_ticks = tick_budget(series.len(), frame.plot_height());
            let x_layout = AxisLayout::compute(&Axis::bottom(cfg.x_label.as_str()), &scales.x, &frame, x_ticks);
            let y_layout = AxisLayout::compute(&Axis::left(cfg.y_label.as_str()), &scales.y, &frame, y_ticks);

            drawn += draw_grid(surface, &x_layout, &frame, cfg);
            drawn += draw_grid(surface, &y_layout, &frame, cfg);
            drawn += draw_axis(surface, &x_layout, cfg);
            drawn += draw_axis(surface, &y_layout, cfg);
            drawn += draw_line_series(surface, &series, scales, cfg);
        }
        debug!(removed, drawn, points = series.len(), "line chart redrawn");

        self.hover.refresh(self.scales.as_ref(), &series);
        self.publish_hover(surface);
        drawn
    }

    /// Feed one pointer event through the hover tracker and update the crosshair.
    pub fn handle_event<S: DrawSurface + ?Sized>(&mut self, event: PointerEvent, surface: &mut S) {
        let changed = match event {
            PointerEvent::Move { x, y } => {
                let (w, h) = surface.size();
                let series = Series::new(self.data.as_deref().unwrap_or(&[]), &self.accessors);
                self.hover
                    .on_move(Point::new(x, y), Rect::from_size(w, h), self.scales.as_ref(), &series)
            }
            PointerEvent::Leave => self.hover.on_leave(),
        };
        if changed {
            trace!(hover = ?self.hover.target(), "hover target changed");
        }
        self.publish_hover(surface);
    }

    /// Remove all primitives this chart owns and forget the hover state.
    pub fn teardown<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.crosshair.release(surface);
        surface.clear_layer(Layer::Chart);
        self.hover.on_leave();
        self.scales = None;
    }

    fn publish_hover<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        let style = CrosshairStyle::from_config(&self.config);
        self.crosshair.sync(self.hover.target(), &style, surface);
    }
}

/// The data line: one open polyline through every record in dataset order.
/// Records with a non-finite coordinate are skipped.
fn draw_line_series<T, S: DrawSurface + ?Sized>(
    surface: &mut S,
    series: &Series<'_, T>,
    scales: &Scales,
    cfg: &ChartConfig,
) -> usize {
    let points: Vec<Point> = series
        .points()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|p| scales.to_px(p))
        .collect();
    if points.is_empty() {
        return 0;
    }
    let stroke = Stroke::solid(cfg.line_color, cfg.line_width);
    surface.append(Layer::Chart, Primitive::Polyline { points, stroke });
    1
}
