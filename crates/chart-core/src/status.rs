// File: crates/chart-core/src/status.rs
// Summary: Loading / error / chart presentation and the chart panel that owns the
// background color selection.

use tracing::debug;

use crate::chart::LineChart;
use crate::geometry::{Point, Rect};
use crate::hover::PointerEvent;
use crate::scene::{DrawSurface, Layer, Primitive, Scene, TextAnchor};
use crate::theme::{ColorCycler, Rgba};

/// Message shown when the dataset could not be fetched.
pub const ERROR_MESSAGE: &str = "There was trouble loading your data";

/// Fetch status as seen by the chart: two independent flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub is_loading: bool,
    pub has_error: bool,
}

impl LoadState {
    pub const LOADING: Self = Self { is_loading: true, has_error: false };
    pub const FAILED: Self = Self { is_loading: false, has_error: true };
    pub const READY: Self = Self { is_loading: false, has_error: false };

    /// Loading wins over error; the chart shows only when neither is set.
    pub fn presentation(&self) -> Presentation {
        if self.is_loading {
            Presentation::Loading
        } else if self.has_error {
            Presentation::Error
        } else {
            Presentation::Chart
        }
    }
}

/// Exactly one of these is on screen at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Loading,
    Error,
    Chart,
}

/// A line chart plus its surrounding state: load status and background palette.
pub struct ChartPanel<T> {
    chart: LineChart<T>,
    colors: ColorCycler,
    load: LoadState,
}

impl<T> ChartPanel<T> {
    /// The configured background picks where the color cycle starts.
    pub fn new(chart: LineChart<T>, colors: ColorCycler) -> Self {
        let colors = colors.starting_at(chart.config().background);
        Self { chart, colors, load: LoadState::default() }
    }

    pub fn chart(&self) -> &LineChart<T> { &self.chart }
    pub fn chart_mut(&mut self) -> &mut LineChart<T> { &mut self.chart }
    pub fn colors(&self) -> &ColorCycler { &self.colors }
    pub fn load_state(&self) -> LoadState { self.load }

    pub fn set_load_state(&mut self, load: LoadState) {
        self.load = load;
    }

    /// Advance the chart background to the next palette color. Returns the new index.
    pub fn change_color(&mut self) -> usize {
        let index = self.colors.advance();
        debug!(index, color = %self.colors.current(), "background color changed");
        index
    }

    /// Draw the current presentation into `scene`, replacing whatever was there.
    pub fn render(&mut self, scene: &mut Scene) -> Presentation {
        let (w, h) = (self.chart.config().width, self.chart.config().height);
        scene.resize(w, h);
        scene.set_background(self.colors.current());
        let presentation = self.load.presentation();
        match presentation {
            Presentation::Loading => {
                self.chart.teardown(scene);
                draw_loader(scene, self.chart.config().loader_color);
            }
            Presentation::Error => {
                self.chart.teardown(scene);
                let cfg = self.chart.config();
                let center = Rect::from_size(scene.width(), scene.height()).center();
                scene.append(
                    Layer::Chart,
                    Primitive::Text {
                        at: center,
                        text: ERROR_MESSAGE.to_string(),
                        size: cfg.font_size * 1.6,
                        color: cfg.label_color,
                        anchor: TextAnchor::Middle,
                        rotation: 0.0,
                    },
                );
            }
            Presentation::Chart => {
                self.chart.redraw(scene);
            }
        }
        presentation
    }

    /// Pointer events only reach the chart while it is the visible presentation.
    pub fn handle_event(&mut self, event: PointerEvent, scene: &mut Scene) {
        if self.load.presentation() == Presentation::Chart {
            self.chart.handle_event(event, scene);
        }
    }
}

/// A 3x3 grid of dots centred on the surface.
fn draw_loader(scene: &mut Scene, color: Rgba) {
    const DOT: f32 = 7.5;
    const GAP: f32 = 4.0;
    let center = Rect::from_size(scene.width(), scene.height()).center();
    let pitch = DOT * 2.0 + GAP;
    for row in -1..=1 {
        for col in -1..=1 {
            let at = Point::new(center.x + col as f32 * pitch, center.y + row as f32 * pitch);
            scene.append(Layer::Chart, Primitive::Circle { center: at, radius: DOT, fill: Some(color), stroke: None });
        }
    }
}
