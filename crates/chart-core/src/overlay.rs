// File: crates/chart-core/src/overlay.rs
// Summary: Crosshair overlay: two guide lines and a marker at the hover target,
// re-acquired on every target change and released on teardown.

use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::scene::{DrawSurface, Layer, NodeId, Primitive, Stroke};
use crate::theme::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct CrosshairStyle {
    pub color: Rgba,
    pub width: f32,
    pub dash: Option<Vec<f32>>,
    pub marker_radius: f32,
}

impl CrosshairStyle {
    pub fn from_config(cfg: &ChartConfig) -> Self {
        Self {
            color: cfg.auxiliary_color,
            width: 1.0,
            dash: cfg.crosshair_dash.clone(),
            marker_radius: cfg.marker_radius,
        }
    }
}

/// What the currently drawn triple was drawn for.
#[derive(Clone, Debug, PartialEq)]
struct Drawn {
    at: Point,
    size: (u32, u32),
    style: CrosshairStyle,
    nodes: [NodeId; 3],
}

/// Owns at most one horizontal guide, vertical guide and marker on the overlay layer.
#[derive(Clone, Debug, Default)]
pub struct Crosshair {
    drawn: Option<Drawn>,
}

impl Crosshair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position the crosshair is currently drawn at.
    pub fn position(&self) -> Option<Point> {
        self.drawn.as_ref().map(|d| d.at)
    }

    pub fn is_visible(&self) -> bool {
        self.drawn.is_some()
    }

    /// Bring the overlay in line with `target`. Nothing happens if the same target is
    /// already drawn with the same style and surface size; otherwise the previous triple is
    /// removed first and a new one is drawn when `target` is set. Returns true on change.
    pub fn sync<S: DrawSurface + ?Sized>(
        &mut self,
        target: Option<Point>,
        style: &CrosshairStyle,
        surface: &mut S,
    ) -> bool {
        let size = surface.size();
        let unchanged = match (&self.drawn, target) {
            (Some(d), Some(at)) => d.at == at && d.size == size && d.style == *style,
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }
        self.release(surface);
        if let Some(at) = target {
            let nodes = Self::acquire(at, size, style, surface);
            self.drawn = Some(Drawn { at, size, style: style.clone(), nodes });
        }
        true
    }

    /// Remove the overlay primitives, if any.
    pub fn release<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(d) = self.drawn.take() {
            for id in d.nodes {
                surface.remove(id);
            }
        }
    }

    fn acquire<S: DrawSurface + ?Sized>(
        at: Point,
        (width, height): (u32, u32),
        style: &CrosshairStyle,
        surface: &mut S,
    ) -> [NodeId; 3] {
        let guide = Stroke::solid(style.color, style.width).dashed(style.dash.clone());
        let horizontal = surface.append(
            Layer::Overlay,
            Primitive::Line {
                from: Point::new(0.0, at.y),
                to: Point::new(width as f32, at.y),
                stroke: guide.clone(),
            },
        );
        let vertical = surface.append(
            Layer::Overlay,
            Primitive::Line {
                from: Point::new(at.x, 0.0),
                to: Point::new(at.x, height as f32),
                stroke: guide,
            },
        );
        let marker = surface.append(
            Layer::Overlay,
            Primitive::Circle { center: at, radius: style.marker_radius, fill: Some(style.color), stroke: None },
        );
        [horizontal, vertical, marker]
    }
}
