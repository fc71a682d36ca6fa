// File: crates/chart-core/src/scene.rs
// Summary: Retained drawing surface: vector primitives grouped in layers, addressable by id.
// Notes:
// - Renderers (SVG, Skia) only read a Scene; all mutation goes through `DrawSurface`
//   so the chart can tear down exactly what it created.

use crate::geometry::Point;
use crate::theme::{colors, Rgba};

/// Handle to a primitive appended to a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// Paint layers, drawn in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Axes, grid, the data line, and the loader / error message.
    Chart,
    /// Pointer-driven crosshair, always above the chart.
    Overlay,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Chart, Layer::Overlay];
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    /// Alternating on/off lengths in pixels; `None` is a solid line.
    pub dash: Option<Vec<f32>>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(mut self, dash: Option<Vec<f32>>) -> Self {
        self.dash = dash;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, stroke: Stroke },
    /// Open polyline through `points` in order; never filled.
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// `at` is the baseline anchor; `rotation` is in degrees, clockwise, about `at`.
    Text { at: Point, text: String, size: f32, color: Rgba, anchor: TextAnchor, rotation: f32 },
    Circle { center: Point, radius: f32, fill: Option<Rgba>, stroke: Option<Stroke> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub layer: Layer,
    pub primitive: Primitive,
}

/// A fixed-size 2D surface that accepts and releases vector primitives.
pub trait DrawSurface {
    /// Surface size in pixels (width, height).
    fn size(&self) -> (u32, u32);
    fn append(&mut self, layer: Layer, primitive: Primitive) -> NodeId;
    /// Remove one primitive. Returns false if it was already gone.
    fn remove(&mut self, id: NodeId) -> bool;
    /// Remove every primitive on `layer`, returning how many were removed.
    fn clear_layer(&mut self, layer: Layer) -> usize;
}

/// In-memory [`DrawSurface`] holding nodes in insertion order.
#[derive(Clone, Debug)]
pub struct Scene {
    width: u32,
    height: u32,
    background: Rgba,
    nodes: Vec<Node>,
    next_id: u64,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: colors::WHITE, nodes: Vec::new(), next_id: 0 }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// Change the surface size. Existing primitives are kept; callers redraw.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn background(&self) -> Rgba { self.background }
    pub fn set_background(&mut self, color: Rgba) { self.background = color; }

    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn count(&self, layer: Layer) -> usize {
        self.nodes.iter().filter(|n| n.layer == layer).count()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.layer == layer)
    }

    /// Nodes in the order a painter should draw them.
    pub fn paint_order(&self) -> impl Iterator<Item = &Node> + '_ {
        Layer::ALL.into_iter().flat_map(move |l| self.layer(l))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl DrawSurface for Scene {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn append(&mut self, layer: Layer, primitive: Primitive) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(Node { id, layer, primitive });
        id
    }

    fn remove(&mut self, id: NodeId) -> bool {
        match self.nodes.iter().position(|n| n.id == id) {
            Some(i) => {
                self.nodes.remove(i);
                true
            }
            None => false,
        }
    }

    fn clear_layer(&mut self, layer: Layer) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.layer != layer);
        before - self.nodes.len()
    }
}
