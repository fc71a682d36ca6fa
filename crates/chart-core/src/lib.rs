// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart, its scales, hover tracking and
// the retained drawing surface.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod overlay;
pub mod scale;
pub mod scene;
pub mod series;
pub mod status;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, AxisLayout, AxisOrient};
pub use chart::LineChart;
pub use config::ChartConfig;
pub use error::ChartError;
pub use geometry::Point;
pub use hover::{nearest_index, HoverTracker, PointerEvent};
pub use overlay::Crosshair;
pub use scale::{LinearScale, ScaleTransform};
pub use scene::{DrawSurface, Layer, NodeId, Primitive, Scene, Stroke, TextAnchor};
pub use series::{Accessors, Series};
pub use status::{ChartPanel, LoadState, Presentation, ERROR_MESSAGE};
pub use theme::{ColorCycler, Palette, Rgba, Theme};
pub use types::Frame;
pub use view::{Scales, ViewState};
