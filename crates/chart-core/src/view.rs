// File: crates/chart-core/src/view.rs
// Data-derived view state: domain extents of the full dataset and the scales built from them.

use crate::geometry::Point;
use crate::scale::{LinearScale, ScaleTransform, Value};
use crate::series::Series;
use crate::types::Frame;

/// Exact per-axis min/max of the current dataset (no padding).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// `None` when the series is empty or has no finite coordinates on some axis.
    pub fn from_series<T>(series: &Series<'_, T>) -> Option<Self> {
        let (x_min, x_max) = series.extent_x()?;
        let (y_min, y_max) = series.extent_y()?;
        Some(Self { x_min, x_max, y_min, y_max })
    }

    pub fn scales(&self, frame: &Frame) -> Scales {
        Scales {
            x: LinearScale::new((self.x_min, self.x_max), frame.x_range()),
            y: LinearScale::new((self.y_min, self.y_max), frame.y_range()),
        }
    }
}

/// The independent X and Y scales of one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    #[inline]
    pub fn to_px(&self, (x, y): (Value, Value)) -> Point {
        Point::new(self.x.to_px(x), self.y.to_px(y))
    }

    #[inline]
    pub fn from_px(&self, p: Point) -> (Value, Value) {
        (self.x.from_px(p.x), self.y.from_px(p.y))
    }
}
