// File: crates/chart-core/src/hover.rs
// Summary: Pointer handling: invert the pointer into domain space, find the nearest record,
// and publish its pixel position as the hover target.

use crate::geometry::{Point, Rect};
use crate::scale::Value;
use crate::series::Series;
use crate::view::Scales;

/// Pointer input in surface-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Leave,
}

/// The record currently nearest to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverHit {
    /// Index into the dataset.
    pub index: usize,
    /// Pixel position of that record.
    pub at: Point,
}

/// Index of the point closest to `(dx, dy)` by Euclidean distance in domain units.
/// Ties go to the earliest point; points whose distance is not finite are skipped.
pub fn nearest_index<I>(points: I, dx: Value, dy: Value) -> Option<usize>
where
    I: IntoIterator<Item = (Value, Value)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, (x, y)) in points.into_iter().enumerate() {
        let d = (x - dx).hypot(y - dy);
        if !d.is_finite() {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Hover state owned by one chart.
/// Invariant: `hit` is `None` whenever the pointer is off the surface or there is no data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverTracker {
    pointer: Option<Point>,
    hit: Option<HoverHit>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixel position of the hovered record, if any.
    pub fn target(&self) -> Option<Point> {
        self.hit.map(|h| h.at)
    }

    pub fn hit(&self) -> Option<HoverHit> {
        self.hit
    }

    /// Last pointer position over the surface.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Handle a pointer move. Moves outside `bounds` are treated as a leave; moves before
    /// any scale exists, or over an empty dataset, leave the target untouched.
    /// Returns true when the target changed.
    pub fn on_move<T>(
        &mut self,
        at: Point,
        bounds: Rect,
        scales: Option<&Scales>,
        series: &Series<'_, T>,
    ) -> bool {
        if !bounds.contains(at) {
            return self.on_leave();
        }
        self.pointer = Some(at);
        match scales {
            Some(scales) => self.locate(scales, series),
            None => false,
        }
    }

    /// Clear the target. Returns true when there was one.
    pub fn on_leave(&mut self) -> bool {
        self.pointer = None;
        self.hit.take().is_some()
    }

    /// Recompute the target for the remembered pointer after the data or scales changed.
    pub fn refresh<T>(&mut self, scales: Option<&Scales>, series: &Series<'_, T>) -> bool {
        match (scales, self.pointer) {
            (Some(scales), Some(_)) if !series.is_empty() => self.locate(scales, series),
            _ => self.hit.take().is_some(),
        }
    }

    fn locate<T>(&mut self, scales: &Scales, series: &Series<'_, T>) -> bool {
        let Some(pointer) = self.pointer else {
            return false;
        };
        let (dx, dy) = scales.from_px(pointer);
        let Some(index) = nearest_index(series.points(), dx, dy) else {
            return false;
        };
        let Some(domain) = series.get(index) else {
            return false;
        };
        let hit = HoverHit { index, at: scales.to_px(domain) };
        let changed = self.hit != Some(hit);
        self.hit = Some(hit);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_point_wins_ties() {
        let pts = [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0)];
        assert_eq!(nearest_index(pts, 0.0, 0.0), Some(0));
    }

    #[test]
    fn empty_and_nan_inputs() {
        assert_eq!(nearest_index(Vec::<(f64, f64)>::new(), 0.0, 0.0), None);
        assert_eq!(nearest_index([(f64::NAN, 0.0), (3.0, 4.0)], 0.0, 0.0), Some(1));
        assert_eq!(nearest_index([(1.0, 1.0)], f64::NAN, 0.0), None);
    }

    #[test]
    fn larger_domain_axis_dominates_distance() {
        // y is off by one unit on the second point, x by ninety on the first.
        let pts = [(0.0, 0.0), (100.0, 1.0)];
        assert_eq!(nearest_index(pts, 90.0, 0.0), Some(1));
    }
}
