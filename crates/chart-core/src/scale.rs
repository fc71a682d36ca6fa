// File: crates/chart-core/src/scale.rs
// Summary: Linear domain -> pixel scales derived from data extents, with inversion for hit-testing.

use crate::grid::{nice_ticks, tick_step};

/// Domain value (raw data units).
pub type Value = f64;
/// Surface-local pixel coordinate.
pub type Pixel = f32;

/// Invertible mapping between domain values and pixels.
pub trait ScaleTransform {
    fn to_px(&self, v: Value) -> Pixel;
    fn from_px(&self, px: Pixel) -> Value;
}

/// Linear scale from `domain` onto `range`. The range may be inverted
/// (`range.0 > range.1`), which is how the Y axis puts its minimum at the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (Pixel, Pixel),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (Pixel, Pixel)) -> Self {
        Self { domain, range }
    }

    /// Scale over the finite extent of `values`; `None` when there is no finite value.
    pub fn from_extent<I>(values: I, range: (Pixel, Pixel)) -> Option<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        extent(values).map(|domain| Self::new(domain, range))
    }

    /// True when the domain has zero (or non-finite) width. Such a scale maps every
    /// value to the range midpoint and inverts every pixel to the domain minimum.
    pub fn is_degenerate(&self) -> bool {
        let span = self.domain.1 - self.domain.0;
        !(span.is_finite() && span != 0.0)
    }

    fn range_is_degenerate(&self) -> bool {
        let span = self.range.1 - self.range.0;
        !(span.is_finite() && span != 0.0)
    }

    pub fn range_midpoint(&self) -> Pixel {
        (self.range.0 + self.range.1) * 0.5
    }

    /// Nice tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        let (lo, hi) = self.ordered_domain();
        nice_ticks(lo, hi, count)
    }

    /// Spacing between consecutive [`ticks`](Self::ticks) for the same `count`.
    pub fn tick_step(&self, count: usize) -> Option<Value> {
        let (lo, hi) = self.ordered_domain();
        tick_step(lo, hi, count)
    }

    fn ordered_domain(&self) -> (Value, Value) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl ScaleTransform for LinearScale {
    #[inline]
    fn to_px(&self, v: Value) -> Pixel {
        if self.is_degenerate() {
            return self.range_midpoint();
        }
        let (d0, d1) = self.domain;
        let (r0, r1) = (self.range.0 as f64, self.range.1 as f64);
        let t = (v - d0) / (d1 - d0);
        // a*(1-t) + b*t lands exactly on both range endpoints at t = 0 and t = 1
        (r0 * (1.0 - t) + r1 * t) as Pixel
    }

    #[inline]
    fn from_px(&self, px: Pixel) -> Value {
        if self.is_degenerate() || self.range_is_degenerate() {
            return self.domain.0;
        }
        let (d0, d1) = self.domain;
        let (r0, r1) = (self.range.0 as f64, self.range.1 as f64);
        let t = (px as f64 - r0) / (r1 - r0);
        d0 * (1.0 - t) + d1 * t
    }
}

/// Min and max over the finite values of `values`; `None` when there are none.
pub fn extent<I>(values: I) -> Option<(Value, Value)>
where
    I: IntoIterator<Item = Value>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_extent_skips_non_finite() {
        let s = LinearScale::from_extent([2.0, f64::NAN, -1.0, 7.0], (0.0, 90.0)).unwrap();
        assert_eq!(s.domain, (-1.0, 7.0));
        assert!(LinearScale::from_extent([f64::INFINITY], (0.0, 1.0)).is_none());
    }

    #[test]
    fn inverted_range_puts_minimum_at_bottom() {
        let s = LinearScale::new((0.0, 10.0), (355.0, 45.0));
        assert_eq!(s.to_px(0.0), 355.0);
        assert_eq!(s.to_px(10.0), 45.0);
        assert_eq!(s.to_px(5.0), 200.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((3.0, 3.0), (45.0, 655.0));
        assert!(s.is_degenerate());
        assert_eq!(s.to_px(3.0), 350.0);
        assert_eq!(s.to_px(-100.0), 350.0);
        assert_eq!(s.from_px(10.0), 3.0);
    }

    #[test]
    fn extent_skips_non_finite() {
        assert_eq!(extent([2.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent(Vec::<f64>::new()), None);
        assert_eq!(extent([f64::INFINITY]), None);
    }
}
