// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface size, margin, plot frame).

/// Default surface width in pixels.
pub const WIDTH: u32 = 700;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;
/// Default margin between the surface edge and the plot area, in pixels.
pub const MARGIN: u32 = 45;

/// Fixed-size drawing frame: surface dimensions plus a uniform margin.
/// Contract: all fields are non-negative (by type); a usable plot needs
/// `width > 2 * margin` and `height > 2 * margin`, see [`Frame::has_plot_area`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Frame {
    pub const fn new(width: u32, height: u32, margin: u32) -> Self {
        Self { width, height, margin }
    }

    pub const fn has_plot_area(&self) -> bool {
        self.width > 2 * self.margin && self.height > 2 * self.margin
    }

    /// Left edge of the plot area (x range start).
    pub fn plot_left(&self) -> f32 { self.margin as f32 }
    /// Right edge of the plot area (x range end).
    pub fn plot_right(&self) -> f32 { self.width as f32 - self.margin as f32 }
    /// Top edge of the plot area (y range end, since y is inverted).
    pub fn plot_top(&self) -> f32 { self.margin as f32 }
    /// Bottom edge of the plot area (y range start).
    pub fn plot_bottom(&self) -> f32 { self.height as f32 - self.margin as f32 }

    pub fn plot_width(&self) -> f32 { self.plot_right() - self.plot_left() }
    pub fn plot_height(&self) -> f32 { self.plot_bottom() - self.plot_top() }

    /// Pixel range the X scale maps onto.
    pub fn x_range(&self) -> (f32, f32) { (self.plot_left(), self.plot_right()) }
    /// Pixel range the Y scale maps onto; inverted so the domain minimum lands at the bottom.
    pub fn y_range(&self) -> (f32, f32) { (self.plot_bottom(), self.plot_top()) }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, MARGIN)
    }
}
