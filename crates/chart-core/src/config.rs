// File: crates/chart-core/src/config.rs
// Summary: Chart configuration: surface geometry, colors, labels and stroke styling.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::theme::{Rgba, Theme};
use crate::types::{Frame, HEIGHT, MARGIN, WIDTH};

/// Everything the chart needs to draw itself. All fields have defaults, so a
/// partial TOML/JSON table deserializes into a complete config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background: Rgba,
    pub line_color: Rgba,
    pub grid_color: Rgba,
    /// Axis lines, ticks and crosshair guides.
    pub auxiliary_color: Rgba,
    pub label_color: Rgba,
    pub loader_color: Rgba,
    pub x_label: String,
    pub y_label: String,
    pub line_width: f32,
    pub marker_radius: f32,
    pub font_size: f32,
    /// Gridline dash pattern; `None` draws solid gridlines.
    pub grid_dash: Option<Vec<f32>>,
    pub crosshair_dash: Option<Vec<f32>>,
}

impl ChartConfig {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: MARGIN,
            background: theme.background,
            line_color: theme.line_stroke,
            grid_color: theme.grid,
            auxiliary_color: theme.auxiliary,
            label_color: theme.label,
            loader_color: theme.loader,
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            line_width: 1.5,
            marker_radius: 3.0,
            font_size: 10.0,
            grid_dash: Some(vec![2.0, 6.0]),
            crosshair_dash: Some(vec![2.0, 4.0]),
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.width, self.height, self.margin)
    }

    pub fn with_size(mut self, width: u32, height: u32, margin: u32) -> Self {
        self.width = width;
        self.height = height;
        self.margin = margin;
        self
    }

    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Reject configs that would leave no plot area or carry unusable dash patterns.
    pub fn validate(&self) -> Result<()> {
        if !self.frame().has_plot_area() {
            return Err(ChartError::NoPlotArea {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }
        for dash in [&self.grid_dash, &self.crosshair_dash].into_iter().flatten() {
            let finite = dash.iter().all(|d| d.is_finite() && *d >= 0.0);
            if dash.is_empty() || !finite || dash.iter().all(|d| *d == 0.0) {
                return Err(ChartError::InvalidDash(dash.clone()));
            }
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::from_theme(&Theme::light())
    }
}
