// File: crates/chart-core/src/error.rs
// Summary: Error type for configuration and color parsing in the chart core.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid color `{0}`: expected #RGB, #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("a {width}x{height} surface leaves no plot area inside a {margin}px margin")]
    NoPlotArea { width: u32, height: u32, margin: u32 },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid dash pattern {0:?}: lengths must be finite, non-negative and not all zero")]
    InvalidDash(Vec<f32>),
}

pub type Result<T> = std::result::Result<T, ChartError>;
