// File: crates/chart-core/src/theme.rs
// Summary: Colors, the default theme, and the background palette cycled by "Change Color".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let bad = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad())
                };
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => Err(bad()),
        }
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;
    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_hex()
    }
}

/// Application colors.
pub mod colors {
    use super::Rgba;

    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);
    pub const BG: Rgba = Rgba::rgb(0xF4, 0xF5, 0xF9);
    pub const LIGHTER: Rgba = Rgba::rgb(0xE0, 0xE3, 0xEB);
    pub const DARK: Rgba = Rgba::rgb(0x4A, 0x4F, 0x5C);
    pub const DARKER: Rgba = Rgba::rgb(0x1F, 0x23, 0x30);
    pub const BLUE: Rgba = Rgba::rgb(0x29, 0x62, 0xFF);
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Rgba,
    pub grid: Rgba,
    /// Axis lines, tick marks and crosshair guides.
    pub auxiliary: Rgba,
    pub label: Rgba,
    pub line_stroke: Rgba,
    pub loader: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: colors::WHITE,
            grid: colors::LIGHTER,
            auxiliary: colors::DARK,
            label: colors::DARKER,
            line_stroke: colors::BLUE,
            loader: colors::LIGHTER,
        }
    }
}

/// Fixed, non-empty, ordered set of colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a palette from hex strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|c| Rgba::from_hex(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// The four chart backgrounds offered by the "Change Color" control.
    pub fn backgrounds() -> Self {
        Self {
            colors: vec![
                Rgba::rgb(0xFF, 0xFF, 0xFF),
                Rgba::rgb(0xFF, 0xFC, 0xE2),
                Rgba::rgb(0xC9, 0xAE, 0xEA),
                Rgba::rgb(0xB7, 0xE4, 0xC7),
            ],
        }
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { false }
    pub fn colors(&self) -> &[Rgba] { &self.colors }
}

/// Palette selection that advances by one with wraparound.
/// Invariant: `index < palette.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorCycler {
    palette: Palette,
    index: usize,
}

impl ColorCycler {
    pub fn new(palette: Palette) -> Self {
        Self { palette, index: 0 }
    }

    /// Start the cycle on `color`: its palette slot when present, otherwise
    /// `color` is inserted as the first entry.
    pub fn starting_at(mut self, color: Rgba) -> Self {
        match self.palette.colors.iter().position(|c| *c == color) {
            Some(index) => self.index = index,
            None => {
                self.palette.colors.insert(0, color);
                self.index = 0;
            }
        }
        self
    }

    pub fn index(&self) -> usize { self.index }

    pub fn current(&self) -> Rgba {
        self.palette.colors[self.index]
    }

    /// Move to the next color, wrapping from the last back to the first. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.palette.len();
        self.index
    }

    pub fn palette(&self) -> &Palette { &self.palette }
}

impl Default for ColorCycler {
    fn default() -> Self {
        Self::new(Palette::backgrounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_long_and_alpha_hex() {
        assert_eq!(Rgba::from_hex("#fff").unwrap(), colors::WHITE);
        assert_eq!(Rgba::from_hex("C9AEEA").unwrap(), Rgba::rgb(0xC9, 0xAE, 0xEA));
        assert_eq!(Rgba::from_hex("#11223380").unwrap().a, 0x80);
        assert_eq!(Rgba::from_hex("#B7E4C7").unwrap().to_hex(), "#B7E4C7");
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#12", "#GGGGGG", "#1234567", "#ééé"] {
            assert!(matches!(Rgba::from_hex(bad), Err(ChartError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn cycle_starts_at_a_palette_color() {
        let cycler = ColorCycler::default().starting_at(Rgba::rgb(0xC9, 0xAE, 0xEA));
        assert_eq!(cycler.index(), 2);
        assert_eq!(cycler.palette().len(), 4);
    }

    #[test]
    fn unknown_start_color_joins_the_cycle() {
        let teal = Rgba::rgb(0x00, 0x80, 0x80);
        let mut cycler = ColorCycler::default().starting_at(teal);
        assert_eq!((cycler.index(), cycler.current()), (0, teal));
        assert_eq!(cycler.palette().len(), 5);
        for _ in 0..5 {
            cycler.advance();
        }
        assert_eq!(cycler.current(), teal);
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(ChartError::EmptyPalette));
    }
}
