//! Color values and the input shapes accepted for a color box.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for a start color string that is not in `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    #[error("color string {0:?} is not in 7-character #RRGGBB form")]
    MalformedHex(String),
}

/// An RGB color as delivered to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Dark grey, the starting color of a box registered without one.
    pub const GREY: Rgb = Rgb::new(127, 127, 127);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string. Anything else is malformed.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        let malformed = || ColorFormatError::MalformedHex(s.to_string());
        if !s.starts_with('#') || s.len() != 7 {
            return Err(malformed());
        }
        if !s[1..].chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let r = u8::from_str_radix(&s[1..3], 16).map_err(|_| malformed())?;
        let g = u8::from_str_radix(&s[3..5], 16).map_err(|_| malformed())?;
        let b = u8::from_str_radix(&s[5..7], 16).map_err(|_| malformed())?;
        Ok(Self::new(r, g, b))
    }
}

impl fmt::Display for Rgb {
    /// The comma-joined channel string substituted into script templates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// The shapes accepted for a color box's starting color: an RGB triple or a
/// `#RRGGBB` string. Triples are always valid; strings are checked when the
/// box is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartColor {
    Triple(Rgb),
    Hex(String),
}

impl StartColor {
    /// Resolve to a concrete color, rejecting malformed hex strings.
    pub fn resolve(&self) -> Result<Rgb, ColorFormatError> {
        match self {
            StartColor::Triple(c) => Ok(*c),
            StartColor::Hex(s) => Rgb::from_hex(s),
        }
    }
}

impl Default for StartColor {
    fn default() -> Self {
        StartColor::Triple(Rgb::GREY)
    }
}

impl From<Rgb> for StartColor {
    fn from(c: Rgb) -> Self {
        StartColor::Triple(c)
    }
}

impl From<[u8; 3]> for StartColor {
    fn from(c: [u8; 3]) -> Self {
        StartColor::Triple(c.into())
    }
}

impl From<&str> for StartColor {
    fn from(s: &str) -> Self {
        StartColor::Hex(s.to_string())
    }
}

impl From<String> for StartColor {
    fn from(s: String) -> Self {
        StartColor::Hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_string() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "1,2,3");
        assert_eq!(Rgb::new(255, 0, 128).to_string(), "255,0,128");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#646464"), Ok(Rgb::new(100, 100, 100)));
        assert_eq!(Rgb::from_hex("#FF00ff"), Ok(Rgb::new(255, 0, 255)));
    }

    #[test]
    fn test_from_hex_malformed() {
        for bad in ["red", "646464", "#64646", "#6464646", "#gg0000", "#+1ffff"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(ColorFormatError::MalformedHex(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_start_color_shapes() {
        assert_eq!(StartColor::from([10, 20, 30]).resolve(), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(StartColor::from("#0a141e").resolve(), Ok(Rgb::new(10, 20, 30)));
        assert!(StartColor::from("grey").resolve().is_err());
    }

    #[test]
    fn test_default_is_dark_grey() {
        assert_eq!(StartColor::default().resolve(), Ok(Rgb::new(127, 127, 127)));
    }
}
