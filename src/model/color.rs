//! Hex color values and RGB distance.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance in plain 0-255 RGB space (no gamma, no perceptual model).
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Opaque RGBA pixel for image output.
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// A validated `#RRGGBB` color.
///
/// Keeps the text it was parsed from; two values are equal only when that
/// text is identical, so `#ff0000` and `#FF0000` are distinct selections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// Parse `#RRGGBB` (hex digits in either case).
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || CatalogError::InvalidHex {
            value: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let rgb = Rgb::new(channel(0)?, channel(2)?, channel(4)?);

        Ok(Self {
            text: s.to_string(),
            rgb,
        })
    }

    /// Check whether a string is a well-formed `#RRGGBB` color.
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// The source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Distance to another color; see [`Rgb::distance`].
    pub fn distance(&self, other: &HexColor) -> f64 {
        self.rgb.distance(&other.rgb)
    }
}

impl FromStr for HexColor {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.text
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
