use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Swatches shown before any custom colors, in display order.
pub const DEFAULT_PALETTE: [&str; 28] = [
    "#f1a099", "#ffc67b", "#ffe6a2", "#80e5b1", "#92e8e8", "#a6a1e6", "#e2a1e6",
    "#e44234", "#ff8d00", "#ffcd45", "#00cc63", "#25d2d1", "#4e7de9", "#c544ce",
    "#88271f", "#b54800", "#f69a00", "#007a3b", "#167e7d", "#2e4b8d", "#76287b",
    "#ffffff", "#cdcdcd", "#9c9c9c", "#696969", "#373737", "#272727", "#000000",
];

/// An RGBA color as the viewer stores it: 8-bit channels, alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
    #[serde(rename = "A", default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#rrggbb` or `#rgb` (the `#` is optional). Alpha is opaque.
    pub fn from_hex(input: &str) -> Result<Self, WidgetError> {
        let rgb = Srgb::<u8>::from_str(input.trim()).map_err(|source| {
            WidgetError::InvalidHexColor {
                input: input.to_string(),
                source,
            }
        })?;
        let (r, g, b) = rgb.into_components();
        Ok(Self::rgb(r, g, b))
    }

    /// Lowercase `#rrggbb`. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Canonical lowercase `#rrggbb` form of a hex string, if it parses.
pub fn normalize_hex(input: &str) -> Option<String> {
    Color::from_hex(input).ok().map(|color| color.to_hex())
}

/// Hex strings compare equal regardless of case or shorthand.
pub fn same_hex(a: &str, b: &str) -> bool {
    match (normalize_hex(a), normalize_hex(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a.eq_ignore_ascii_case(b),
    }
}
