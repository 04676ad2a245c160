//! Framework-neutral color values

use serde::{Serialize, Serializer};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Composite `self` over `background` at the given opacity (0.0-1.0)
    pub fn blend_over(self, background: Rgb, opacity: f64) -> Rgb {
        let a = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (f64::from(bg) + (f64::from(fg) - f64::from(bg)) * a).round() as u8
        };
        Rgb::new(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Display color for a calendar cell, resolved by the theme at draw time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColorToken {
    /// No sessions: neutral border color
    Empty,
    /// Accent hue at the given opacity
    Accent { opacity: f64 },
}
