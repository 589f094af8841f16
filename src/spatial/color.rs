//! RGBA tile colors and name/hex parsing

use crate::io::error::{FloodError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Opaque RGBA tile color
///
/// The fill engine only ever compares colors for equality; the channels
/// matter to the presentation layer alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Pure red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Pure green
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Pure blue
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Warm yellow matching the classic engine default
    pub const YELLOW: Self = Self::rgb(255, 235, 4);
    /// Magenta
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// White
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Raw channel values
    pub const fn channels(self) -> [u8; 4] {
        self.0
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "magenta" | "purple" => Self::MAGENTA,
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }

        let mut channels = [255u8; 4];
        for (index, channel) in channels.iter_mut().enumerate().take(hex.len() / 2) {
            let digits = hex.get(index * 2..index * 2 + 2)?;
            *channel = u8::from_str_radix(digits, 16).ok()?;
        }
        Some(Self(channels))
    }
}

impl FromStr for Color {
    type Err = FloodError;

    /// Parse a color name (`red`, `blue`, ...) or `#rrggbb` / `#rrggbbaa`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = trimmed.strip_prefix('#').map_or_else(
            || Self::from_name(&trimmed.to_ascii_lowercase()),
            Self::from_hex,
        );

        parsed.ok_or_else(|| {
            invalid_parameter("color", &s, &"expected a color name or #rrggbb[aa]")
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from(channels: [u8; 4]) -> Self {
        Self(channels)
    }
}
