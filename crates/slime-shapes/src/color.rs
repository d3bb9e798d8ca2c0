// Imports
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A opaque rgb color with 8 bits per channel.
///
/// Serialized as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    /// Red, ranging [0, 255].
    pub r: u8,
    /// Green, ranging [0, 255].
    pub g: u8,
    /// Blue, ranging [0, 255].
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Black color.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Orange color.
    pub const ORANGE: Self = Self::new(255, 166, 0);

    /// Purple color.
    pub const PURPLE: Self = Self::new(88, 80, 141);

    /// Salmon color.
    pub const SALMON: Self = Self::new(255, 99, 97);

    /// Pink color.
    pub const PINK: Self = Self::new(188, 87, 144);

    /// Blue color.
    pub const BLUE: Self = Self::new(0, 66, 92);

    /// The named presets, used as the default palette.
    pub const PRESETS: [Self; 5] = [
        Self::ORANGE,
        Self::PURPLE,
        Self::SALMON,
        Self::PINK,
        Self::BLUE,
    ];

    /// A new color from rgb values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The preset with the given name, case-insensitive.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "orange" => Some(Self::ORANGE),
            "purple" => Some(Self::PURPLE),
            "salmon" => Some(Self::SALMON),
            "pink" => Some(Self::PINK),
            "blue" => Some(Self::BLUE),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parsing a color failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color \"{0}\", expected a preset name or a hex color like \"#ffa600\"")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(preset) = Self::preset(trimmed) {
            return Ok(preset);
        }
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(tuple: (u8, u8, u8)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b)
    }
}

/// From a `0xRRGGBB` value, the upper byte is ignored.
impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        (u32::from(color.r) << 16) | (u32::from(color.g) << 8) | u32::from(color.b)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}
