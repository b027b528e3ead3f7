//! Colors and appearance values handed through to the presentation layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An sRGB color.
///
/// Serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(142, 142, 147);
    pub const BLUE: Color = Color::rgb(0, 122, 255);
    pub const GREEN: Color = Color::rgb(52, 199, 89);
    pub const RED: Color = Color::rgb(255, 59, 48);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error parsing a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected #rrggbb")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color::hex)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Named colors a field draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Typed text and the neutral border.
    pub text: Color,
    pub placeholder: Color,
    /// Open dropdown border, highlighted row, chips.
    pub accent: Color,
    /// Border after a confirmed selection.
    pub success: Color,
    pub destructive: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            placeholder: Color::GRAY,
            accent: Color::BLUE,
            success: Color::GREEN,
            destructive: Color::RED,
        }
    }
}

/// Sizing and decoration. The state machines never read these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub font_size: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Icon name for the dropdown toggle.
    pub dropdown_icon: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            height: 40.0,
            corner_radius: 8.0,
            dropdown_icon: "chevron.down".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_display() {
        let color = Color::hex(0xA277FF);
        assert_eq!(color.to_rgb(), (0xA2, 0x77, 0xFF));
        assert_eq!(color.to_string(), "#a277ff");
        assert_eq!("#a277ff".parse::<Color>(), Ok(color));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("zzzzzz".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }
}
