// File: crates/tufte-core/src/color.rs
// Summary: RGBA color parsed from CSS hex notation, plus the default palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || ChartError::InvalidColor(s.to_string());
        if !hex.is_ascii() {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (slot, ch) in c.iter_mut().zip(hex.chars()) {
                    let v = ch.to_digit(16).ok_or_else(bad)? as u8;
                    *slot = v * 17;
                }
                Ok(Self::rgb(c[0], c[1], c[2]))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Color::from_hex(s) }
}

impl TryFrom<String> for Color {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> { Color::from_hex(&s) }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_string() }
}

/// Dark blues used for stack layers and legend boxes when no colors are configured.
pub fn default_colors() -> Vec<Color> {
    vec![
        Color::rgb(0x07, 0x09, 0x3D),
        Color::rgb(0x0C, 0x0F, 0x66),
        Color::rgb(0x47, 0x6F, 0xB2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::from_hex("#07093D").unwrap(), Color::rgb(7, 9, 61));
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#00000080").unwrap(), Color::rgba(0, 0, 0, 128));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("#12").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn display_round_trips_through_hex() {
        let c = Color::rgb(0x47, 0x6F, 0xB2);
        assert_eq!(c.to_string(), "#476FB2");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }
}
