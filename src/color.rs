use std::fmt;

use image::Rgba;
use serde::de::Deserializer;
use serde::Deserialize;

/// RGB color parsed from a 6-digit hex string (optionally `#`-prefixed).
///
/// Parsing is total: anything that is not exactly six hex digits resolves to
/// black so a bad option value never aborts a compose call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const BLACK: Self = Self([0, 0, 0]);

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::BLACK;
        }
        let channel = |range: std::ops::Range<usize>| -> u8 {
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };
        Self([channel(0..2), channel(2..4), channel(4..6)])
    }

    /// The color as an RGBA pixel with the given alpha.
    pub fn rgba(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.0[0], self.0[1], self.0[2], alpha])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_hex() {
        assert_eq!(HexColor::parse("ff8000"), HexColor([255, 128, 0]));
        assert_eq!(HexColor::parse("#ff8000"), HexColor([255, 128, 0]));
        assert_eq!(HexColor::parse("  #FFFFFF "), HexColor([255, 255, 255]));
    }

    #[test]
    fn malformed_strings_fall_back_to_black() {
        assert_eq!(HexColor::parse("notacolor"), HexColor::BLACK);
        assert_eq!(HexColor::parse("fff"), HexColor::BLACK);
        assert_eq!(HexColor::parse("#ff80001"), HexColor::BLACK);
        assert_eq!(HexColor::parse(""), HexColor::BLACK);
    }

    #[test]
    fn displays_lowercase_with_prefix() {
        assert_eq!(HexColor([255, 128, 0]).to_string(), "#ff8000");
    }
}
