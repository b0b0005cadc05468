//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TilifyError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour, used for blank atlas cells.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black, the default undershadow colour.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Parse a 6-digit hex colour string (`RRGGBB`, optional leading `#`).
    ///
    /// The result is opaque; alpha is assigned per pixel when the colour
    /// is used as an undershadow.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TilifyError::config(
                format!("Invalid hex colour: '{}'", s),
                Some("Use six hexadecimal digits, for example 000000 or FF8800"),
            ));
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to RGBA channel bytes.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from RGBA channel bytes.
    pub fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl FromStr for Colour {
    type Err = TilifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16)
        .map_err(|_| TilifyError::config(format!("Invalid hex byte: {}", s), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Colour::from_hex("FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_with_hash() {
        let c = Colour::from_hex("#00FF7f").unwrap();
        assert_eq!(c, Colour::rgb(0, 255, 127));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("GG0000").is_err());
        assert!(Colour::from_hex("F00").is_err());
        assert!(Colour::from_hex("FF000080").is_err());
        assert!(Colour::from_hex("+F0000").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_error_is_config() {
        let err = Colour::from_hex("nothex").unwrap_err();
        assert!(matches!(err, TilifyError::Config { .. }));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let c = Colour::rgb(0x12, 0xAB, 0x00);
        assert_eq!(c.to_string(), "12AB00");
        assert_eq!(c.to_string().parse::<Colour>().unwrap(), c);
    }

    #[test]
    fn test_with_alpha() {
        let c = Colour::rgb(1, 2, 3).with_alpha(64);
        assert_eq!(c.to_rgba(), [1, 2, 3, 64]);
        assert!(Colour::TRANSPARENT.a == 0);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let c: Colour = serde_yaml::from_str("'FF8800'").unwrap();
        assert_eq!(c, Colour::rgb(255, 136, 0));
        assert!(serde_yaml::from_str::<Colour>("'red'").is_err());
    }
}
