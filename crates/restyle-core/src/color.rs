//! Color values and the color resolver
//!
//! Instruction documents carry colors as loose strings: `#10B981`, `10b981`,
//! `white`, `Grey`. [`resolve`] turns those into a normalized [`Color`], or
//! `None` when the text cannot be interpreted. An unresolved color is not an
//! error; the merge engine keeps the previous value instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A normalized RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Named colors accepted in addition to hex strings.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("red", Color::rgb(0xFF, 0x3B, 0x30)),
    ("green", Color::rgb(0x34, 0xC7, 0x59)),
    ("blue", Color::rgb(0x00, 0x7A, 0xFF)),
    ("gray", Color::rgb(0x8E, 0x8E, 0x93)),
    ("grey", Color::rgb(0x8E, 0x8E, 0x93)),
];

impl Color {
    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Uppercase `#RRGGBB` form. Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Hex-only parsing: `#` optional, exactly six hex digits.
    fn from_hex(digits: &str) -> Option<Self> {
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
    }
}

/// Resolve a loose color reference.
///
/// Accepts `#RRGGBB` / `RRGGBB` (case-insensitive) or one of the named
/// colors. Returns `None` for anything else.
pub fn resolve(text: &str) -> Option<Color> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.starts_with('#') {
        return Color::from_hex(text);
    }

    Color::from_hex(text).or_else(|| Color::from_name(text))
}

/// Returned by [`Color::from_str`] when the text is not a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unresolved color: {0:?}")]
pub struct UnresolvedColor(pub String);

impl FromStr for Color {
    type Err = UnresolvedColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).ok_or_else(|| UnresolvedColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hex_with_hash() {
        assert_eq!(resolve("#10B981"), Some(Color::rgb(0x10, 0xB9, 0x81)));
    }

    #[test]
    fn test_resolve_hex_without_hash_and_lowercase() {
        assert_eq!(resolve("ffb6c1"), Some(Color::rgb(0xFF, 0xB6, 0xC1)));
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(resolve("  #064e3b \n"), Some(Color::rgb(0x06, 0x4E, 0x3B)));
    }

    #[test]
    fn test_resolve_is_fully_opaque() {
        assert_eq!(resolve("#000000").unwrap().a, 0xFF);
    }

    #[test]
    fn test_resolve_named_colors_case_insensitive() {
        assert_eq!(resolve("White"), Some(Color::rgb(0xFF, 0xFF, 0xFF)));
        assert_eq!(resolve("BLACK"), Some(Color::rgb(0, 0, 0)));
        assert_eq!(resolve("gray"), resolve("Grey"));
        assert!(resolve("red").is_some());
        assert!(resolve("green").is_some());
        assert!(resolve("blue").is_some());
    }

    #[test]
    fn test_resolve_rejects_invalid_input() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
        assert_eq!(resolve("#12345"), None);
        assert_eq!(resolve("#1234567"), None);
        assert_eq!(resolve("#12345G"), None);
        assert_eq!(resolve("notacolor"), None);
        assert_eq!(resolve("#white"), None);
        assert_eq!(resolve("##10B981"), None);
    }

    #[test]
    fn test_resolve_rejects_multibyte_text_of_hex_length() {
        // Six bytes, but not six hex characters.
        assert_eq!(resolve("ééé"), None);
    }

    #[test]
    fn test_hex_round_trip_normalizes_case() {
        for hex in ["#10b981", "#FFFFFF", "#aBcDeF", "#000000", "#064E3B"] {
            let color = resolve(hex).unwrap();
            assert_eq!(color.to_hex(), hex.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_hex_round_trip_exhaustive_channel_values() {
        for value in 0..=255u8 {
            let hex = format!("#{value:02x}{value:02X}{:02x}", 255 - value);
            let color = resolve(&hex).unwrap();
            assert_eq!(color.to_hex(), hex.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_from_str_reports_unresolved() {
        let err = "nope".parse::<Color>().unwrap_err();
        assert_eq!(err, UnresolvedColor("nope".to_string()));
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0x10, 0xB9, 0x81)).unwrap();
        assert_eq!(json, "\"#10B981\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(0x10, 0xB9, 0x81));
    }
}
