//! Hex color parsing for palette definitions
//!
//! Supports 6-digit (RRGGBB) and 8-digit (AARRGGBB) formats, with an
//! optional '#' prefix. 6-digit values get full opacity. Callers fall back
//! to a fixed default when parsing fails; nothing here returns an error.

use egui::Color32;

/// A color parsed from an ARGB hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(u32);

impl HexColor {
    /// Parse a hex color string. Returns None for anything malformed.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        match hex.len() {
            6 => u32::from_str_radix(hex, 16)
                .ok()
                .map(|rgb| Self(0xFF00_0000 | rgb)),
            8 => u32::from_str_radix(hex, 16).ok().map(Self),
            _ => None,
        }
    }

    pub fn argb32(&self) -> u32 {
        self.0
    }

    pub fn to_color32(self) -> Color32 {
        let [a, r, g, b] = self.0.to_be_bytes();
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_gets_full_alpha() {
        let color = HexColor::parse("3B82F6").unwrap();
        assert_eq!(color.argb32(), 0xFF3B82F6);
    }

    #[test]
    fn test_parse_with_hash_prefix() {
        let color = HexColor::parse("#10B981").unwrap();
        assert_eq!(color.argb32(), 0xFF10B981);
    }

    #[test]
    fn test_parse_eight_digit_keeps_alpha() {
        let color = HexColor::parse("#803B82F6").unwrap();
        assert_eq!(color.argb32(), 0x803B82F6);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(HexColor::parse(""), None);
        assert_eq!(HexColor::parse("#GGGGGG"), None);
        assert_eq!(HexColor::parse("12345"), None);
        assert_eq!(HexColor::parse("not a color"), None);
    }

    #[test]
    fn test_to_color32_channels() {
        let color = HexColor::parse("#3B82F6").unwrap().to_color32();
        assert_eq!(color.r(), 0x3B);
        assert_eq!(color.g(), 0x82);
        assert_eq!(color.b(), 0xF6);
        assert_eq!(color.a(), 0xFF);
    }

}
