//! Named palette presets
//!
//! Palettes are defined as hex strings and resolved to concrete colors at
//! use. An unknown palette name resolves to the default preset; a
//! definition that fails to parse falls back to the fixed primary/accent
//! defaults. Resolution is never an error.

use egui::Color32;
use tracing::warn;

use crate::color::HexColor;
use crate::constants::fallback;

/// Hex-string definition of one palette
struct PaletteDef {
    name: &'static str,
    primary: &'static str,
    accent: &'static str,
    surface: &'static str,
    text: &'static str,
}

const PRESETS: &[PaletteDef] = &[
    PaletteDef {
        name: "eoy-copper",
        primary: "#B87333",
        accent: "#2DD4BF",
        surface: "#1C1410",
        text: "#F5EDE4",
    },
    PaletteDef {
        name: "slate",
        primary: "#3B82F6",
        accent: "#10B981",
        surface: "#0F172A",
        text: "#E2E8F0",
    },
    PaletteDef {
        name: "forest",
        primary: "#4D7C0F",
        accent: "#FACC15",
        surface: "#14190F",
        text: "#ECF2E4",
    },
];

/// Concrete colors for the current palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColors {
    /// Base connector and heading color
    pub primary: Color32,
    /// Emphasis color for active-node connectors
    pub accent: Color32,
    /// Page background
    pub surface: Color32,
    /// Body text
    pub text: Color32,
}

/// Names of the available presets, default first
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Resolve a palette name to concrete colors
pub fn resolve(name: &str) -> PaletteColors {
    // Arbitrary names are accepted as a preference value; unknown ones
    // render with the default preset.
    let def = PRESETS.iter().find(|p| p.name == name).unwrap_or(&PRESETS[0]);

    PaletteColors {
        primary: parse_or(def.primary, fallback::PRIMARY),
        accent: parse_or(def.accent, fallback::ACCENT),
        surface: parse_or(def.surface, (0x0F, 0x17, 0x2A)),
        text: parse_or(def.text, (0xE2, 0xE8, 0xF0)),
    }
}

fn parse_or(hex: &str, (r, g, b): (u8, u8, u8)) -> Color32 {
    HexColor::parse(hex)
        .map(HexColor::to_color32)
        .unwrap_or_else(|| {
            warn!(value = %hex, "Invalid palette color definition, using default");
            Color32::from_rgb(r, g, b)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::DEFAULT_PALETTE;

    #[test]
    fn test_default_preset_is_first() {
        assert_eq!(PRESETS[0].name, DEFAULT_PALETTE);
        assert_eq!(preset_names()[0], DEFAULT_PALETTE);
    }

    #[test]
    fn test_resolve_known_preset() {
        let colors = resolve("slate");
        assert_eq!(colors.primary, Color32::from_rgb(0x3B, 0x82, 0xF6));
        assert_eq!(colors.accent, Color32::from_rgb(0x10, 0xB9, 0x81));
    }

    #[test]
    fn test_unknown_name_resolves_to_default() {
        assert_eq!(resolve("no-such-palette"), resolve(DEFAULT_PALETTE));
        assert_eq!(resolve(""), resolve(DEFAULT_PALETTE));
    }

    #[test]
    fn test_unparseable_definition_falls_back_to_defaults() {
        let primary = parse_or("garbage", crate::constants::fallback::PRIMARY);
        assert_eq!(primary, Color32::from_rgb(59, 130, 246));

        let accent = parse_or("also garbage", crate::constants::fallback::ACCENT);
        assert_eq!(accent, Color32::from_rgb(16, 185, 129));
    }
}
