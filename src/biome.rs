use egui::Color32;
use rand::Rng;

/// A named paint color. The palette is read-only at runtime; it feeds both
/// the random fill and the brush selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Biome {
    pub name: &'static str,
    pub color: Color32,
}

pub const BIOMES: &[Biome] = &[
    Biome {
        name: "Forest",
        color: Color32::from_rgb(0x22, 0x8b, 0x22),
    },
    Biome {
        name: "Desert",
        color: Color32::from_rgb(0xf4, 0xa4, 0x60),
    },
    Biome {
        name: "Water",
        color: Color32::from_rgb(0x46, 0x82, 0xb4),
    },
    Biome {
        name: "Mountain",
        color: Color32::from_rgb(0x69, 0x69, 0x69),
    },
    Biome {
        name: "Grassland",
        color: Color32::from_rgb(0x9a, 0xcd, 0x32),
    },
    Biome {
        name: "Swamp",
        color: Color32::from_rgb(0x55, 0x6b, 0x2f),
    },
    Biome {
        name: "Tundra",
        color: Color32::from_rgb(0xb0, 0xc4, 0xde),
    },
    Biome {
        name: "Volcanic",
        color: Color32::from_rgb(0x8b, 0x00, 0x00),
    },
];

/// Picks one palette color uniformly at random. Intentionally unseeded:
/// repeated fills are expected to differ.
pub fn random_biome_color(rng: &mut impl Rng) -> Color32 {
    BIOMES[rng.gen_range(0..BIOMES.len())].color
}

/// Parses a `#rrggbb` (or `rrggbb`) hex color string.
pub fn parse_hex_color(s: &str) -> Option<Color32> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Formats a color as a `#rrggbb` hex string (alpha is dropped).
pub fn color_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Serde adapter storing a [`Color32`] as a `#rrggbb` string.
pub mod serde_hex {
    use egui::Color32;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::color_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid hex color: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_and_format_round_trip() {
        for biome in BIOMES {
            let hex = color_hex(biome.color);
            assert_eq!(parse_hex_color(&hex), Some(biome.color));
        }
        assert_eq!(parse_hex_color("228b22"), parse_hex_color("#228B22"));
        assert_eq!(parse_hex_color("#22"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
    }

    #[test]
    fn random_color_comes_from_palette() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let color = random_biome_color(&mut rng);
            assert!(BIOMES.iter().any(|b| b.color == color));
        }
    }
}
