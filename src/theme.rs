//! Palettes for the built-in slide artwork.
//!
//! The default background and thumb are not bitmaps: the egui host paints
//! them procedurally from one of the palettes below. Custom images supplied
//! through an [`ImageLoader`](crate::traits::ImageLoader) ignore the palette.
//!
//! # Examples
//!
//! ```
//! use rslide::theme::{SlideTheme, list_themes};
//!
//! let dark = SlideTheme::by_name("Dark").unwrap();
//! assert_eq!(dark.name, "Dark");
//! assert!(list_themes().contains(&"Light"));
//! ```

use egui::Color32;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Colors used to paint the built-in artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideColors {
    pub track: Color32,
    pub track_border: Color32,
    pub thumb: Color32,
    pub thumb_glyph: Color32,
}

/// A named palette.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTheme {
    pub name: &'static str,
    pub colors: SlideColors,
}

static THEMES: Lazy<HashMap<&'static str, SlideTheme>> = Lazy::new(|| {
    let mut themes = HashMap::new();
    for theme in [light_theme(), dark_theme()] {
        themes.insert(theme.name, theme);
    }
    themes
});

impl SlideTheme {
    /// Looks a palette up by name.
    pub fn by_name(name: &str) -> Option<&'static SlideTheme> {
        THEMES.get(name)
    }

    /// The palette used when nothing else was selected.
    pub fn default_theme() -> &'static SlideTheme {
        &THEMES["Light"]
    }
}

/// Sorted names of all palettes.
pub fn list_themes() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = THEMES.keys().copied().collect();
    names.sort();
    names
}

fn light_theme() -> SlideTheme {
    SlideTheme {
        name: "Light",
        colors: SlideColors {
            track: Color32::from_rgb(230, 230, 230),
            track_border: Color32::from_rgb(190, 190, 190),
            thumb: Color32::from_rgb(66, 133, 244),
            thumb_glyph: Color32::WHITE,
        },
    }
}

fn dark_theme() -> SlideTheme {
    SlideTheme {
        name: "Dark",
        colors: SlideColors {
            track: Color32::from_rgb(40, 44, 52),
            track_border: Color32::from_rgb(24, 26, 31),
            thumb: Color32::from_rgb(97, 175, 239),
            thumb_glyph: Color32::from_rgb(40, 44, 52),
        },
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA` into a color.
pub fn hex_to_color32(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

/// Formats a color as `#RRGGBBAA` (unmultiplied).
pub fn color32_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_to_color32("#FF8000"), Some(Color32::from_rgb(255, 128, 0)));
        assert_eq!(hex_to_color32("000000"), Some(Color32::BLACK));
    }

    #[test]
    fn test_hex_rgba() {
        let c = hex_to_color32("#FFFFFF80").unwrap();
        assert_eq!(c.to_srgba_unmultiplied(), [255, 255, 255, 128]);
    }

    #[test]
    fn test_hex_invalid() {
        assert_eq!(hex_to_color32("#FFF"), None);
        assert_eq!(hex_to_color32("#GG0000"), None);
        assert_eq!(hex_to_color32("#ÿÿÿ"), None);
    }

    #[test]
    fn test_hex_roundtrip_opaque() {
        assert_eq!(color32_to_hex(Color32::from_rgb(1, 2, 3)), "#010203FF");
    }

    #[test]
    fn test_themes_registered() {
        assert_eq!(list_themes(), vec!["Dark", "Light"]);
        assert!(SlideTheme::by_name("Solarized").is_none());
        assert_eq!(SlideTheme::default_theme().name, "Light");
    }

    #[test]
    fn test_adjust_brightness_saturates() {
        let c = adjust_brightness(Color32::from_rgb(200, 100, 0), 2.0);
        assert_eq!(c, Color32::from_rgb(255, 200, 0));
    }
}
