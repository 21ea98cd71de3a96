//! Immutable presentation theme shared by both renderers.
//!
//! A [`Theme`] carries the canvas size, palette and timing constants. It is
//! passed by reference into the layout engine, the viewer and the exporter;
//! there is no global palette, so tests can substitute their own theme.

use crate::error::{Error, Result};
use crate::model::{Accent, Background};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_u32(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Parse `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::from_u32(value))
    }

    /// Uppercase `RRGGBB`, the form DrawingML expects in `srgbClr/@val`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Relative luminance in `0.0..=1.0` (sRGB weights, no gamma).
    pub fn luminance(&self) -> f64 {
        (0.2126 * self.0 as f64 + 0.7152 * self.1 as f64 + 0.0722 * self.2 as f64) / 255.0
    }

    pub fn is_light(&self) -> bool {
        self.luminance() > 0.6
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid colour {:?}", s)))
    }
}

/// Fill and ink pair for a semantic accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub fill: Rgb,
    pub ink: Rgb,
}

/// The four accent tints, keyed by [`Accent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tints {
    pub teal: Tint,
    pub red: Tint,
    pub amber: Tint,
    pub green: Tint,
}

impl Default for Tints {
    fn default() -> Self {
        Self {
            teal: Tint {
                fill: Rgb::from_u32(0xccfbf1),
                ink: Rgb::from_u32(0x0f766e),
            },
            red: Tint {
                fill: Rgb::from_u32(0xfee2e2),
                ink: Rgb::from_u32(0xb91c1c),
            },
            amber: Tint {
                fill: Rgb::from_u32(0xfef3c7),
                ink: Rgb::from_u32(0xb45309),
            },
            green: Tint {
                fill: Rgb::from_u32(0xdcfce7),
                ink: Rgb::from_u32(0x15803d),
            },
        }
    }
}

impl Tints {
    pub fn get(&self, accent: Accent) -> Tint {
        match accent {
            Accent::Teal => self.teal,
            Accent::Red => self.red,
            Accent::Amber => self.amber,
            Accent::Green => self.green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub navy: Rgb,
    pub teal: Rgb,
    pub white: Rgb,
    pub light_gray: Rgb,
    pub dark_gray: Rgb,
    pub muted: Rgb,
    pub green: Rgb,
    pub red: Rgb,
    pub amber: Rgb,
    pub accent: Rgb,
    pub gradient_start: Rgb,
    pub gradient_end: Rgb,
    /// Tile fill for metrics on dark slides
    pub tile_dark: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            navy: Rgb::from_u32(0x1e3a5f),
            teal: Rgb::from_u32(0x0d9488),
            white: Rgb::from_u32(0xffffff),
            light_gray: Rgb::from_u32(0xf1f5f9),
            dark_gray: Rgb::from_u32(0x334155),
            muted: Rgb::from_u32(0x94a3b8),
            green: Rgb::from_u32(0x16a34a),
            red: Rgb::from_u32(0xdc2626),
            amber: Rgb::from_u32(0xd97706),
            accent: Rgb::from_u32(0x0ea5e9),
            gradient_start: Rgb::from_u32(0x0f766e),
            gradient_end: Rgb::from_u32(0x14532d),
            tile_dark: Rgb::from_u32(0x2d4a6f),
        }
    }
}

impl Palette {
    pub fn accent_color(&self, accent: Accent) -> Rgb {
        match accent {
            Accent::Teal => self.teal,
            Accent::Red => self.red,
            Accent::Amber => self.amber,
            Accent::Green => self.green,
        }
    }
}

/// Presentation theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Canvas width in inches
    pub width: f64,
    /// Canvas height in inches
    pub height: f64,
    pub font_family: String,
    pub palette: Palette,
    pub tints: Tints,
    /// Delay between a navigation request and the slide swap
    pub transition_ms: u64,
    /// Label printed in the centre node of hub diagrams
    pub hub_label: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 5.625,
            font_family: "Arial".to_string(),
            palette: Palette::default(),
            tints: Tints::default(),
            transition_ms: 200,
            hub_label: "Siloed Approach".to_string(),
        }
    }
}

impl Theme {
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let theme: Theme = serde_saphyr::from_str(input).map_err(|e| Error::Theme(e.to_string()))?;
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !(usable(theme.width) && usable(theme.height)) {
            return Err(Error::Theme(format!(
                "canvas must be positive, got {} x {}",
                theme.width, theme.height
            )));
        }
        Ok(theme)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&input)
    }

    pub fn transition(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.transition_ms)
    }

    /// Base text colour for a slide background.
    ///
    /// Dark, gradient and accent backgrounds take white text; light or absent
    /// backgrounds take dark grey. Block colours never override this.
    pub fn foreground(&self, background: Option<Background>) -> Rgb {
        if crate::model::needs_light_text(background) {
            self.palette.white
        } else {
            self.palette.dark_gray
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::from_hex("#1e3a5f"), Some(Rgb(0x1e, 0x3a, 0x5f)));
        assert_eq!(Rgb::from_hex("0D9488").map(|c| c.to_hex()), Some("0D9488".to_string()));
        assert_eq!(Rgb::from_hex("12345"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_foreground_contrast() {
        let theme = Theme::default();
        for bg in [Background::Dark, Background::Gradient, Background::Accent] {
            assert!(theme.foreground(Some(bg)).is_light(), "{:?}", bg);
        }
        assert!(!theme.foreground(Some(Background::Light)).is_light());
        assert!(!theme.foreground(None).is_light());
    }

    #[test]
    fn test_partial_yaml_override() {
        let theme = Theme::from_yaml_str("transition_ms: 150\npalette:\n  navy: '#000080'\n").unwrap();
        assert_eq!(theme.transition_ms, 150);
        assert_eq!(theme.palette.navy, Rgb(0, 0, 0x80));
        assert_eq!(theme.palette.teal, Palette::default().teal);
        assert_eq!(theme.width, 10.0);
    }

    #[test]
    fn test_rejects_bad_theme() {
        assert!(matches!(
            Theme::from_yaml_str("width: 0\n"),
            Err(Error::Theme(_))
        ));
        assert!(matches!(
            Theme::from_yaml_str("width: .inf\n"),
            Err(Error::Theme(_))
        ));
        assert!(matches!(
            Theme::from_yaml_str("height: .nan\n"),
            Err(Error::Theme(_))
        ));
        assert!(matches!(
            Theme::from_yaml_str("palette:\n  navy: blue\n"),
            Err(Error::Theme(_))
        ));
    }
}
