//! Configuration model of the slide control.
//!
//! A [`SlideConfig`] mirrors the attribute set a layout document can carry.
//! Every field is optional in the serialized form; missing fields take the
//! documented defaults. Enumerated attributes are stored as the integer
//! values used by layout documents and decoded through lookup tables, so an
//! unknown value falls back to the default variant instead of failing.

use anyhow::{anyhow, Context, Result};
use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

use crate::theme::{color32_to_hex, hex_to_color32};

/// Resource id of the built-in track artwork.
pub const BUILTIN_BACKGROUND: &str = "builtin:background";
/// Resource id of the built-in thumb artwork.
pub const BUILTIN_THUMB: &str = "builtin:thumb";

/// Default caption size in density-independent pixels.
pub const DEFAULT_TEXT_SIZE_DP: f32 = 16.0;
/// Default unlock threshold in percent of the track width.
pub const DEFAULT_LIMIT_PROGRESS: i32 = 95;
pub const MIN_LIMIT_PROGRESS: i32 = 10;
pub const MAX_LIMIT_PROGRESS: i32 = 99;

/// Pixels the thumb retracts per frame once released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResetSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

const RESET_SPEED_TABLE: [(i32, ResetSpeed); 3] = [
    (1, ResetSpeed::Slow),
    (2, ResetSpeed::Normal),
    (3, ResetSpeed::Fast),
];

impl ResetSpeed {
    /// Decodes a layout attribute value (1, 2, 3). Unknown values map to `Normal`.
    pub fn from_attr(value: i32) -> Self {
        RESET_SPEED_TABLE
            .iter()
            .find(|(attr, _)| *attr == value)
            .map(|(_, speed)| *speed)
            .unwrap_or_else(|| {
                log::debug!("unknown resetSpeed attribute {}, using NORMAL", value);
                ResetSpeed::Normal
            })
    }

    /// Layout attribute value of this variant.
    pub fn attr(self) -> i32 {
        RESET_SPEED_TABLE
            .iter()
            .find(|(_, speed)| *speed == self)
            .map(|(attr, _)| *attr)
            .unwrap_or(2)
    }

    /// Retract distance in pixels per frame.
    pub fn pixels_per_frame(self) -> i32 {
        match self {
            ResetSpeed::Slow => 25,
            ResetSpeed::Normal => 50,
            ResetSpeed::Fast => 100,
        }
    }
}

impl Serialize for ResetSpeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.attr())
    }
}

impl<'de> Deserialize<'de> for ResetSpeed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        i32::deserialize(deserializer).map(ResetSpeed::from_attr)
    }
}

/// Horizontal anchoring of the caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextGravity {
    /// Just right of the thumb, after `textPadding`.
    #[default]
    None,
    /// Centered on the whole track.
    CenterInParent,
    /// Centered on the part of the track right of the thumb.
    CenterOfThumb,
}

const TEXT_GRAVITY_TABLE: [(i32, TextGravity); 3] = [
    (1, TextGravity::None),
    (2, TextGravity::CenterInParent),
    (3, TextGravity::CenterOfThumb),
];

impl TextGravity {
    /// Decodes a layout attribute value (1, 2, 3). Unknown values map to `None`.
    pub fn from_attr(value: i32) -> Self {
        TEXT_GRAVITY_TABLE
            .iter()
            .find(|(attr, _)| *attr == value)
            .map(|(_, gravity)| *gravity)
            .unwrap_or_else(|| {
                log::debug!("unknown textGravity attribute {}, using NONE", value);
                TextGravity::None
            })
    }

    pub fn attr(self) -> i32 {
        TEXT_GRAVITY_TABLE
            .iter()
            .find(|(_, gravity)| *gravity == self)
            .map(|(attr, _)| *attr)
            .unwrap_or(1)
    }
}

impl Serialize for TextGravity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.attr())
    }
}

impl<'de> Deserialize<'de> for TextGravity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        i32::deserialize(deserializer).map(TextGravity::from_attr)
    }
}

/// Clamps a threshold percentage into `[10, 99]`.
pub fn clamp_limit_progress(value: i32) -> i32 {
    let clamped = value.clamp(MIN_LIMIT_PROGRESS, MAX_LIMIT_PROGRESS);
    if clamped != value {
        log::debug!("limitProgress {} clamped to {}", value, clamped);
    }
    clamped
}

mod hex_color {
    use super::*;

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&color32_to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Color32, D::Error> {
        let text = String::deserialize(deserializer)?;
        hex_to_color32(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", text)))
    }
}

/// Options recognized by the slide control.
///
/// Pixel sizes are physical pixels. `text_size` of `None` means
/// `16 * density`; `thumb_width`/`thumb_height` of `None` mean the intrinsic
/// size of the thumb image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlideConfig {
    pub background: Option<String>,
    pub thumb: Option<String>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
    pub thumb_padding: i32,
    pub reset_speed: ResetSpeed,
    pub text: String,
    pub text_bold: bool,
    pub text_size: Option<i32>,
    #[serde(with = "hex_color")]
    pub text_color: Color32,
    pub text_padding: i32,
    pub text_gravity: TextGravity,
    pub limit_progress: i32,
    pub density: f32,
    pub keep_leading_ellipsis: bool,
    pub enabled: bool,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            background: Some(BUILTIN_BACKGROUND.to_string()),
            thumb: Some(BUILTIN_THUMB.to_string()),
            thumb_width: None,
            thumb_height: None,
            thumb_padding: 0,
            reset_speed: ResetSpeed::Normal,
            text: String::new(),
            text_bold: false,
            text_size: None,
            text_color: Color32::BLACK,
            text_padding: 0,
            text_gravity: TextGravity::None,
            limit_progress: DEFAULT_LIMIT_PROGRESS,
            density: 1.0,
            keep_leading_ellipsis: false,
            enabled: true,
        }
    }
}

impl SlideConfig {
    /// Parses a JSON attribute document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SlideConfig =
            serde_json::from_str(json).context("Failed to parse slide configuration")?;
        config.validated()
    }

    /// Reads and parses a JSON attribute document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Applies the silent clamps and rejects values no control can honor.
    pub fn validated(mut self) -> Result<Self> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(anyhow!("density must be positive, got {}", self.density));
        }
        self.limit_progress = clamp_limit_progress(self.limit_progress);
        self.thumb_padding = self.thumb_padding.max(0);
        self.text_padding = self.text_padding.max(0);
        Ok(self)
    }

    /// Caption size in pixels, applying the density-scaled default.
    pub fn effective_text_size(&self) -> i32 {
        self.text_size
            .unwrap_or((DEFAULT_TEXT_SIZE_DP * self.density) as i32)
    }
}
