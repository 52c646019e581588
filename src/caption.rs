//! Caption text and style.

use egui::Color32;

use crate::config::TextGravity;
use crate::traits::TextBackend;

/// Everything a text backend needs to shape the caption.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_px: i32,
    pub bold: bool,
    pub color: Color32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 16,
            bold: false,
            color: Color32::BLACK,
        }
    }
}

/// The caption shown right of the thumb.
///
/// The measured width depends on the text backend, so it is computed lazily
/// on the next draw after any change of text or style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Caption {
    text: String,
    style: TextStyle,
    padding: i32,
    gravity: TextGravity,
    measured_width: Option<i32>,
}

impl Caption {
    pub fn new(text: impl Into<String>, style: TextStyle, padding: i32, gravity: TextGravity) -> Self {
        Self {
            text: text.into(),
            style,
            padding,
            gravity,
            measured_width: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    pub fn gravity(&self) -> TextGravity {
        self.gravity
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.measured_width = None;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.style.bold = bold;
        self.measured_width = None;
    }

    pub fn set_size(&mut self, size_px: i32) {
        self.style.size_px = size_px;
        self.measured_width = None;
    }

    /// Color does not affect measurement.
    pub fn set_color(&mut self, color: Color32) {
        self.style.color = color;
    }

    pub fn set_padding(&mut self, padding: i32) {
        self.padding = padding;
    }

    pub fn set_gravity(&mut self, gravity: TextGravity) {
        self.gravity = gravity;
    }

    /// Last measured width, if still valid.
    pub fn cached_width(&self) -> Option<i32> {
        self.measured_width
    }

    /// Measured width of the full text, measuring through `backend` if stale.
    pub fn measured_width<B: TextBackend + ?Sized>(&mut self, backend: &B) -> i32 {
        match self.measured_width {
            Some(width) => width,
            None => {
                let width = backend.measure_text(&self.text, &self.style) as i32;
                self.measured_width = Some(width);
                width
            }
        }
    }
}
