//! Host contracts consumed by the slide control.
//!
//! The control never talks to a windowing system directly. Everything it
//! needs from the outside world (painting, text shaping, redraw scheduling,
//! pointer capture and image resolution) goes through the traits below, so
//! the same interaction engine can run inside egui or inside a test harness.

use crate::caption::TextStyle;
use crate::geometry::IntRect;

/// The glyph a text backend prepends when it truncates from the start.
pub const ELLIPSIS: char = '\u{2026}';

/// Opaque identifier of a resolved image.
pub type ImageId = u64;

/// A resolved image: an opaque id plus its intrinsic pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: ImageId,
    pub intrinsic_width: i32,
    pub intrinsic_height: i32,
}

impl ImageHandle {
    pub fn new(id: ImageId, intrinsic_width: i32, intrinsic_height: i32) -> Self {
        Self {
            id,
            intrinsic_width,
            intrinsic_height,
        }
    }
}

/// Vertical font metrics relative to the baseline.
///
/// `ascent` is negative (above the baseline), `descent` is positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

/// Text measurement and shaping.
pub trait TextBackend {
    /// Width of `text` laid out on a single line.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32;

    /// Ascent/descent of the font selected by `style`.
    fn text_metrics(&self, style: &TextStyle) -> FontMetrics;

    /// Shortens `text` from the start so that it fits into `max_width`.
    ///
    /// The default implementation prepends a single ellipsis glyph,
    /// measuring candidates with [`TextBackend::measure_text`].
    fn ellipsize(&self, text: &str, style: &TextStyle, max_width: f32) -> String {
        crate::rendering::text_utils::ellipsize_start(text, max_width, |s| self.measure_text(s, style))
    }
}

/// A paint target for one frame.
pub trait Surface: TextBackend {
    /// Paints `image` stretched over `rect` (track coordinates).
    fn paint_image(&mut self, image: &ImageHandle, rect: IntRect);

    /// Paints `text` with its baseline starting at (`x`, `y`).
    fn paint_text(&mut self, text: &str, style: &TextStyle, x: f32, y: f32);
}

/// Cooperative frame scheduling.
pub trait Invalidator {
    /// Ask for another draw pass on the next frame.
    fn request_redraw(&self);

    /// Ask for a measure pass followed by a draw pass.
    fn request_layout(&self);
}

/// The enclosing container that may steal pointer gestures (e.g. a scroller).
pub trait PointerParent {
    /// `true` while a drag is active: the parent must not intercept.
    fn request_disallow_intercept(&self, disallow: bool);
}

/// Resolves resource identifiers to image handles.
pub trait ImageLoader {
    fn load(&self, resource: &str) -> Option<ImageHandle>;
}

/// Callback invoked once per gesture when the thumb reaches the threshold.
pub trait UnlockListener {
    fn on_unlock(&self);
}

impl<F: Fn()> UnlockListener for F {
    fn on_unlock(&self) {
        self()
    }
}
