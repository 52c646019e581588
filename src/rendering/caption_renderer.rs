//! Caption placement and painting.
//!
//! The caption is right-aligned to its end anchor and truncated from the
//! start as the thumb eats into the available width, so the tail of the text
//! stays visible longest.

use crate::caption::Caption;
use crate::layout::FrameLayout;
use crate::rendering::text_utils::strip_leading_ellipsis;
use crate::traits::{Surface, TextBackend};

/// Where and what to paint for the caption in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionPlacement {
    pub text: String,
    /// Left edge of the painted text.
    pub x: i32,
    /// Baseline, centered on the thumb.
    pub y: i32,
}

/// Computes the visible caption text and its baseline position.
///
/// # Arguments
/// * `backend` - Text backend used to ellipsize and measure
/// * `caption` - The caption to place
/// * `layout` - Layout of the current frame
/// * `keep_leading_ellipsis` - Keep the "…" the backend prepends on truncation
pub fn place_caption<B: TextBackend + ?Sized>(
    backend: &B,
    caption: &Caption,
    layout: &FrameLayout,
    keep_leading_ellipsis: bool,
) -> CaptionPlacement {
    let style = caption.style();
    let ellipsized = backend.ellipsize(caption.text(), style, layout.available_width as f32);
    let text = if keep_leading_ellipsis {
        ellipsized
    } else {
        strip_leading_ellipsis(ellipsized, caption.text())
    };

    let x = (layout.text_end_x as f32 - backend.measure_text(&text, style)) as i32;
    let metrics = backend.text_metrics(style);
    let y = (layout.thumb.center_y() as f32 - (metrics.descent + metrics.ascent) / 2.0) as i32;

    CaptionPlacement { text, x, y }
}

/// Paints the caption for the current frame.
///
/// Returns the placement that was painted, or `None` when nothing was
/// visible.
pub fn paint_caption<S: Surface + ?Sized>(
    surface: &mut S,
    caption: &Caption,
    layout: &FrameLayout,
    keep_leading_ellipsis: bool,
) -> Option<CaptionPlacement> {
    let placement = place_caption(&*surface, caption, layout, keep_leading_ellipsis);
    if placement.text.is_empty() {
        return None;
    }
    surface.paint_text(
        &placement.text,
        caption.style(),
        placement.x as f32,
        placement.y as f32,
    );
    Some(placement)
}
