//! Layout calculations for one frame.
//!
//! This module provides pure functions for:
//! - Placing the thumb for a drag offset
//! - Anchoring the caption according to its gravity
//! - Pushing the caption along once the thumb reaches it
//! - Deriving the width left for the (possibly ellipsized) caption
//!
//! These functions are stateless and can be tested independently.

use crate::config::TextGravity;
use crate::geometry::{Geometry, IntRect};

/// Caption anchors computed with the thumb at rest.
///
/// The control keeps these cached (as `Option<TextAnchors>`, `None` meaning
/// unset) and drops them whenever geometry or caption properties change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAnchors {
    pub start_x: i32,
    pub end_x: i32,
}

/// Everything the painter needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub thumb: IntRect,
    pub text_start_x: i32,
    pub text_end_x: i32,
    /// Width the caption may occupy; may be negative when fully covered.
    pub available_width: i32,
}

/// Caption start for a thumb at rest.
///
/// # Arguments
/// * `geometry` - Track and thumb sizes
/// * `text_width` - Measured width of the full caption
/// * `text_padding` - Gap right of the thumb for [`TextGravity::None`]
/// * `gravity` - Caption anchoring mode
pub fn base_start_anchor(
    geometry: &Geometry,
    text_width: i32,
    text_padding: i32,
    gravity: TextGravity,
) -> i32 {
    match gravity {
        TextGravity::None => geometry
            .thumb_w()
            .saturating_add(geometry.thumb_padding)
            .saturating_add(text_padding),
        TextGravity::CenterInParent => (geometry.track_width / 2).saturating_sub(text_width / 2),
        TextGravity::CenterOfThumb => {
            let center = (geometry.track_width as i64 + geometry.thumb_w() as i64) / 2;
            (center as i32).saturating_sub(text_width / 2)
        }
    }
}

/// Anchors for a thumb at rest.
pub fn compute_anchors(
    geometry: &Geometry,
    text_width: i32,
    text_padding: i32,
    gravity: TextGravity,
) -> TextAnchors {
    let start_x = base_start_anchor(geometry, text_width, text_padding, gravity);
    TextAnchors {
        start_x,
        end_x: start_x.saturating_add(text_width),
    }
}

/// Caption start once the thumb has moved to `drag_x`.
///
/// The caption stays at `base_start` until the thumb's midpoint passes it,
/// then travels with the thumb.
pub fn adjusted_start(base_start: i32, drag_x: i32, thumb_w: i32) -> i32 {
    // base + (drag - base) + half collapses to drag + half.
    let pushed = drag_x.saturating_add(thumb_w / 2);
    if base_start < pushed {
        pushed
    } else {
        base_start
    }
}

/// Full layout for the current drag offset.
pub fn frame_layout(geometry: &Geometry, anchors: TextAnchors, text_width: i32, drag_x: i32) -> FrameLayout {
    let thumb_w = geometry.thumb_w();
    let text_start_x = adjusted_start(anchors.start_x, drag_x, thumb_w);
    let text_end_x = text_start_x.saturating_add(text_width);

    FrameLayout {
        thumb: geometry.thumb_rect(drag_x),
        text_start_x,
        text_end_x,
        available_width: text_end_x.saturating_sub(drag_x).saturating_sub(thumb_w / 3),
    }
}
