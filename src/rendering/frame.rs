//! Per-frame draw orchestration.
//!
//! Order of operations for one frame:
//! 1. Resolve the caption anchors if they were invalidated
//! 2. Paint the background over the whole track
//! 3. Place the thumb for the current drag offset
//! 4. Paint the (possibly ellipsized) caption
//! 5. Paint the thumb on top of the caption
//! 6. Run one retract step, which may ask for another frame

use crate::caption::Caption;
use crate::geometry::Geometry;
use crate::layout::{compute_anchors, frame_layout, FrameLayout, TextAnchors};
use crate::rendering::caption_renderer::{paint_caption, CaptionPlacement};
use crate::state::{Effects, InteractionState};
use crate::traits::{ImageHandle, Surface};

/// Mutable view of the control's state for one draw pass.
pub struct FrameContext<'a> {
    pub geometry: &'a Geometry,
    pub caption: &'a mut Caption,
    pub anchors: &'a mut Option<TextAnchors>,
    pub interaction: &'a mut InteractionState,
    pub background: Option<&'a ImageHandle>,
    pub thumb: Option<&'a ImageHandle>,
    pub reset_speed: i32,
    pub keep_leading_ellipsis: bool,
}

/// What happened during one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub layout: FrameLayout,
    pub caption: Option<CaptionPlacement>,
    /// Effects of the retract step that closed the frame.
    pub effects: Effects,
}

/// Draws one frame and advances the retract animation.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, frame: FrameContext<'_>) -> FrameReport {
    let geometry = frame.geometry;
    let text_width = frame.caption.measured_width(&*surface);
    let (padding, gravity) = (frame.caption.padding(), frame.caption.gravity());
    let anchors = *frame
        .anchors
        .get_or_insert_with(|| compute_anchors(geometry, text_width, padding, gravity));

    if let Some(background) = frame.background {
        surface.paint_image(background, geometry.track_rect());
    }

    let layout = frame_layout(geometry, anchors, text_width, frame.interaction.drag_x());

    let caption = paint_caption(surface, frame.caption, &layout, frame.keep_leading_ellipsis);

    if let Some(thumb) = frame.thumb {
        surface.paint_image(thumb, layout.thumb);
    }

    let effects = frame.interaction.tick(frame.reset_speed);

    FrameReport {
        layout,
        caption,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::TextStyle;
    use crate::config::TextGravity;
    use crate::geometry::IntRect;
    use crate::traits::{FontMetrics, TextBackend};

    #[derive(Debug, PartialEq)]
    enum Op {
        Image(u64, IntRect),
        Text(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl TextBackend for RecordingSurface {
        fn measure_text(&self, text: &str, _style: &TextStyle) -> f32 {
            text.chars().count() as f32 * 10.0
        }

        fn text_metrics(&self, _style: &TextStyle) -> FontMetrics {
            FontMetrics::default()
        }
    }

    impl Surface for RecordingSurface {
        fn paint_image(&mut self, image: &ImageHandle, rect: IntRect) {
            self.ops.push(Op::Image(image.id, rect));
        }

        fn paint_text(&mut self, text: &str, _style: &TextStyle, _x: f32, _y: f32) {
            self.ops.push(Op::Text(text.to_string()));
        }
    }

    fn geometry() -> Geometry {
        Geometry {
            track_width: 1000,
            track_height: 60,
            thumb_width: 200,
            thumb_height: 60,
            thumb_padding: 0,
        }
    }

    #[test]
    fn test_paint_order() {
        let g = geometry();
        let mut caption = Caption::new("unlock", TextStyle::default(), 0, TextGravity::None);
        let mut anchors = None;
        let mut interaction = InteractionState::new();
        let background = ImageHandle::new(1, 1000, 60);
        let thumb = ImageHandle::new(2, 200, 60);
        let mut surface = RecordingSurface::default();

        let report = draw_frame(
            &mut surface,
            FrameContext {
                geometry: &g,
                caption: &mut caption,
                anchors: &mut anchors,
                interaction: &mut interaction,
                background: Some(&background),
                thumb: Some(&thumb),
                reset_speed: 50,
                keep_leading_ellipsis: false,
            },
        );

        assert_eq!(
            surface.ops,
            vec![
                Op::Image(1, IntRect::new(0, 0, 1000, 60)),
                Op::Text("unlock".to_string()),
                Op::Image(2, IntRect::new(0, 0, 200, 60)),
            ]
        );
        assert_eq!(anchors, Some(TextAnchors { start_x: 200, end_x: 260 }));
        assert!(!report.effects.redraw);
    }

    #[test]
    fn test_missing_images_are_skipped() {
        let g = geometry();
        let mut caption = Caption::new("unlock", TextStyle::default(), 0, TextGravity::None);
        let mut anchors = None;
        let mut interaction = InteractionState::new();
        let mut surface = RecordingSurface::default();

        draw_frame(
            &mut surface,
            FrameContext {
                geometry: &g,
                caption: &mut caption,
                anchors: &mut anchors,
                interaction: &mut interaction,
                background: None,
                thumb: None,
                reset_speed: 50,
                keep_leading_ellipsis: false,
            },
        );

        assert_eq!(surface.ops, vec![Op::Text("unlock".to_string())]);
    }
}
