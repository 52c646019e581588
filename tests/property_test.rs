//! Property-based invariant tests for the slide control.
//!
//! These tests verify invariants that must hold for any pointer history:
//!
//! 1. The drag offset stays within [0, max_drag] at every observable state.
//! 2. Unlock fires at most once per gesture.
//! 3. Unlock fires exactly when a move in the gesture reached the threshold.
//! 4. After release the thumb returns to 0 within ceil(d / speed) frames.
//! 5. A press outside the thumb neither starts a drag nor blocks the parent.
//! 6. The effective threshold is min(99, max(10, v)).
//! 7. The caption end anchor holds still until the thumb reaches it, then
//!    moves by exactly the drag delta.

use proptest::prelude::*;
use rslide::layout::{compute_anchors, frame_layout};
use rslide::state::reaches_threshold;
use rslide::{
    clamp_limit_progress, Effects, Geometry, ImageHandle, ImageLoader, InteractionState, Invalidator,
    PointerEvent, PointerKind, ResetSpeed, SlideConfig, TextGravity, UnlockListener, UnlockSlideView,
};
use std::cell::Cell;
use std::rc::Rc;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Step {
    Pointer(PointerEvent),
    Frame,
}

fn geometry_strategy() -> impl Strategy<Value = Geometry> {
    (0i32..=2000, 1i32..=200, 0i32..=400, 0i32..=200, 0i32..=30).prop_map(
        |(track_width, track_height, thumb_width, thumb_height, thumb_padding)| Geometry {
            track_width,
            track_height,
            thumb_width,
            thumb_height,
            thumb_padding,
        },
    )
}

fn coord() -> impl Strategy<Value = f32> {
    -500.0f32..3000.0
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => (coord(), coord()).prop_map(|(x, y)| Step::Pointer(PointerEvent::down(x, y))),
        4 => (coord(), coord()).prop_map(|(x, y)| Step::Pointer(PointerEvent::moved(x, y))),
        1 => (coord(), coord()).prop_map(|(x, y)| Step::Pointer(PointerEvent::up(x, y))),
        1 => Just(Step::Pointer(PointerEvent::cancel())),
        2 => Just(Step::Frame),
    ]
}

fn speed_strategy() -> impl Strategy<Value = ResetSpeed> {
    prop_oneof![Just(ResetSpeed::Slow), Just(ResetSpeed::Normal), Just(ResetSpeed::Fast)]
}

/// A well-formed gesture: a press on the thumb, some moves, then UP or CANCEL.
#[derive(Debug, Clone)]
struct Gesture {
    grab_dx: f32,
    moves: Vec<f32>,
    cancel: bool,
    frames_after: usize,
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    (
        0.05f32..0.95,
        proptest::collection::vec(-500.0f32..2500.0, 0..12),
        any::<bool>(),
        0usize..30,
    )
        .prop_map(|(grab_dx, moves, cancel, frames_after)| Gesture {
            grab_dx,
            moves,
            cancel,
            frames_after,
        })
}

struct NoopInvalidator;

impl Invalidator for NoopInvalidator {
    fn request_redraw(&self) {}
    fn request_layout(&self) {}
}

struct NoImages;

impl ImageLoader for NoImages {
    fn load(&self, _resource: &str) -> Option<ImageHandle> {
        None
    }
}

#[derive(Default)]
struct Counter {
    calls: Cell<u32>,
}

impl UnlockListener for Counter {
    fn on_unlock(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// Thumb-only surface that measures nothing; only the retract step matters here.
struct NullSurface;

impl rslide::TextBackend for NullSurface {
    fn measure_text(&self, _text: &str, _style: &rslide::TextStyle) -> f32 {
        0.0
    }

    fn text_metrics(&self, _style: &rslide::TextStyle) -> rslide::FontMetrics {
        rslide::FontMetrics::default()
    }
}

impl rslide::Surface for NullSurface {
    fn paint_image(&mut self, _image: &ImageHandle, _rect: rslide::IntRect) {}
    fn paint_text(&mut self, _text: &str, _style: &rslide::TextStyle, _x: f32, _y: f32) {}
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Drag offset bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_offset_stays_on_track(
        geometry in geometry_strategy(),
        speed in speed_strategy(),
        limit in 10i32..=99,
        steps in proptest::collection::vec(step_strategy(), 0..80),
    ) {
        let mut state = InteractionState::new();
        for step in steps {
            match step {
                Step::Pointer(event) => { state.handle(event, &geometry, limit); }
                Step::Frame => { state.tick(speed.pixels_per_frame()); }
            }
            prop_assert!(state.drag_x() >= 0, "negative offset after {:?}", step);
            prop_assert!(
                state.drag_x() <= geometry.max_drag(),
                "offset {} beyond {} after {:?}", state.drag_x(), geometry.max_drag(), step
            );
            prop_assert!(!(state.is_touching() && state.is_resetting()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 + 3. Unlock fires once, exactly when the threshold was reached
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unlock_matches_threshold_per_gesture(
        geometry in geometry_strategy(),
        limit in 10i32..=99,
        gestures in proptest::collection::vec(gesture_strategy(), 1..6),
    ) {
        let mut state = InteractionState::new();
        for gesture in gestures {
            let thumb = geometry.thumb_rect(state.drag_x());
            let x = thumb.left as f32 + gesture.grab_dx * thumb.width() as f32;
            let y = thumb.top as f32 + thumb.height() as f32 / 2.0;
            state.press(x, y, &geometry);
            if !state.is_touching() {
                // Degenerate thumb, or the press landed on a retracting thumb.
                state.release();
                continue;
            }

            let mut unlocks = 0;
            let mut reached = false;
            for mx in &gesture.moves {
                let effects = state.drag_to(*mx, &geometry, limit);
                unlocks += effects.unlock as u32;
                reached |= reaches_threshold(state.drag_x(), &geometry, limit);
            }

            prop_assert!(unlocks <= 1, "{} unlocks in one gesture", unlocks);
            prop_assert_eq!(unlocks == 1, reached);

            let end = if gesture.cancel { state.cancel() } else { state.release() };
            prop_assert!(!end.unlock);
            prop_assert!(!state.unlocked_this_gesture());

            for _ in 0..gesture.frames_after {
                state.tick(ResetSpeed::Normal.pixels_per_frame());
            }
        }
    }
}

proptest! {
    #[test]
    fn listener_sees_every_unlock(
        width in 200i32..=1500,
        limit in 10i32..=99,
        gestures in proptest::collection::vec(gesture_strategy(), 1..6),
    ) {
        let config = SlideConfig {
            background: None,
            thumb: None,
            thumb_width: Some(100),
            thumb_height: Some(50),
            limit_progress: limit,
            ..SlideConfig::default()
        };
        let mut view = UnlockSlideView::new(&config, &NoImages, Rc::new(NoopInvalidator));
        view.on_measure(width, 50);
        let counter = Rc::new(Counter::default());
        let listener: Rc<dyn UnlockListener> = counter.clone();
        view.set_on_unlock_listener(Some(&listener));

        let mut expected = 0;
        for gesture in gestures {
            // Let the previous gesture retract fully.
            while view.drag_offset() > 0 {
                view.on_draw(&mut NullSurface);
            }
            view.on_draw(&mut NullSurface);

            view.on_pointer_event(PointerEvent::down(1.0 + gesture.grab_dx * 98.0, 25.0));
            let mut reached = false;
            for mx in &gesture.moves {
                view.on_pointer_event(PointerEvent::moved(*mx, 25.0));
                reached |= reaches_threshold(view.drag_offset(), view.geometry(), view.limit_progress());
            }
            expected += reached as u32;
            view.on_pointer_event(PointerEvent::up(0.0, 0.0));
        }
        prop_assert_eq!(counter.calls.get(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Retraction converges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn retract_converges(
        geometry in geometry_strategy(),
        speed in speed_strategy(),
        target in 0.0f32..3000.0,
        cancel in any::<bool>(),
    ) {
        prop_assume!(!geometry.is_degenerate());
        let mut state = InteractionState::new();
        let thumb = geometry.thumb_rect(0);
        prop_assume!(thumb.height() > 0);
        let grab_x = thumb.left as f32 + thumb.width() as f32 / 2.0;
        state.press(grab_x, thumb.top as f32 + thumb.height() as f32 / 2.0, &geometry);
        prop_assert!(state.is_touching());

        state.drag_to(grab_x + target, &geometry, 95);
        let initial = state.drag_x();
        if cancel { state.cancel(); } else { state.release(); }

        let per_frame = speed.pixels_per_frame();
        let bound = (initial + per_frame - 1) / per_frame;
        let mut frames = 0;
        while state.drag_x() > 0 {
            let effects: Effects = state.tick(per_frame);
            prop_assert!(effects.redraw);
            frames += 1;
            prop_assert!(frames <= bound, "{} frames for {} px at {}", frames, initial, per_frame);
        }
        prop_assert_eq!(frames, bound);

        // Settled: one more frame clears the retract flag and asks for nothing.
        let settle = state.tick(per_frame);
        prop_assert!(!settle.redraw);
        prop_assert!(!state.is_resetting());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Presses outside the thumb
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn press_outside_thumb_does_not_drag(
        geometry in geometry_strategy(),
        x in coord(),
        y in coord(),
    ) {
        let rect = geometry.thumb_rect(0);
        prop_assume!(geometry.is_degenerate() || !rect.contains(x, y));

        let mut state = InteractionState::new();
        let effects = state.press(x, y, &geometry);
        prop_assert!(!state.is_touching());
        prop_assert_ne!(effects.disallow_intercept, Some(true));

        let moved = state.handle(PointerEvent { kind: PointerKind::Move, x: x + 500.0, y }, &geometry, 10);
        prop_assert!(!moved.unlock);
        prop_assert_eq!(state.drag_x(), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Threshold clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn limit_progress_is_clamped(value in any::<i32>()) {
        prop_assert_eq!(clamp_limit_progress(value), value.max(10).min(99));

        let mut view = UnlockSlideView::new(&SlideConfig::default(), &NoImages, Rc::new(NoopInvalidator));
        view.set_limit_progress(value);
        prop_assert_eq!(view.limit_progress(), value.max(10).min(99));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Caption anchor tracking
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn caption_end_follows_thumb(
        geometry in geometry_strategy(),
        text_width in 0i32..800,
        text_padding in 0i32..100,
        gravity in prop_oneof![
            Just(TextGravity::None),
            Just(TextGravity::CenterInParent),
            Just(TextGravity::CenterOfThumb),
        ],
        drag_a in 0i32..2000,
        drag_b in 0i32..2000,
    ) {
        let anchors = compute_anchors(&geometry, text_width, text_padding, gravity);
        let half_thumb = geometry.thumb_w() / 2;
        let (d1, d2) = (drag_a.min(drag_b), drag_a.max(drag_b));

        let l1 = frame_layout(&geometry, anchors, text_width, d1);
        let l2 = frame_layout(&geometry, anchors, text_width, d2);

        if anchors.start_x >= d2 + half_thumb {
            prop_assert_eq!(l1.text_end_x, anchors.end_x);
            prop_assert_eq!(l2.text_end_x, anchors.end_x);
        }
        if anchors.start_x < d1 + half_thumb {
            prop_assert_eq!(l2.text_end_x - l1.text_end_x, d2 - d1);
        }
        prop_assert_eq!(l1.text_end_x - l1.text_start_x, text_width);
    }
}
