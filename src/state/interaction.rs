//! Pointer-driven drag state.
//!
//! This module encapsulates the interaction state machine of the slide:
//! pressing the thumb, dragging it along the track, crossing the unlock
//! threshold and retracting frame by frame after release.
//!
//! The state machine never calls out to the host. Every transition returns
//! an [`Effects`] value describing what the host should do (redraw, change
//! pointer interception, fire the unlock callback).

use crate::geometry::Geometry;

/// Kind of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self { kind: PointerKind::Down, x, y }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self { kind: PointerKind::Move, x, y }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self { kind: PointerKind::Up, x, y }
    }

    pub fn cancel() -> Self {
        Self { kind: PointerKind::Cancel, x: 0.0, y: 0.0 }
    }
}

/// Quiescent phases of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Dragging,
    Resetting,
}

/// Host-side consequences of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    /// The event was handled by the control.
    pub consumed: bool,
    /// Another frame is needed.
    pub redraw: bool,
    /// `Some(true)` to stop the parent from intercepting, `Some(false)` to allow it again.
    pub disallow_intercept: Option<bool>,
    /// The threshold was crossed for the first time in this gesture.
    pub unlock: bool,
}

/// Whether the thumb's trailing edge has reached the threshold.
///
/// Never true for a zero-width track.
pub fn reaches_threshold(drag_x: i32, geometry: &Geometry, limit_progress: i32) -> bool {
    if geometry.track_width <= 0 {
        return false;
    }
    let trailing_edge = drag_x as i64 + geometry.thumb_w() as i64 + geometry.thumb_padding as i64;
    trailing_edge >= geometry.track_width as i64 * limit_progress as i64 / 100
}

/// Drag bookkeeping.
///
/// Invariants: `0 <= drag_x <= geometry.max_drag()` after every transition,
/// and `touching` implies `!resetting`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    drag_x: i32,
    grab_x: i32,
    touching: bool,
    resetting: bool,
    unlocked_this_gesture: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Current offset of the thumb's left edge.
    pub fn drag_x(&self) -> i32 {
        self.drag_x
    }

    /// Pointer x at the press that started the current gesture.
    pub fn grab_x(&self) -> i32 {
        self.grab_x
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    pub fn unlocked_this_gesture(&self) -> bool {
        self.unlocked_this_gesture
    }

    pub fn phase(&self) -> InteractionPhase {
        if self.touching {
            InteractionPhase::Dragging
        } else if self.resetting {
            InteractionPhase::Resetting
        } else {
            InteractionPhase::Idle
        }
    }

    // ===== Transitions =====

    /// Dispatches a pointer event to the matching transition.
    pub fn handle(&mut self, event: PointerEvent, geometry: &Geometry, limit_progress: i32) -> Effects {
        match event.kind {
            PointerKind::Down => self.press(event.x, event.y, geometry),
            PointerKind::Move => self.drag_to(event.x, geometry, limit_progress),
            PointerKind::Up => self.release(),
            PointerKind::Cancel => self.cancel(),
        }
    }

    /// Starts a gesture if (`x`, `y`) lies on the thumb.
    pub fn press(&mut self, x: f32, y: f32, geometry: &Geometry) -> Effects {
        if self.resetting {
            log::trace!("press at ({}, {}) ignored while retracting", x, y);
            return Effects::default();
        }

        let on_thumb = !geometry.is_degenerate() && geometry.thumb_rect(self.drag_x).contains(x, y);
        if on_thumb {
            self.touching = true;
            self.grab_x = x as i32;
            log::debug!("drag started at x={} (offset {})", self.grab_x, self.drag_x);
        } else {
            self.touching = false;
        }

        Effects {
            consumed: true,
            disallow_intercept: Some(on_thumb),
            ..Effects::default()
        }
    }

    /// Moves the thumb with the pointer, clamped to the track.
    pub fn drag_to(&mut self, x: f32, geometry: &Geometry, limit_progress: i32) -> Effects {
        let mut effects = Effects {
            consumed: true,
            ..Effects::default()
        };
        if !self.touching {
            return effects;
        }

        // Wide enough for any pointer x, including saturated infinities.
        let x = x as i64;
        let grab_x = self.grab_x as i64;
        let max_drag = geometry.max_drag();
        let new_drag = if x < grab_x {
            0
        } else if x > max_drag as i64 + grab_x {
            max_drag
        } else {
            (x - grab_x) as i32
        };
        self.drag_x = new_drag.clamp(0, max_drag);

        if !self.unlocked_this_gesture && reaches_threshold(self.drag_x, geometry, limit_progress) {
            self.unlocked_this_gesture = true;
            effects.unlock = true;
        }

        effects.redraw = true;
        effects
    }

    /// Ends the gesture; the following frames retract the thumb.
    pub fn release(&mut self) -> Effects {
        if self.touching {
            log::debug!("drag released at offset {}", self.drag_x);
        }
        self.touching = false;
        self.unlocked_this_gesture = false;
        self.grab_x = 0;

        Effects {
            consumed: true,
            redraw: true,
            disallow_intercept: Some(false),
            unlock: false,
        }
    }

    /// Same as [`InteractionState::release`].
    pub fn cancel(&mut self) -> Effects {
        self.release()
    }

    /// Runs one retract step at the end of a frame.
    pub fn tick(&mut self, reset_speed: i32) -> Effects {
        if !self.touching && self.drag_x > 0 {
            self.resetting = true;
            self.drag_x = (self.drag_x - reset_speed).max(0);
            Effects {
                redraw: true,
                ..Effects::default()
            }
        } else {
            self.resetting = false;
            Effects::default()
        }
    }

    /// Re-establishes the drag bounds after the geometry changed.
    pub fn clamp_to(&mut self, geometry: &Geometry) {
        self.drag_x = self.drag_x.clamp(0, geometry.max_drag());
    }
}
