//! State management for the slide control.
//!
//! This module contains state-only logic (no painting):
//! - Interaction state (press, drag, threshold, retract)
//! - Unlock listener registration

mod interaction;
mod listener;

pub use interaction::{
    reaches_threshold, Effects, InteractionPhase, InteractionState, PointerEvent, PointerKind,
};
pub use listener::ListenerSlot;
