//! Weak registration of the unlock callback.

use std::rc::{Rc, Weak};

use crate::traits::UnlockListener;

/// Holds at most one unlock listener without keeping it alive.
#[derive(Default)]
pub struct ListenerSlot {
    listener: Option<Weak<dyn UnlockListener>>,
}

impl ListenerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`, replacing any previous one. `None` clears.
    pub fn set(&mut self, listener: Option<&Rc<dyn UnlockListener>>) {
        self.listener = listener.map(Rc::downgrade);
    }

    pub fn clear(&mut self) {
        self.listener = None;
    }

    /// True when a listener is registered and still alive.
    pub fn is_alive(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Invokes the listener if it is still alive.
    ///
    /// Returns whether the callback ran.
    pub fn notify(&self) -> bool {
        match self.listener.as_ref().and_then(Weak::upgrade) {
            Some(listener) => {
                listener.on_unlock();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("registered", &self.listener.is_some())
            .field("alive", &self.is_alive())
            .finish()
    }
}
