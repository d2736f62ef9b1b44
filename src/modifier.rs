//! Observed modifier and layer state
//!
//! A small mirror of the transient key states the animations care about.
//! Written only by the key-event hooks, read by modes and post-processing.
//! Reset at startup, never persisted.

/// Modifier flags observed from key events
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierState {
    caps_lock: bool,
    fn1: bool,
    fn2: bool,
}

impl ModifierState {
    /// Toggle the caps lock flag on key release
    ///
    /// Press events are ignored; toggling on both edges would flip the flag
    /// twice per keystroke.
    pub const fn flip_caps_lock(&mut self, pressed: bool) {
        if !pressed {
            self.caps_lock = !self.caps_lock;
        }
    }

    /// Track the function layer 1 key (held = true)
    pub const fn set_fn1(&mut self, state: bool) {
        self.fn1 = state;
    }

    /// Track the function layer 2 (settings) key (held = true)
    pub const fn set_fn2(&mut self, state: bool) {
        self.fn2 = state;
    }

    pub const fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    pub const fn fn1(&self) -> bool {
        self.fn1
    }

    pub const fn fn2(&self) -> bool {
        self.fn2
    }
}
