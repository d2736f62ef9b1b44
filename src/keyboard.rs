//! Hook glue
//!
//! The entry points the host framework calls: matrix init, the per-key
//! hook and the periodic housekeeping hook. Key dispatch recognizes the
//! board's custom keycodes, tracks the modifier flags the animations
//! observe, and forwards everything else to the active mode.

use crate::engine::StatusLedEngine;
use crate::keycode::{Keycode, Layer};
use crate::{LayerControl, SettingsStore};

/// The Uniform keyboard module
///
/// Owns the status LED engine and the settings store handle. One instance
/// is created at matrix init and lives for the whole session.
pub struct Uniform<S: SettingsStore> {
    engine: StatusLedEngine,
    store: S,
}

impl<S: SettingsStore> Uniform<S> {
    /// Matrix init: load persisted settings and start the selected mode
    ///
    /// The host configures the LED data pin and arms the first tick after
    /// [`crate::config::FIRST_TICK_DELAY`].
    pub fn init(store: S) -> Self {
        let engine = StatusLedEngine::load(&store);
        Self { engine, store }
    }

    /// Per-key hook, invoked on every physical key transition
    ///
    /// Returns true when the host should continue its own processing of
    /// the keycode, false when the key is fully handled here.
    pub fn process_record<L: LayerControl>(
        &mut self,
        keycode: Keycode,
        pressed: bool,
        layers: &mut L,
    ) -> bool {
        match keycode {
            Keycode::CapsLock => {
                self.engine.flip_caps_lock(pressed);
                false
            }

            Keycode::Fn1 => {
                if pressed {
                    layers.layer_on(Layer::Fn1);
                } else {
                    layers.layer_off(Layer::Fn1);
                }
                self.engine.set_fn1(pressed);
                false
            }

            Keycode::Fn2 => {
                if pressed {
                    layers.layer_on(Layer::Fn2);
                } else {
                    layers.layer_off(Layer::Fn2);
                }
                self.engine.set_fn2(pressed);
                false
            }

            Keycode::Fn3 => {
                if pressed {
                    layers.layer_on(Layer::Fn3);
                } else {
                    layers.layer_off(Layer::Fn3);
                }
                false
            }

            Keycode::Fn4 => {
                if pressed {
                    layers.layer_on(Layer::Fn4);
                } else {
                    layers.layer_off(Layer::Fn4);
                }
                false
            }

            Keycode::StatusModeNext => {
                if !pressed {
                    self.engine.next_mode(&mut self.store);
                }
                false
            }

            Keycode::StatusModePrev => {
                if !pressed {
                    self.engine.prev_mode(&mut self.store);
                }
                false
            }

            Keycode::StatusBrightnessUp => {
                if !pressed {
                    self.engine.brightness_up(&mut self.store);
                }
                false
            }

            Keycode::StatusBrightnessDown => {
                if !pressed {
                    self.engine.brightness_down(&mut self.store);
                }
                false
            }

            _ => {
                self.engine.key_event(keycode, pressed);
                true
            }
        }
    }

    /// Periodic housekeeping hook, reserved
    #[allow(clippy::unused_self)]
    pub fn housekeeping(&mut self) {}

    pub const fn engine(&self) -> &StatusLedEngine {
        &self.engine
    }

    pub const fn engine_mut(&mut self) -> &mut StatusLedEngine {
        &mut self.engine
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}
