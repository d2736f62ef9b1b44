#![no_std]

pub mod color;
pub mod config;
pub mod engine;
pub mod filter;
pub mod keyboard;
pub mod keycode;
pub mod keymap;
pub mod math8;
pub mod mode;
pub mod modifier;
pub mod scheduler;
pub mod settings;
pub mod shared;
pub mod transition;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
pub use engine::StatusLedEngine;
pub use keyboard::Uniform;
pub use keycode::{Keycode, Layer};
pub use math8::sin_blend;
pub use mode::{Mode, ModeId, ModeSlot};
pub use modifier::ModifierState;
pub use scheduler::{TickResult, TickScheduler};
pub use settings::LedSettings;
pub use shared::SharedCell;

/// Abstract status LED driver trait
///
/// Implement this trait to hand post-processed colors to the host's LED
/// backend. The engine calls it once per LED per tick.
pub trait StatusLedDriver {
    /// Write one LED's color
    fn set_hsv_at(&mut self, index: usize, color: Hsv);
}

/// Host-provided non-volatile word used for keyboard settings
///
/// The codec in [`settings`] packs the mode index and brightness into this
/// single word; writes must land in the same word reads come from.
pub trait SettingsStore {
    /// Read the persisted settings word
    fn read(&self) -> u32;

    /// Write the persisted settings word
    fn write(&mut self, word: u32);
}

/// Host layer-stack control
///
/// The host owns the layer engine; the keymap dispatch only toggles
/// momentary layers through this trait.
pub trait LayerControl {
    /// Activate a layer
    fn layer_on(&mut self, layer: Layer);

    /// Deactivate a layer
    fn layer_off(&mut self, layer: Layer);
}
