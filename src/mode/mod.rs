//! Status LED animation modes
//!
//! All modes are stored in an enum to avoid heap allocations and function
//! pointers. Each mode implements the [`Mode`] trait; mode-local counters
//! live in the variant payloads.

mod imperial;
mod nightrider;
mod rainbow;
mod sorbet;

pub use imperial::ImperialMode;
pub use nightrider::NightriderMode;
pub use rainbow::RainbowMode;
pub use sorbet::SorbetMode;

use crate::color::Hsv;
use crate::keycode::Keycode;
use crate::modifier::ModifierState;

const MODE_NAME_SORBET: &str = "sorbet";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_NIGHTRIDER: &str = "nightrider";
const MODE_NAME_IMPERIAL: &str = "imperial";

const MODE_ID_SORBET: u8 = 0;
const MODE_ID_RAINBOW: u8 = 1;
const MODE_ID_NIGHTRIDER: u8 = 2;
const MODE_ID_IMPERIAL: u8 = 3;

/// Number of registered modes
pub const MODE_COUNT: usize = 4;

pub trait Mode {
    /// Establish the mode's starting visual state
    ///
    /// Invoked once every time the mode becomes active.
    fn init(&mut self, leds: &mut [Hsv]);

    /// Advance the animation by one tick
    fn update(&mut self, leds: &mut [Hsv], mods: &ModifierState);

    /// React to a raw key transition the keymap dispatch did not consume
    fn key_event(&mut self, _keycode: Keycode, _pressed: bool) {}
}

/// Mode slot - enum containing all possible modes
#[derive(Debug, Clone)]
pub enum ModeSlot {
    /// Warm palette with a caps lock trace
    Sorbet(SorbetMode),
    /// Continuous hue cycle
    Rainbow(RainbowMode),
    /// Red scanner on the value channel
    Nightrider(NightriderMode),
    /// Typing-driven march
    Imperial(ImperialMode),
}

/// Known mode ids that can be selected and persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Sorbet = MODE_ID_SORBET,
    Rainbow = MODE_ID_RAINBOW,
    Nightrider = MODE_ID_NIGHTRIDER,
    Imperial = MODE_ID_IMPERIAL,
}

impl Default for ModeSlot {
    fn default() -> Self {
        Self::Sorbet(SorbetMode::new())
    }
}

impl ModeId {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_SORBET => Self::Sorbet,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_NIGHTRIDER => Self::Nightrider,
            MODE_ID_IMPERIAL => Self::Imperial,
            _ => return None,
        })
    }

    /// Next mode in the registry, wrapping past the end
    pub const fn next(self) -> Self {
        match self {
            Self::Sorbet => Self::Rainbow,
            Self::Rainbow => Self::Nightrider,
            Self::Nightrider => Self::Imperial,
            Self::Imperial => Self::Sorbet,
        }
    }

    /// Previous mode in the registry, wrapping past the start
    pub const fn prev(self) -> Self {
        match self {
            Self::Sorbet => Self::Imperial,
            Self::Rainbow => Self::Sorbet,
            Self::Nightrider => Self::Rainbow,
            Self::Imperial => Self::Nightrider,
        }
    }

    /// Build a fresh slot for this mode
    pub const fn to_slot(self) -> ModeSlot {
        match self {
            Self::Sorbet => ModeSlot::Sorbet(SorbetMode::new()),
            Self::Rainbow => ModeSlot::Rainbow(RainbowMode::new()),
            Self::Nightrider => ModeSlot::Nightrider(NightriderMode::new()),
            Self::Imperial => ModeSlot::Imperial(ImperialMode::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sorbet => MODE_NAME_SORBET,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Nightrider => MODE_NAME_NIGHTRIDER,
            Self::Imperial => MODE_NAME_IMPERIAL,
        }
    }
}

impl ModeSlot {
    /// Establish the starting visual state of the active mode
    pub fn init(&mut self, leds: &mut [Hsv]) {
        match self {
            Self::Sorbet(mode) => mode.init(leds),
            Self::Rainbow(mode) => mode.init(leds),
            Self::Nightrider(mode) => mode.init(leds),
            Self::Imperial(mode) => mode.init(leds),
        }
    }

    /// Advance the active mode by one tick
    pub fn update(&mut self, leds: &mut [Hsv], mods: &ModifierState) {
        match self {
            Self::Sorbet(mode) => mode.update(leds, mods),
            Self::Rainbow(mode) => mode.update(leds, mods),
            Self::Nightrider(mode) => mode.update(leds, mods),
            Self::Imperial(mode) => mode.update(leds, mods),
        }
    }

    /// Forward a raw key transition to the active mode
    pub fn key_event(&mut self, keycode: Keycode, pressed: bool) {
        match self {
            Self::Sorbet(mode) => mode.key_event(keycode, pressed),
            Self::Rainbow(mode) => mode.key_event(keycode, pressed),
            Self::Nightrider(mode) => mode.key_event(keycode, pressed),
            Self::Imperial(mode) => mode.key_event(keycode, pressed),
        }
    }

    /// Get the mode ID for selection and persistence
    pub const fn id(&self) -> ModeId {
        match self {
            Self::Sorbet(_) => ModeId::Sorbet,
            Self::Rainbow(_) => ModeId::Rainbow,
            Self::Nightrider(_) => ModeId::Nightrider,
            Self::Imperial(_) => ModeId::Imperial,
        }
    }
}
