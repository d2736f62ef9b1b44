//! Status LED engine
//!
//! The single state object behind the status LEDs: current colors, the
//! active mode, the observed modifier flags and the post-processing
//! pipeline. Created once at matrix init, mutated only by the tick and
//! key-event entry points, torn down never.

use embassy_time::Duration;

#[cfg(feature = "rtt-log")]
use rtt_target::rprintln;

use crate::color::Hsv;
use crate::config::{STATUS_LED_COUNT, STATUS_LED_TICK};
use crate::filter::FilterProcessor;
use crate::keycode::Keycode;
use crate::mode::{ModeId, ModeSlot};
use crate::modifier::ModifierState;
use crate::settings;
use crate::{SettingsStore, StatusLedDriver};

pub struct StatusLedEngine {
    leds: [Hsv; STATUS_LED_COUNT],
    mode: ModeSlot,
    mods: ModifierState,
    filters: FilterProcessor,
}

impl StatusLedEngine {
    /// Build the engine from persisted settings
    ///
    /// Out-of-range stored values are coerced to defaults, the modifier
    /// flags reset, and the selected mode initialized.
    pub fn load<S: SettingsStore>(store: &S) -> Self {
        let stored = settings::load(store);
        let id = ModeId::from_raw(stored.mode).unwrap_or(ModeId::Sorbet);

        let mut engine = Self {
            leds: [Hsv {
                hue: 0,
                sat: 0,
                val: 0,
            }; STATUS_LED_COUNT],
            mode: id.to_slot(),
            mods: ModifierState::default(),
            filters: FilterProcessor::new(stored.brightness),
        };
        engine.mode.init(&mut engine.leds);

        #[cfg(feature = "rtt-log")]
        rprintln!(
            "[StatusLedEngine.load] mode {} brightness {}",
            id.as_str(),
            stored.brightness
        );

        engine
    }

    /// Advance the animation by one tick and submit every LED
    ///
    /// Runs the active mode's update, advances the filters, and hands each
    /// post-processed color to the driver. Returns the fixed interval until
    /// the next tick.
    pub fn tick<D: StatusLedDriver>(&mut self, driver: &mut D) -> Duration {
        self.mode.update(&mut self.leds, &self.mods);
        self.filters.tick(&self.mods);

        for (index, led) in self.leds.iter().enumerate() {
            driver.set_hsv_at(index, self.filters.apply(*led));
        }

        STATUS_LED_TICK
    }

    /// Switch to the next mode and persist the selection
    pub fn next_mode<S: SettingsStore>(&mut self, store: &mut S) {
        self.switch_mode(self.mode.id().next(), store);
    }

    /// Switch to the previous mode and persist the selection
    pub fn prev_mode<S: SettingsStore>(&mut self, store: &mut S) {
        self.switch_mode(self.mode.id().prev(), store);
    }

    fn switch_mode<S: SettingsStore>(&mut self, id: ModeId, store: &mut S) {
        self.mode = id.to_slot();
        // every mode transition re-establishes the starting visual state
        self.mode.init(&mut self.leds);
        settings::update_mode(store, id as u8);

        #[cfg(feature = "rtt-log")]
        rprintln!("[StatusLedEngine.switch_mode] {}", id.as_str());
    }

    /// Raise brightness one step and persist the new level
    pub fn brightness_up<S: SettingsStore>(&mut self, store: &mut S) {
        let level = self.filters.brightness_up();
        settings::update_brightness(store, level);
    }

    /// Lower brightness one step and persist the new level
    pub fn brightness_down<S: SettingsStore>(&mut self, store: &mut S) {
        let level = self.filters.brightness_down();
        settings::update_brightness(store, level);
    }

    /// Toggle the observed caps lock flag (release events only)
    pub const fn flip_caps_lock(&mut self, pressed: bool) {
        self.mods.flip_caps_lock(pressed);
    }

    /// Track the function layer 1 key
    pub const fn set_fn1(&mut self, state: bool) {
        self.mods.set_fn1(state);
    }

    /// Track the settings layer key
    pub const fn set_fn2(&mut self, state: bool) {
        self.mods.set_fn2(state);
    }

    /// Forward a raw key transition to the active mode
    pub fn key_event(&mut self, keycode: Keycode, pressed: bool) {
        self.mode.key_event(keycode, pressed);
    }

    /// Currently active mode
    pub const fn mode_id(&self) -> ModeId {
        self.mode.id()
    }

    /// Current brightness level (0-100)
    pub const fn brightness(&self) -> u8 {
        self.filters.brightness()
    }

    /// Snapshot of the observed modifier flags
    pub const fn modifiers(&self) -> ModifierState {
        self.mods
    }
}
