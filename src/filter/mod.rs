//! Post-processing pipeline
//!
//! Mode-independent transformations applied to every LED's rendered color
//! after the active mode's update, before hand-off to the driver. Hue and
//! saturation currently pass through unchanged and are kept as extension
//! points; the value channel gets the settings-layer pulse overlay followed
//! by the global brightness scalar.

mod brightness;
mod pulse;

use brightness::BrightnessFilter;
use pulse::SettingsPulse;

use crate::color::Hsv;
use crate::modifier::ModifierState;

/// Filter processor - applies post-processing to every LED each tick
///
/// State advances once per tick via [`FilterProcessor::tick`]; the per-LED
/// [`FilterProcessor::apply`] is pure.
#[derive(Debug, Clone)]
pub struct FilterProcessor {
    pulse: SettingsPulse,
    brightness: BrightnessFilter,
}

impl FilterProcessor {
    /// Create the pipeline with a starting brightness level (0-100)
    pub const fn new(brightness: u8) -> Self {
        Self {
            pulse: SettingsPulse::new(),
            brightness: BrightnessFilter::new(brightness),
        }
    }

    /// Advance filter state by one tick
    pub fn tick(&mut self, mods: &ModifierState) {
        self.pulse.tick(mods.fn2());
    }

    /// Post-process one LED color
    ///
    /// The output value never exceeds its pre-scaling magnitude.
    pub fn apply(&self, color: Hsv) -> Hsv {
        Hsv {
            hue: color.hue,
            sat: color.sat,
            val: self.brightness.apply(self.pulse.apply(color.val)),
        }
    }

    /// Raise brightness by one step, clamped to the maximum
    pub fn brightness_up(&mut self) -> u8 {
        self.brightness.up()
    }

    /// Lower brightness by one step, floored at zero
    pub fn brightness_down(&mut self) -> u8 {
        self.brightness.down()
    }

    /// Current brightness level (0-100)
    pub const fn brightness(&self) -> u8 {
        self.brightness.level()
    }
}
