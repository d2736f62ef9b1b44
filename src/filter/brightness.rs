//! Global brightness scaling
//!
//! The level is a percentage adjusted in fixed steps from the settings
//! layer and persisted across power cycles. Scaling only ever attenuates.

#[cfg(feature = "rtt-log")]
use rtt_target::rprintln;

use crate::settings::{BRIGHTNESS_MAX, BRIGHTNESS_STEP};

/// Brightness level and final value scaling
#[derive(Debug, Clone)]
pub(crate) struct BrightnessFilter {
    /// Level 0-100, always a multiple of the step
    level: u8,
}

impl BrightnessFilter {
    pub(crate) const fn new(level: u8) -> Self {
        Self { level }
    }

    /// Raise the level by one step, clamped to the maximum
    pub(crate) fn up(&mut self) -> u8 {
        self.level = self.level.saturating_add(BRIGHTNESS_STEP).min(BRIGHTNESS_MAX);
        #[cfg(feature = "rtt-log")]
        rprintln!("[BrightnessFilter.up] level set to {}", self.level);
        self.level
    }

    /// Lower the level by one step, floored at zero
    pub(crate) fn down(&mut self) -> u8 {
        self.level = self.level.saturating_sub(BRIGHTNESS_STEP);
        #[cfg(feature = "rtt-log")]
        rprintln!("[BrightnessFilter.down] level set to {}", self.level);
        self.level
    }

    pub(crate) const fn level(&self) -> u8 {
        self.level
    }

    /// Scale a value channel by the level
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn apply(&self, val: u8) -> u8 {
        ((val as u16 * self.level as u16) / BRIGHTNESS_MAX as u16) as u8
    }
}
