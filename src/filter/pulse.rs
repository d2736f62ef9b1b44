//! Settings-layer pulse overlay
//!
//! While the settings layer key is held, every LED's value channel breathes
//! with a slow sinusoidal pulse; releasing the key fades the pulse back out
//! over the fade time and parks the oscillation at its rest phase.

use crate::math8::sin_blend;
use crate::transition::{Oscillator, TriggerFade};

/// Higher value = longer fade after the settings key is released
const PULSE_FADE_TIME: u8 = 100;
/// Phase divisor for the pulse oscillation (lower value = faster)
const PULSE_SPEED: f32 = 50.0;
/// Rest phase, within the oscillation period
const PULSE_REST_POS: u16 = 60;

#[derive(Debug, Clone)]
pub(crate) struct SettingsPulse {
    osc: Oscillator,
    fade: TriggerFade,
}

impl SettingsPulse {
    pub(crate) const fn new() -> Self {
        Self {
            osc: Oscillator::new(PULSE_SPEED, PULSE_REST_POS),
            fade: TriggerFade::new(PULSE_FADE_TIME),
        }
    }

    /// Advance the pulse by one tick
    pub(crate) fn tick(&mut self, settings_held: bool) {
        if !self.fade.active(settings_held) {
            return;
        }
        self.osc.advance();
        if self.fade.drive(settings_held) {
            self.osc.rest();
        }
    }

    /// Blend a value towards its pulsed counterpart by the fade strength
    ///
    /// At strength zero the value passes through untouched.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn apply(&self, val: u8) -> u8 {
        if self.fade.strength() == 0 {
            return val;
        }
        let pulsed = (f32::from(val) * ((self.osc.value() + 1.0) / 2.0)) as u8;
        sin_blend(val, pulsed, self.fade.strength(), self.fade.max())
    }
}
