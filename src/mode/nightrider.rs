//! Nightrider mode
//!
//! Red scanner on the value channel. At rest the cluster idles as a dim red
//! glow; arming caps lock fades in a bright point that sweeps back and
//! forth, and disarming it fades the sweep back into the glow.

use libm::fabsf;

use super::Mode;
use crate::color::Hsv;
use crate::math8::sin_blend;
use crate::modifier::ModifierState;
use crate::transition::{Oscillator, TriggerFade};

/// Distance the scanner's light will reach
const TRACE_FALLOFF_SCALAR: f32 = 1.2;
/// Phase divisor for the sweep oscillation (smaller value = faster)
const TRACE_SPEED: f32 = 25.0;
/// Tick count for the sweep to fade in and out
const TRACE_FADE_TIME: u8 = 60;
/// Rest phase: the scanner parks at the center of the cluster
const TRACE_REST_POS: u16 = 0;
/// LED positions relative to the center of the cluster
const LED_POSITIONS: [f32; 3] = [-0.5, 0.0, 0.5];

const SCAN_HUE: u8 = 0;
/// Idle glow value
const REST_VAL: u8 = 30;

#[derive(Debug, Clone)]
pub struct NightriderMode {
    trace: Oscillator,
    fade: TriggerFade,
}

impl NightriderMode {
    pub const fn new() -> Self {
        Self {
            trace: Oscillator::new(TRACE_SPEED, TRACE_REST_POS),
            fade: TriggerFade::new(TRACE_FADE_TIME),
        }
    }
}

impl Default for NightriderMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for NightriderMode {
    fn init(&mut self, leds: &mut [Hsv]) {
        self.trace.rest();
        for led in leds {
            *led = Hsv {
                hue: SCAN_HUE,
                sat: 255,
                val: REST_VAL,
            };
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn update(&mut self, leds: &mut [Hsv], mods: &ModifierState) {
        let caps = mods.caps_lock();

        if !self.fade.active(caps) {
            for led in leds {
                *led = Hsv {
                    hue: SCAN_HUE,
                    sat: 255,
                    val: REST_VAL,
                };
            }
            return;
        }

        self.trace.advance();
        let trace_pos = self.trace.value();
        if self.fade.drive(caps) {
            self.trace.rest();
        }

        for (led, pos) in leds.iter_mut().zip(LED_POSITIONS) {
            let scaled_dist = TRACE_FALLOFF_SCALAR * fabsf(pos - trace_pos);
            let reach = (1.0 - scaled_dist).max(0.0);
            let traced_val = REST_VAL + (f32::from(255 - REST_VAL) * reach) as u8;
            led.val = sin_blend(REST_VAL, traced_val, self.fade.strength(), self.fade.max());
        }
    }
}
