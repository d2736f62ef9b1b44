//! Sorbet mode
//!
//! Warm sorbet palette across the cluster. While caps lock is active a
//! white trace sweeps back and forth, washing out the saturation of
//! whichever LED it passes; releasing caps lock fades the trace back out
//! and returns the trace to its rest phase.

use libm::fabsf;

use super::Mode;
use crate::color::Hsv;
use crate::math8::sin_blend;
use crate::modifier::ModifierState;
use crate::transition::{Oscillator, TriggerFade};

/// Distance the light of the trace will reach
const TRACE_FALLOFF_SCALAR: f32 = 1.5;
/// Phase divisor for the trace oscillation (smaller value = faster)
const TRACE_SPEED: f32 = 35.0;
/// Tick count for the trace strength to fade in and out
const TRACE_FADE_TIME: u8 = 50;
/// Rest phase, within the oscillation period
const TRACE_REST_POS: u16 = 70;
/// LED positions relative to the center of the cluster
const LED_POSITIONS: [f32; 3] = [-0.5, 0.0, 0.5];

const BASE_COLORS: [Hsv; 3] = [
    Hsv {
        hue: 220,
        sat: 255,
        val: 255,
    },
    Hsv {
        hue: 15,
        sat: 255,
        val: 255,
    },
    Hsv {
        hue: 5,
        sat: 255,
        val: 255,
    },
];

#[derive(Debug, Clone)]
pub struct SorbetMode {
    trace: Oscillator,
    fade: TriggerFade,
}

impl SorbetMode {
    pub const fn new() -> Self {
        Self {
            trace: Oscillator::new(TRACE_SPEED, TRACE_REST_POS),
            fade: TriggerFade::new(TRACE_FADE_TIME),
        }
    }
}

impl Default for SorbetMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for SorbetMode {
    fn init(&mut self, leds: &mut [Hsv]) {
        self.trace.rest();
        for (led, base) in leds.iter_mut().zip(BASE_COLORS) {
            *led = base;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn update(&mut self, leds: &mut [Hsv], mods: &ModifierState) {
        let caps = mods.caps_lock();

        if !self.fade.active(caps) {
            for (led, base) in leds.iter_mut().zip(BASE_COLORS) {
                *led = base;
            }
            return;
        }

        self.trace.advance();
        let trace_pos = self.trace.value();
        if self.fade.drive(caps) {
            self.trace.rest();
        }

        for ((led, pos), base) in leds.iter_mut().zip(LED_POSITIONS).zip(BASE_COLORS) {
            let scaled_dist = TRACE_FALLOFF_SCALAR * fabsf(pos - trace_pos);
            let reach = (1.0 - scaled_dist).max(0.0);
            // saturation under the trace at full strength
            let traced_sat = 255 - (255.0 * reach) as u8;
            led.sat = sin_blend(base.sat, traced_sat, self.fade.strength(), self.fade.max());
        }
    }
}
