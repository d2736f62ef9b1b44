//! Imperial mode
//!
//! Ice-blue palette that marches with typing. Every key press queues a
//! slice of march phase; the trace advances only while phase is pending, so
//! sustained typing keeps the point moving and pauses freeze it in place.
//! Typing activity also drives a fade between the dim rest glow and the
//! lit sweep.

use libm::fabsf;

use super::Mode;
use crate::color::Hsv;
use crate::keycode::Keycode;
use crate::math8::sin_blend;
use crate::modifier::ModifierState;
use crate::transition::{Oscillator, TriggerFade};

/// Distance the light of the march point will reach
const TRACE_FALLOFF_SCALAR: f32 = 1.3;
/// Phase divisor for the march oscillation (smaller value = faster)
const TRACE_SPEED: f32 = 20.0;
/// Tick count for the march to fade in and out
const TRACE_FADE_TIME: u8 = 40;
/// Rest phase: the point parks at the center of the cluster
const TRACE_REST_POS: u16 = 0;
/// March phase queued per key press, in ticks
const MARCH_STEP: u16 = 12;
/// Bound on queued march phase
const MARCH_PENDING_MAX: u16 = 240;
/// LED positions relative to the center of the cluster
const LED_POSITIONS: [f32; 3] = [-0.5, 0.0, 0.5];

const MARCH_HUE: u8 = 160;
const MARCH_SAT: u8 = 140;
/// Idle glow value
const REST_VAL: u8 = 25;

#[derive(Debug, Clone)]
pub struct ImperialMode {
    trace: Oscillator,
    fade: TriggerFade,
    /// Cumulative phase target, stored as ticks left to march
    pending: u16,
}

impl ImperialMode {
    pub const fn new() -> Self {
        Self {
            trace: Oscillator::new(TRACE_SPEED, TRACE_REST_POS),
            fade: TriggerFade::new(TRACE_FADE_TIME),
            pending: 0,
        }
    }
}

impl Default for ImperialMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for ImperialMode {
    fn init(&mut self, leds: &mut [Hsv]) {
        self.trace.rest();
        self.pending = 0;
        for led in leds {
            *led = Hsv {
                hue: MARCH_HUE,
                sat: MARCH_SAT,
                val: REST_VAL,
            };
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn update(&mut self, leds: &mut [Hsv], _mods: &ModifierState) {
        let marching = self.pending > 0;

        if !self.fade.active(marching) {
            for led in leds {
                *led = Hsv {
                    hue: MARCH_HUE,
                    sat: MARCH_SAT,
                    val: REST_VAL,
                };
            }
            return;
        }

        if marching {
            self.trace.advance();
            self.pending -= 1;
        }
        let trace_pos = self.trace.value();
        if self.fade.drive(marching) {
            self.trace.rest();
        }

        for (led, pos) in leds.iter_mut().zip(LED_POSITIONS) {
            let scaled_dist = TRACE_FALLOFF_SCALAR * fabsf(pos - trace_pos);
            let reach = (1.0 - scaled_dist).max(0.0);
            let traced_val = REST_VAL + (f32::from(255 - REST_VAL) * reach) as u8;
            led.val = sin_blend(REST_VAL, traced_val, self.fade.strength(), self.fade.max());
        }
    }

    fn key_event(&mut self, _keycode: Keycode, pressed: bool) {
        if pressed {
            self.pending = (self.pending + MARCH_STEP).min(MARCH_PENDING_MAX);
        }
    }
}
