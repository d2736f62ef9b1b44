//! Rainbow mode
//!
//! Continuous hue cycle, independent of input. The three LEDs start offset
//! by 20 hue steps and keep that spacing forever.

use super::Mode;
use crate::color::Hsv;
use crate::modifier::ModifierState;

const BASE_HUES: [u8; 3] = [0, 20, 40];

#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowMode;

impl RainbowMode {
    pub const fn new() -> Self {
        Self
    }
}

impl Mode for RainbowMode {
    fn init(&mut self, leds: &mut [Hsv]) {
        for (led, hue) in leds.iter_mut().zip(BASE_HUES) {
            *led = Hsv {
                hue,
                sat: 255,
                val: 255,
            };
        }
    }

    fn update(&mut self, leds: &mut [Hsv], _mods: &ModifierState) {
        for led in leds {
            *led = Hsv {
                hue: led.hue.wrapping_add(1),
                sat: 255,
                val: 255,
            };
        }
    }
}
