use core::f32::consts::{FRAC_PI_2, PI};

use libm::sinf;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Sinusoidal blend between two 8-bit values
///
/// Maps `strength / max_strength` onto the half period [0, PI] and uses the
/// resulting sine ramp as the blend amount, giving an ease-in/ease-out curve
/// instead of a linear crossfade. Exact at both ends: strength 0 returns
/// `v1`, strength == `max_strength` returns `v2`.
///
/// `max_strength` must be non-zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin_blend(v1: u8, v2: u8, strength: u8, max_strength: u8) -> u8 {
    if strength == 0 {
        return v1;
    }
    if strength >= max_strength {
        return v2;
    }

    let t = f32::from(strength) / f32::from(max_strength);
    // sin over [-PI/2, PI/2], rescaled from [-1, 1] to [0, 1]
    let ramp = (sinf(t * PI - FRAC_PI_2) + 1.0) / 2.0;

    let blended = f32::from(v1) + (f32::from(v2) - f32::from(v1)) * ramp;
    blended.clamp(0.0, 255.0) as u8
}
