//! Conversions from the raw 16-bit temperature code.
//!
//! In 16-bit mode the register holds a two's-complement value with 7
//! fractional bits, so one LSB is 1/128 °C.

const LSB_PER_DEGREE_C: f32 = 128.0;

/// 1/128 * 9/5, folded into a single factor.
const FAHRENHEIT_PER_LSB: f32 = 0.0140625;

pub fn celsius_from_raw(raw: u16) -> f32 {
    f32::from(raw as i16) / LSB_PER_DEGREE_C
}

pub fn fahrenheit_from_raw(raw: u16) -> f32 {
    f32::from(raw as i16) * FAHRENHEIT_PER_LSB + 32.0
}
