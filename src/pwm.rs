//! Quantization of float colors to PWM duty cycles
//!
//! Channels are scaled by the maximum duty cycle and rounded to the nearest
//! integer, halves away from zero. Nothing is clamped: a channel above 1.0
//! yields a duty cycle above `max_pwm`. Negative channels saturate at 0.

use libm::roundf;
use smart_leds::{RGB8, RGBW, White};

use crate::color::{Rgb, Rgbw};

/// RGB duty cycles
///
/// A 16-bit timer counts up to 65536, which needs 17 bits, hence `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbPwm {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

/// RGBW duty cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbwPwm {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub w: u32,
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn quantize(value: f32, max_pwm: u32) -> u32 {
    roundf(value * max_pwm as f32) as u32
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn saturate8(value: u32) -> u8 {
    value.min(u32::from(u8::MAX)) as u8
}

/// Scale an RGB color to duty cycles
///
/// Duty cycles stay in `0..=max_pwm` only for channels in `0.0..=1.0`.
pub fn rgb_to_pwm(rgb: Rgb, max_pwm: u32) -> RgbPwm {
    RgbPwm {
        r: quantize(rgb.r, max_pwm),
        g: quantize(rgb.g, max_pwm),
        b: quantize(rgb.b, max_pwm),
    }
}

/// Scale an RGBW color to duty cycles
///
/// Duty cycles stay in `0..=max_pwm` only for channels in `0.0..=1.0`.
pub fn rgbw_to_pwm(rgbw: Rgbw, max_pwm: u32) -> RgbwPwm {
    RgbwPwm {
        r: quantize(rgbw.r, max_pwm),
        g: quantize(rgbw.g, max_pwm),
        b: quantize(rgbw.b, max_pwm),
        w: quantize(rgbw.w, max_pwm),
    }
}

impl RgbPwm {
    /// Pixel for 8-bit addressable LEDs. Channels above 255 saturate.
    pub fn to_rgb8(self) -> RGB8 {
        RGB8 {
            r: saturate8(self.r),
            g: saturate8(self.g),
            b: saturate8(self.b),
        }
    }
}

impl RgbwPwm {
    /// Pixel for 8-bit RGBW addressable LEDs. Channels above 255 saturate.
    pub fn to_rgbw8(self) -> RGBW<u8> {
        RGBW {
            r: saturate8(self.r),
            g: saturate8(self.g),
            b: saturate8(self.b),
            a: White(saturate8(self.w)),
        }
    }
}

impl Rgb {
    /// Quantize to an 8-bit pixel
    pub fn to_rgb8(self) -> RGB8 {
        rgb_to_pwm(self, u32::from(u8::MAX)).to_rgb8()
    }
}

impl Rgbw {
    /// Quantize to an 8-bit RGBW pixel
    pub fn to_rgbw8(self) -> RGBW<u8> {
        rgbw_to_pwm(self, u32::from(u8::MAX)).to_rgbw8()
    }
}
