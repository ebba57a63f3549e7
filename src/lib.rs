#![no_std]

//! HSI color math for RGB and RGBW LED fixtures.
//!
//! ```
//! use myrtio_hsi_color::{ColorEngine, Hsi, pwm::rgbw_to_pwm};
//!
//! let engine = ColorEngine::default();
//! let rgbw = engine.hsi_to_rgbw(Hsi::new(0.5, 0.5, 0.5));
//! let duty = rgbw_to_pwm(rgbw, 255);
//! assert!(duty.w > 0);
//! ```

pub mod brightness;
pub mod color;
pub mod convert;
pub mod engine;
pub mod pwm;
pub mod transition;

pub use brightness::{global_brightness, hsi_to_rgb, hsi_to_rgbw, set_global_brightness};
pub use color::{
    Hsi, HueDirection, Rgb, Rgbw, blend_hsi, hue_distance, hue_distance_directed, interp_hsi,
    interp_hsi_directed, interp_hsi_forward, wrap_hue,
};
pub use convert::{Correction, DEFAULT_GAMMA, RgbCorrection, RgbwCorrection};
pub use embassy_time::{Duration, Instant};
pub use engine::{ColorEngine, ColorEngineConfig};
pub use pwm::{RgbPwm, RgbwPwm};
pub use transition::ValueTransition;

/// Abstract PWM output trait
///
/// Implement this trait to drive a hardware PWM peripheral.
/// `Duty` is [`RgbPwm`] for RGB fixtures and [`RgbwPwm`] for RGBW fixtures.
pub trait PwmOutput {
    type Duty;

    /// Duty cycle that corresponds to a fully lit channel
    fn max_duty(&self) -> u32;

    /// Write duty cycles to the peripheral
    fn write(&mut self, duty: Self::Duty);
}
