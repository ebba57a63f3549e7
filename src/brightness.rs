//! Process-wide brightness
//!
//! A single brightness level shared by every conversion that does not carry
//! its own (see [`crate::ColorEngine`] for the caller-owned alternative).
//! Access goes through a critical section, so reads never observe a
//! half-written value even when the level is updated from an interrupt.

use core::cell::Cell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Hsi, Rgb, Rgbw};
use crate::convert::{RgbCorrection, RgbwCorrection, hsi_to_rgb_with, hsi_to_rgbw_with};

static GLOBAL_BRIGHTNESS: Mutex<Cell<f32>> = Mutex::new(Cell::new(1.0));

/// Set the process-wide brightness, clamped to `0.0..=1.0`
pub fn set_global_brightness(brightness: f32) {
    let clamped = brightness.clamp(0.0, 1.0);
    #[cfg(feature = "esp32-log")]
    println!(
        "[set_global_brightness] setting brightness to {:?} ({:?})",
        clamped, brightness
    );
    critical_section::with(|cs| GLOBAL_BRIGHTNESS.borrow(cs).set(clamped));
}

/// Current process-wide brightness. Starts at full brightness.
pub fn global_brightness() -> f32 {
    critical_section::with(|cs| GLOBAL_BRIGHTNESS.borrow(cs).get())
}

/// Convert HSI to RGBW at the process-wide brightness
#[inline]
pub fn hsi_to_rgbw(hsi: Hsi, correction: &RgbwCorrection) -> Rgbw {
    hsi_to_rgbw_with(hsi, global_brightness(), correction)
}

/// Convert HSI to RGB at the process-wide brightness
#[inline]
pub fn hsi_to_rgb(hsi: Hsi, correction: &RgbCorrection) -> Rgb {
    hsi_to_rgb_with(hsi, global_brightness(), correction)
}
