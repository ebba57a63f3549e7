#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PwmOutput;
use crate::color::{Hsi, Rgb, Rgbw};
use crate::convert::{RgbCorrection, RgbwCorrection, hsi_to_rgb_with, hsi_to_rgbw_with};
use crate::pwm::{RgbPwm, RgbwPwm, rgb_to_pwm, rgbw_to_pwm};

/// Configuration for the color engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEngineConfig {
    /// Initial brightness (0.0-1.0)
    pub brightness: f32,
    /// Output correction for RGB fixtures
    pub rgb: RgbCorrection,
    /// Output correction for RGBW fixtures
    pub rgbw: RgbwCorrection,
}

impl Default for ColorEngineConfig {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            rgb: RgbCorrection::default(),
            rgbw: RgbwCorrection::default(),
        }
    }
}

/// Color engine - converts HSI colors for one fixture
///
/// Owns its brightness and output correction, so several fixtures with
/// different LEDs can be driven side by side. Brightness scales intensity
/// in both the RGB and the RGBW path.
#[derive(Debug, Clone)]
pub struct ColorEngine {
    brightness: f32,
    rgb: RgbCorrection,
    rgbw: RgbwCorrection,
}

impl Default for ColorEngine {
    fn default() -> Self {
        Self::new(&ColorEngineConfig::default())
    }
}

impl ColorEngine {
    pub fn new(config: &ColorEngineConfig) -> Self {
        Self {
            brightness: config.brightness.clamp(0.0, 1.0),
            rgb: config.rgb,
            rgbw: config.rgbw,
        }
    }

    /// Current brightness
    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Set brightness, clamped to `0.0..=1.0`
    pub fn set_brightness(&mut self, brightness: f32) {
        let clamped = brightness.clamp(0.0, 1.0);
        #[cfg(feature = "esp32-log")]
        println!(
            "[ColorEngine.set_brightness] setting brightness to {:?} ({:?})",
            clamped, brightness
        );
        self.brightness = clamped;
    }

    pub const fn rgb_correction(&self) -> &RgbCorrection {
        &self.rgb
    }

    pub fn set_rgb_correction(&mut self, correction: RgbCorrection) {
        self.rgb = correction;
    }

    pub const fn rgbw_correction(&self) -> &RgbwCorrection {
        &self.rgbw
    }

    pub fn set_rgbw_correction(&mut self, correction: RgbwCorrection) {
        self.rgbw = correction;
    }

    /// Convert to RGB using the engine brightness and RGB correction
    #[inline]
    pub fn hsi_to_rgb(&self, hsi: Hsi) -> Rgb {
        hsi_to_rgb_with(hsi, self.brightness, &self.rgb)
    }

    /// Convert to RGBW using the engine brightness and RGBW correction
    #[inline]
    pub fn hsi_to_rgbw(&self, hsi: Hsi) -> Rgbw {
        hsi_to_rgbw_with(hsi, self.brightness, &self.rgbw)
    }

    /// Convert and write to an RGB output at its full duty-cycle resolution
    pub fn write_rgb<O: PwmOutput<Duty = RgbPwm>>(&self, hsi: Hsi, output: &mut O) {
        let duty = rgb_to_pwm(self.hsi_to_rgb(hsi), output.max_duty());
        output.write(duty);
    }

    /// Convert and write to an RGBW output at its full duty-cycle resolution
    pub fn write_rgbw<O: PwmOutput<Duty = RgbwPwm>>(&self, hsi: Hsi, output: &mut O) {
        let duty = rgbw_to_pwm(self.hsi_to_rgbw(hsi), output.max_duty());
        output.write(duty);
    }
}
