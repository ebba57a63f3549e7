//! HSI to RGB / RGBW conversion
//!
//! Both conversions split the hue circle into three 120° sectors. Inside a
//! sector one channel dominates and is computed in closed form from
//! `cos(θ) / cos(60° - θ)`; the neighbouring channel takes the rest and the
//! third one is off (RGBW) or carries the desaturated share (RGB).
//!
//! After the linear conversion every channel goes through gamma correction
//! and a per-channel scale factor that compensates for LEDs of different
//! perceived brightness.

use core::f32::consts::{FRAC_PI_3, TAU};

use libm::{cosf, powf};

use crate::color::{Hsi, Rgb, Rgbw};

/// Gamma applied when none is configured
pub const DEFAULT_GAMMA: f32 = 1.01;

const RAD_120: f32 = 2.0 * FRAC_PI_3;
const RAD_240: f32 = 4.0 * FRAC_PI_3;

/// Output correction for an `N`-channel color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction<const N: usize> {
    /// Exponent every channel is raised to
    pub gamma: f32,
    /// Per-channel multipliers, in channel order
    pub scale: [f32; N],
}

pub type RgbCorrection = Correction<3>;
pub type RgbwCorrection = Correction<4>;

impl<const N: usize> Default for Correction<N> {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            scale: [1.0; N],
        }
    }
}

impl<const N: usize> Correction<N> {
    /// Set the gamma exponent
    #[must_use]
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the per-channel scale factors
    #[must_use]
    pub fn with_scale(mut self, scale: [f32; N]) -> Self {
        self.scale = scale;
        self
    }

    /// Apply gamma and scale to the channels in place
    fn apply(&self, channels: &mut [f32; N]) {
        for (channel, scale) in channels.iter_mut().zip(self.scale) {
            *channel = powf(*channel, self.gamma) * scale;
        }
    }
}

/// Hue sector: index of the dominant channel and the angle inside the sector
#[inline]
fn sector(h: f32) -> (usize, f32) {
    let angle = h * TAU;
    if angle < RAD_120 {
        (0, angle)
    } else if angle < RAD_240 {
        (1, angle - RAD_120)
    } else {
        (2, angle - RAD_240)
    }
}

/// `cos(θ) / cos(60° - θ)`, in `-1.0..=2.0` for `θ` in `0..120°`
#[inline]
fn hue_ratio(angle: f32) -> f32 {
    cosf(angle) / cosf(FRAC_PI_3 - angle)
}

/// Convert HSI to RGBW
///
/// `brightness` scales intensity before conversion. Saturated light goes to
/// the color channels, the desaturated share goes to white.
pub fn hsi_to_rgbw_with(hsi: Hsi, brightness: f32, correction: &RgbwCorrection) -> Rgbw {
    let hsi = hsi.clamped();
    let intensity = hsi.i * brightness.clamp(0.0, 1.0);

    // Fully saturated color at full intensity
    let (dominant, angle) = sector(hsi.h);
    let primary = ((1.0 + hue_ratio(angle)) / 3.0).clamp(0.0, 1.0);
    let secondary = (1.0 - primary).max(0.0);

    let mut rgb = [0.0; 3];
    rgb[dominant] = primary;
    rgb[(dominant + 1) % 3] = secondary;

    let scale_si = hsi.s * intensity;
    let mut channels = [
        rgb[0] * scale_si,
        rgb[1] * scale_si,
        rgb[2] * scale_si,
        (1.0 - hsi.s) * intensity,
    ];
    correction.apply(&mut channels);

    let [r, g, b, w] = channels;
    Rgbw { r, g, b, w }
}

/// Convert HSI to RGB
///
/// `brightness` scales intensity before conversion. Saturation is part of
/// the sector formula, so white is produced by mixing all three channels.
pub fn hsi_to_rgb_with(hsi: Hsi, brightness: f32, correction: &RgbCorrection) -> Rgb {
    let hsi = hsi.clamped();
    let intensity = hsi.i * brightness.clamp(0.0, 1.0);

    let (dominant, angle) = sector(hsi.h);
    let primary = (1.0 + hsi.s * hue_ratio(angle)) / 3.0;
    let desaturated = (1.0 - hsi.s) / 3.0;
    let secondary = 1.0 - (primary + desaturated);

    let mut rgb = [0.0; 3];
    rgb[dominant] = primary;
    rgb[(dominant + 1) % 3] = secondary;
    rgb[(dominant + 2) % 3] = desaturated;

    // Round-off near sector edges must not reach powf as a negative value
    for channel in &mut rgb {
        *channel = channel.clamp(0.0, 1.0) * intensity;
    }
    correction.apply(&mut rgb);

    let [r, g, b] = rgb;
    Rgb { r, g, b }
}
