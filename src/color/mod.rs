mod hue;
mod mix;

pub use hue::{HueDirection, hue_distance, hue_distance_directed, wrap_hue};
pub(crate) use mix::lerp;
pub use mix::{blend_hsi, interp_hsi, interp_hsi_directed, interp_hsi_forward};

/// HSI color. Every component is nominally in `0.0..=1.0`.
///
/// Hue is a position on a circle: `0.0` and `1.0` are the same hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsi {
    /// Hue
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Intensity
    pub i: f32,
}

impl Hsi {
    /// Color with zero intensity
    pub const OFF: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(h: f32, s: f32, i: f32) -> Self {
        Self { h, s, i }
    }

    /// Returns the color with every component clamped to `0.0..=1.0`
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            h: self.h.clamp(0.0, 1.0),
            s: self.s.clamp(0.0, 1.0),
            i: self.i.clamp(0.0, 1.0),
        }
    }

    /// Whether the color emits no light
    pub fn is_off(self) -> bool {
        self.i == 0.0
    }
}

/// Linear RGB color, channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Linear RGBW color, channels in `0.0..=1.0`
///
/// `w` drives a dedicated white LED and carries the desaturated part of the color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgbw {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub w: f32,
}

impl Rgbw {
    pub const fn new(r: f32, g: f32, b: f32, w: f32) -> Self {
        Self { r, g, b, w }
    }
}
