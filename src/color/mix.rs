use super::{
    Hsi,
    hue::{HueDirection, hue_distance, hue_distance_directed, wrap_hue},
};

/// Below this intensity `color1` gives up its hue entirely in [`blend_hsi`]
const BLEND_MIN_INTENSITY: f32 = 0.001;

/// Floor of the total intensity used to weight saturation in [`blend_hsi`]
const BLEND_MIN_WEIGHT: f32 = 0.1;

/// Blend `color2` on top of `color1`
///
/// The intensity of `color2` is multiplied by `scale_i2` (at least 1), which
/// lets a signal color dominate a background far beyond the normal intensity
/// range. Hue moves from `color1` towards `color2` along the shortest way,
/// proportionally to the scaled intensity of `color2`. Intensities add up and
/// saturate at 1. Saturation is the intensity-weighted average.
pub fn blend_hsi(color1: Hsi, color2: Hsi, scale_i2: f32) -> Hsi {
    let color1 = color1.clamped();
    let color2 = color2.clamped();
    let i2 = color2.i * scale_i2.max(1.0);

    let ratio = if color1.i < BLEND_MIN_INTENSITY {
        1.0
    } else {
        i2 / (color1.i + i2)
    };

    Hsi {
        h: wrap_hue(color1.h + hue_distance(color1.h, color2.h) * ratio),
        s: (color1.i * color1.s + i2 * color2.s) / (color1.i + i2).max(BLEND_MIN_WEIGHT),
        i: (color1.i + i2).min(1.0),
    }
}

/// Color at fraction `ctrl` of the way from `color1` to `color2`, shortest hue path
#[inline]
pub fn interp_hsi(color1: Hsi, color2: Hsi, ctrl: f32) -> Hsi {
    interp_hsi_directed(color1, color2, ctrl, HueDirection::Shortest)
}

/// Color at fraction `ctrl` of the way from `color1` to `color2`, always rotating hue upwards
#[inline]
pub fn interp_hsi_forward(color1: Hsi, color2: Hsi, ctrl: f32) -> Hsi {
    interp_hsi_directed(color1, color2, ctrl, HueDirection::Forward)
}

/// Color at fraction `ctrl` of the way from `color1` to `color2`
///
/// A color that is off takes the hue and saturation of the other one, so a
/// fade from or to black only changes intensity.
pub fn interp_hsi_directed(
    color1: Hsi,
    color2: Hsi,
    ctrl: f32,
    direction: HueDirection,
) -> Hsi {
    let mut color1 = color1.clamped();
    let mut color2 = color2.clamped();
    let t = ctrl.clamp(0.0, 1.0);

    if color1.is_off() {
        color1.h = color2.h;
        color1.s = color2.s;
    } else if color2.is_off() {
        color2.h = color1.h;
        color2.s = color1.s;
    }

    // Wrapping round-off must not leave the end point a step off target
    let h = if t >= 1.0 {
        color2.h
    } else {
        wrap_hue(color1.h + hue_distance_directed(color1.h, color2.h, direction) * t)
    };
    Hsi {
        h,
        s: lerp(color1.s, color2.s, t),
        i: lerp(color1.i, color2.i, t),
    }
}

/// Exact at both `t == 0` and `t == 1`
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
