use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Hsi, interp_hsi, interp_hsi_forward, lerp};

/// Blends two values of type `T` using a progress value (0.0-1.0)
pub type ValueBlender<T> = fn(T, T, f32) -> T;

/// Fraction of `duration` covered by `elapsed`, in `0.0..=1.0`
///
/// A zero duration counts as complete.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.as_micros() == 0 || elapsed >= duration {
        return 1.0;
    }
    elapsed.as_micros() as f32 / duration.as_micros() as f32
}

/// A fade in flight
#[derive(Debug, Clone, Copy)]
struct Fade<T> {
    from: T,
    to: T,
    started: Instant,
    duration: Duration,
}

/// Value that fades towards a target over time
///
/// The blender decides the path: hue-aware for [`Hsi`], linear for `f32`.
#[derive(Debug, Clone)]
pub struct ValueTransition<T: Copy> {
    blend: ValueBlender<T>,
    value: T,
    fade: Option<Fade<T>>,
}

impl<T: Copy> ValueTransition<T> {
    pub const fn new(initial: T, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            value: initial,
            fade: None,
        }
    }

    /// Value as of the last tick
    pub const fn current(&self) -> T {
        self.value
    }

    /// Where the running fade ends, if one is running
    pub fn target(&self) -> Option<T> {
        self.fade.map(|fade| fade.to)
    }

    pub const fn is_transitioning(&self) -> bool {
        self.fade.is_some()
    }

    /// Fade from the current value to `value`
    ///
    /// Retargeting mid-fade starts from wherever the value is now. A zero
    /// duration jumps straight to `value`.
    pub fn set(&mut self, value: T, duration: Duration, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[ValueTransition.set] fading over {:?} ms",
            duration.as_millis()
        );
        if duration.as_micros() == 0 {
            self.value = value;
            self.fade = None;
            return;
        }
        self.fade = Some(Fade {
            from: self.value,
            to: value,
            started: now,
            duration,
        });
    }

    /// Advance the fade to `now`. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        let Some(fade) = self.fade else {
            return;
        };

        let t = progress(now.saturating_duration_since(fade.started), fade.duration);
        if t >= 1.0 {
            self.value = fade.to;
            self.fade = None;
        } else {
            self.value = (self.blend)(fade.from, fade.to, t);
        }
    }
}

impl ValueTransition<Hsi> {
    /// HSI transition taking the shortest way around the hue circle
    pub const fn new_hsi(initial: Hsi) -> Self {
        Self::new(initial, interp_hsi)
    }

    /// HSI transition that always rotates hue upwards
    pub const fn new_hsi_forward(initial: Hsi) -> Self {
        Self::new(initial, interp_hsi_forward)
    }
}

impl ValueTransition<f32> {
    /// Linear scalar transition, e.g. for brightness fades
    pub const fn new_f32(initial: f32) -> Self {
        Self::new(initial, lerp)
    }
}

