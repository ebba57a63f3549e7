/// Direction of travel around the hue circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueDirection {
    /// Ascending hue, wrapping from 1 to 0
    Forward,
    /// Descending hue, wrapping from 0 to 1
    Backward,
    /// Whichever way is shorter. A tie (exactly half a turn) goes backward.
    #[default]
    Shortest,
}

/// Signed distance from `start` to `end` along the shortest way around the hue circle
#[inline]
pub fn hue_distance(start: f32, end: f32) -> f32 {
    hue_distance_directed(start, end, HueDirection::Shortest)
}

/// Signed distance from `start` to `end` travelling in `direction`
///
/// The result is in `-1.0..=1.0`; adding it to `start` and passing the sum
/// through [`wrap_hue`] lands on `end`. Equal hues are always `0.0`.
pub fn hue_distance_directed(start: f32, end: f32, direction: HueDirection) -> f32 {
    let distance = end - start;
    if distance == 0.0 {
        return 0.0;
    }

    match direction {
        HueDirection::Shortest => {
            if distance >= 0.5 {
                distance - 1.0
            } else if distance < -0.5 {
                distance + 1.0
            } else {
                distance
            }
        }
        HueDirection::Forward if distance < 0.0 => distance + 1.0,
        HueDirection::Backward if distance > 0.0 => distance - 1.0,
        HueDirection::Forward | HueDirection::Backward => distance,
    }
}

/// Fold a hue that is at most one turn out of range back into `0.0..=1.0`
///
/// Not a general modulo: `-1.5` becomes `-0.5`.
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    }
}
