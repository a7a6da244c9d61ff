use crate::core::trajectory::TrajectorySample;

/// Space left above the highest point of the plotted flight.
pub const Y_AXIS_HEADROOM_M: f64 = 0.5;

const MIN_X_SPAN_M: f64 = 1.0;

/// Data window for a trajectory chart. Both axes start at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisLimits {
    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Axis window that fits the whole flight and the launch height.
///
/// The y axis runs from 0 to `max(reference, highest sample) + headroom`.
/// Degenerate input (no samples, zero range, non-finite values) still yields
/// a drawable window.
pub fn axis_limits(
    samples: &[TrajectorySample],
    reference_height_m: f64,
    headroom_m: f64,
) -> AxisLimits {
    let raw_max_x = samples
        .iter()
        .map(|s| s.x_m)
        .filter(|x| x.is_finite())
        .fold(0.0f64, f64::max);
    let raw_max_y = samples
        .iter()
        .map(|s| s.y_m)
        .filter(|y| y.is_finite())
        .fold(reference_height_m, f64::max);

    let x_max = if raw_max_x > 0.0 {
        raw_max_x
    } else {
        MIN_X_SPAN_M
    };
    let y_max = if raw_max_y.is_finite() {
        (raw_max_y + headroom_m).max(headroom_m)
    } else {
        headroom_m
    };

    AxisLimits {
        x_min: 0.0,
        x_max,
        y_min: 0.0,
        y_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time_s: f64, x_m: f64, y_m: f64) -> TrajectorySample {
        TrajectorySample { time_s, x_m, y_m }
    }

    #[test]
    fn y_axis_gets_half_a_metre_of_headroom() {
        let samples = [sample(0.0, 0.0, 2.0), sample(0.4, 30.0, 1.0)];

        let limits = axis_limits(&samples, 2.0, Y_AXIS_HEADROOM_M);

        assert_eq!(limits.y_min, 0.0);
        assert_eq!(limits.y_max, 2.5);
        assert_eq!(limits.x_min, 0.0);
        assert_eq!(limits.x_max, 30.0);
    }

    #[test]
    fn reference_height_wins_when_above_every_sample() {
        let samples = [sample(0.0, 0.0, 1.0), sample(0.1, 3.0, 0.5)];

        let limits = axis_limits(&samples, 4.0, Y_AXIS_HEADROOM_M);

        assert_eq!(limits.y_max, 4.5);
    }

    #[test]
    fn empty_sequence_still_has_a_window() {
        let limits = axis_limits(&[], 0.0, Y_AXIS_HEADROOM_M);

        assert_eq!(limits.x_max, 1.0);
        assert_eq!(limits.y_max, 0.5);
        assert!(limits.x_span() > 0.0 && limits.y_span() > 0.0);
    }

    #[test]
    fn flight_below_ground_keeps_a_positive_window() {
        let samples = [sample(0.0, 0.0, -1.0), sample(0.2, 4.0, -1.2)];

        let limits = axis_limits(&samples, -1.0, Y_AXIS_HEADROOM_M);

        assert_eq!(limits.y_min, 0.0);
        assert_eq!(limits.y_max, Y_AXIS_HEADROOM_M);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let samples = [sample(0.0, f64::NAN, 1.0), sample(0.1, f64::INFINITY, 0.5)];

        let limits = axis_limits(&samples, 1.0, Y_AXIS_HEADROOM_M);

        assert_eq!(limits.x_max, 1.0);
        assert_eq!(limits.y_max, 1.5);
    }
}
