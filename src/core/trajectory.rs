use std::iter::FusedIterator;

use crate::core::kinematics::{KinematicResult, LaunchParameters};

pub const DEFAULT_SAMPLE_COUNT: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Position of a horizontally launched dart `time_s` seconds after launch.
pub fn position_at_time(
    muzzle_velocity_mps: f64,
    launch_height_m: f64,
    gravity_mps2: f64,
    time_s: f64,
) -> (f64, f64) {
    let x = muzzle_velocity_mps * time_s;
    let y = launch_height_m - (0.5 * gravity_mps2 * time_s * time_s);
    (x, y)
}

/// Evenly spaced samples over `[0, time_of_flight]`, produced lazily.
///
/// The first sample is the launch point and, when there is more than one
/// sample, the last lands exactly on the time of flight. Inputs are not
/// validated: non-finite values come out as non-finite samples.
#[derive(Clone, Debug)]
pub struct TrajectorySampler {
    muzzle_velocity_mps: f64,
    vertical_reference_m: f64,
    time_of_flight_s: f64,
    gravity_mps2: f64,
    sample_count: usize,
    next_index: usize,
}

impl TrajectorySampler {
    pub fn new(
        muzzle_velocity_mps: f64,
        vertical_reference_m: f64,
        time_of_flight_s: f64,
        gravity_mps2: f64,
        sample_count: usize,
    ) -> Self {
        Self {
            muzzle_velocity_mps,
            vertical_reference_m,
            time_of_flight_s,
            gravity_mps2,
            sample_count,
            next_index: 0,
        }
    }

    fn time_at(&self, index: usize) -> f64 {
        if index == 0 {
            0.0
        } else if index + 1 == self.sample_count {
            self.time_of_flight_s
        } else {
            (index as f64 * self.time_of_flight_s) / (self.sample_count - 1) as f64
        }
    }
}

impl Iterator for TrajectorySampler {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.sample_count {
            return None;
        }
        let time_s = self.time_at(self.next_index);
        self.next_index += 1;

        let (x_m, y_m) = position_at_time(
            self.muzzle_velocity_mps,
            self.vertical_reference_m,
            self.gravity_mps2,
            time_s,
        );
        Some(TrajectorySample { time_s, x_m, y_m })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sample_count - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrajectorySampler {}

impl FusedIterator for TrajectorySampler {}

pub fn sample_path(
    muzzle_velocity_mps: f64,
    vertical_reference_m: f64,
    time_of_flight_s: f64,
    gravity_mps2: f64,
    sample_count: usize,
) -> TrajectorySampler {
    TrajectorySampler::new(
        muzzle_velocity_mps,
        vertical_reference_m,
        time_of_flight_s,
        gravity_mps2,
        sample_count,
    )
}

/// Samples the flight described by a solved result and the heights it came from.
pub fn sample(
    result: &KinematicResult,
    params: &LaunchParameters,
    sample_count: usize,
) -> Vec<TrajectorySample> {
    sample_path(
        result.muzzle_velocity_mps,
        params.heights.launch_height_m(),
        result.time_of_flight_s,
        result.gravity_mps2,
        sample_count,
    )
    .collect()
}

/// Highest point reached, or `None` for an empty sequence.
pub fn peak_height_m(samples: &[TrajectorySample]) -> Option<f64> {
    samples.iter().map(|s| s.y_m).reduce(f64::max)
}
