use nerf_velocity::core::kinematics::{KinematicResult, LaunchInputs, LaunchParameters};
use nerf_velocity::core::trajectory::TrajectorySample;
use nerf_velocity::core::window::AxisLimits;

/// Slider-backed form values. The window always uses explicit start and end
/// heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FormState {
    pub(crate) range_m: f32,
    pub(crate) spring_compression_m: f32,
    pub(crate) start_height_m: f32,
    pub(crate) end_height_m: f32,
    pub(crate) dart_mass_kg: f32,
    pub(crate) use_default_mass: bool,
}

impl FormState {
    pub(crate) fn new(default_dart_mass_kg: f64) -> Self {
        Self {
            range_m: 10.0,
            spring_compression_m: 0.05,
            start_height_m: 1.0,
            end_height_m: 0.0,
            dart_mass_kg: default_dart_mass_kg as f32,
            use_default_mass: true,
        }
    }

    pub(crate) fn launch_inputs(&self) -> LaunchInputs {
        LaunchInputs {
            range_m: Some(f64::from(self.range_m)),
            spring_compression_m: Some(f64::from(self.spring_compression_m)),
            start_height_m: Some(f64::from(self.start_height_m)),
            end_height_m: Some(f64::from(self.end_height_m)),
            dart_mass_kg: (!self.use_default_mass).then(|| f64::from(self.dart_mass_kg)),
            ..Default::default()
        }
    }
}

/// One successful Calculate press.
#[derive(Clone, Debug)]
pub(crate) struct Calculation {
    pub(crate) params: LaunchParameters,
    pub(crate) result: KinematicResult,
    pub(crate) samples: Vec<TrajectorySample>,
    pub(crate) limits: AxisLimits,
}
