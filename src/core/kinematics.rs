use std::fmt;

use crate::error::SolveError;

/// Rounded gravitational acceleration used for classroom dart problems.
pub const CLASSROOM_GRAVITY_MPS2: f64 = 10.0;
/// Typical foam dart mass, used when no mass is supplied.
pub const DEFAULT_DART_MASS_KG: f64 = 0.02;

/// How the launch and impact heights were supplied.
///
/// All three forms describe a horizontal shot that falls from a launch height
/// to an impact height. The trajectory is always `y = launch - g t^2 / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightInput {
    /// Launched `height_m` above the ground, lands on the ground.
    ImpactHeight { height_m: f64 },
    /// Launch height minus impact height; positive when impact is below launch.
    HeightDifference { drop_m: f64 },
    /// Explicit launch and impact heights above the ground.
    StartEnd { start_m: f64, end_m: f64 },
}

impl HeightInput {
    pub fn launch_height_m(self) -> f64 {
        match self {
            Self::ImpactHeight { height_m } => height_m,
            Self::HeightDifference { drop_m } => drop_m,
            Self::StartEnd { start_m, .. } => start_m,
        }
    }

    pub fn impact_height_m(self) -> f64 {
        match self {
            Self::ImpactHeight { .. } | Self::HeightDifference { .. } => 0.0,
            Self::StartEnd { end_m, .. } => end_m,
        }
    }

    pub fn vertical_drop_m(self) -> f64 {
        self.launch_height_m() - self.impact_height_m()
    }

    fn validate(self) -> Result<(), SolveError> {
        match self {
            Self::ImpactHeight { height_m } => {
                require_finite("impact height", height_m)?;
                if height_m < 0.0 {
                    return Err(SolveError::NonPositiveInput {
                        field: "impact height",
                        value: height_m,
                    });
                }
            }
            Self::HeightDifference { drop_m } => {
                require_finite("height difference", drop_m)?;
            }
            Self::StartEnd { start_m, end_m } => {
                require_finite("starting height", start_m)?;
                require_finite("ending height", end_m)?;
            }
        }
        Ok(())
    }
}

/// Validated inputs for a single calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub range_m: f64,
    /// Distance the spring is compressed before firing. Calculators that ask
    /// for "muzzle length" feed the same value here.
    pub spring_compression_m: f64,
    pub heights: HeightInput,
    /// `None` falls back to the solver's default dart mass.
    pub dart_mass_kg: Option<f64>,
}

impl LaunchParameters {
    pub fn new(range_m: f64, spring_compression_m: f64, heights: HeightInput) -> Self {
        Self {
            range_m,
            spring_compression_m,
            heights,
            dart_mass_kg: None,
        }
    }

    pub fn with_dart_mass(mut self, dart_mass_kg: f64) -> Self {
        self.dart_mass_kg = Some(dart_mass_kg);
        self
    }
}

/// Raw form state as collected by a front end, any field may be absent.
///
/// When several height conventions are filled in, explicit start/end heights
/// win over a height difference, which wins over an impact height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LaunchInputs {
    pub range_m: Option<f64>,
    pub spring_compression_m: Option<f64>,
    pub impact_height_m: Option<f64>,
    pub height_difference_m: Option<f64>,
    pub start_height_m: Option<f64>,
    pub end_height_m: Option<f64>,
    pub dart_mass_kg: Option<f64>,
}

impl LaunchInputs {
    pub fn into_parameters(self) -> Result<LaunchParameters, SolveError> {
        let range_m = self
            .range_m
            .ok_or(SolveError::MissingInput { field: "range" })?;
        let spring_compression_m = self.spring_compression_m.ok_or(SolveError::MissingInput {
            field: "spring compression",
        })?;

        let heights = match (self.start_height_m, self.end_height_m) {
            (Some(start_m), Some(end_m)) => HeightInput::StartEnd { start_m, end_m },
            (Some(_), None) => {
                return Err(SolveError::MissingInput {
                    field: "ending height",
                });
            }
            (None, Some(_)) => {
                return Err(SolveError::MissingInput {
                    field: "starting height",
                });
            }
            (None, None) => match (self.height_difference_m, self.impact_height_m) {
                (Some(drop_m), _) => HeightInput::HeightDifference { drop_m },
                (None, Some(height_m)) => HeightInput::ImpactHeight { height_m },
                (None, None) => return Err(SolveError::MissingInput { field: "height" }),
            },
        };

        Ok(LaunchParameters {
            range_m,
            spring_compression_m,
            heights,
            dart_mass_kg: self.dart_mass_kg,
        })
    }
}

/// Everything derived from one set of [`LaunchParameters`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicResult {
    pub time_of_flight_s: f64,
    pub muzzle_velocity_mps: f64,
    pub spring_constant_n_per_m: f64,
    pub muzzle_energy_j: f64,
    pub dart_mass_kg: f64,
    pub vertical_drop_m: f64,
    pub launch_height_m: f64,
    pub gravity_mps2: f64,
}

impl fmt::Display for KinematicResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Muzzle Velocity: {:.2} m/s", self.muzzle_velocity_mps)?;
        writeln!(f, "Spring Constant: {:.2} N/m", self.spring_constant_n_per_m)?;
        writeln!(f, "Time of Flight: {:.2} s", self.time_of_flight_s)?;
        write!(
            f,
            "Muzzle Energy: {:.2} J ({:.3} kg dart)",
            self.muzzle_energy_j, self.dart_mass_kg
        )
    }
}

/// Closed-form solver for a horizontal shot under constant gravity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solver {
    pub gravity_mps2: f64,
    pub default_dart_mass_kg: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            gravity_mps2: CLASSROOM_GRAVITY_MPS2,
            default_dart_mass_kg: DEFAULT_DART_MASS_KG,
        }
    }
}

impl Solver {
    pub fn solve(&self, params: &LaunchParameters) -> Result<KinematicResult, SolveError> {
        let range_m = require_positive("range", params.range_m)?;
        let spring_compression_m =
            require_finite("spring compression", params.spring_compression_m)?;
        if spring_compression_m < 0.0 {
            return Err(SolveError::NonPositiveInput {
                field: "spring compression",
                value: spring_compression_m,
            });
        }
        let dart_mass_kg = require_positive(
            "dart mass",
            params.dart_mass_kg.unwrap_or(self.default_dart_mass_kg),
        )?;
        params.heights.validate()?;

        let vertical_drop_m = params.heights.vertical_drop_m();
        if vertical_drop_m == 0.0 {
            return Err(SolveError::ZeroVerticalDrop);
        }
        if vertical_drop_m < 0.0 {
            return Err(SolveError::ImpactAboveLaunch {
                rise_m: -vertical_drop_m,
            });
        }
        if spring_compression_m == 0.0 {
            return Err(SolveError::ZeroSpringCompression);
        }

        let time_of_flight_s = ((2.0 * vertical_drop_m) / self.gravity_mps2).sqrt();
        let muzzle_velocity_mps = range_m / time_of_flight_s;
        let kinetic = dart_mass_kg * muzzle_velocity_mps * muzzle_velocity_mps;
        let spring_constant_n_per_m = kinetic / (2.0 * spring_compression_m);
        let muzzle_energy_j = 0.5 * kinetic;

        require_finite_result("time of flight", time_of_flight_s)?;
        require_finite_result("muzzle velocity", muzzle_velocity_mps)?;
        require_finite_result("spring constant", spring_constant_n_per_m)?;

        log::debug!(
            "solved drop={vertical_drop_m} m range={range_m} m: t={time_of_flight_s} s, \
             v={muzzle_velocity_mps} m/s, k={spring_constant_n_per_m} N/m"
        );

        Ok(KinematicResult {
            time_of_flight_s,
            muzzle_velocity_mps,
            spring_constant_n_per_m,
            muzzle_energy_j,
            dart_mass_kg,
            vertical_drop_m,
            launch_height_m: params.heights.launch_height_m(),
            gravity_mps2: self.gravity_mps2,
        })
    }
}

/// Solves with classroom gravity and the default dart mass.
pub fn solve(params: &LaunchParameters) -> Result<KinematicResult, SolveError> {
    Solver::default().solve(params)
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, SolveError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolveError::NonFiniteInput { field, value })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, SolveError> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SolveError::NonPositiveInput { field, value })
    }
}

fn require_finite_result(quantity: &'static str, value: f64) -> Result<(), SolveError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SolveError::NonFiniteResult { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn start_and_end_heights_give_known_velocity_and_stiffness() {
        let params = LaunchParameters::new(
            30.0,
            0.15,
            HeightInput::StartEnd {
                start_m: 2.0,
                end_m: 1.0,
            },
        )
        .with_dart_mass(0.01);

        let result = solve(&params).expect("calculation should succeed");

        assert_close(result.vertical_drop_m, 1.0, 1e-12);
        assert_close(result.time_of_flight_s, 0.2f64.sqrt(), 1e-12);
        assert_close(result.muzzle_velocity_mps, 67.08, 0.005);
        assert_close(result.spring_constant_n_per_m, 150.0, 1e-9);
        assert_close(result.launch_height_m, 2.0, 0.0);
    }

    #[test]
    fn missing_mass_uses_default_dart() {
        let params = LaunchParameters::new(10.0, 0.05, HeightInput::ImpactHeight { height_m: 1.0 });

        let result = solve(&params).expect("calculation should succeed");

        assert_close(result.time_of_flight_s, 0.4472, 0.0001);
        assert_close(result.muzzle_velocity_mps, 22.36, 0.005);
        assert_close(result.spring_constant_n_per_m, 100.0, 1e-9);
        assert_close(result.dart_mass_kg, DEFAULT_DART_MASS_KG, 0.0);
        assert_close(result.muzzle_energy_j, 5.0, 1e-9);
    }

    #[test]
    fn height_difference_maps_onto_launch_height() {
        let params = LaunchParameters::new(
            10.0,
            0.05,
            HeightInput::HeightDifference { drop_m: 1.0 },
        );

        let result = solve(&params).expect("calculation should succeed");

        assert_close(result.launch_height_m, 1.0, 0.0);
        assert_close(result.muzzle_velocity_mps, 22.36, 0.005);
    }

    #[test]
    fn custom_gravity_changes_flight_time() {
        let solver = Solver {
            gravity_mps2: 9.8,
            ..Solver::default()
        };
        let params = LaunchParameters::new(10.0, 0.05, HeightInput::ImpactHeight { height_m: 4.9 });

        let result = solver.solve(&params).expect("calculation should succeed");

        assert_close(result.time_of_flight_s, 1.0, 1e-12);
        assert_close(result.gravity_mps2, 9.8, 0.0);
    }

    #[test]
    fn identical_inputs_solve_identically() {
        let params = LaunchParameters::new(
            12.5,
            0.07,
            HeightInput::StartEnd {
                start_m: 1.3,
                end_m: 0.2,
            },
        );

        assert_eq!(solve(&params), solve(&params));
    }

    #[test]
    fn zero_drop_is_a_domain_error() {
        let params = LaunchParameters::new(
            10.0,
            0.05,
            HeightInput::StartEnd {
                start_m: 1.0,
                end_m: 1.0,
            },
        );

        let err = solve(&params).expect_err("calculation should fail");

        assert_eq!(err, SolveError::ZeroVerticalDrop);
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn zero_compression_is_a_domain_error() {
        let params = LaunchParameters::new(10.0, 0.0, HeightInput::ImpactHeight { height_m: 1.0 });

        let err = solve(&params).expect_err("calculation should fail");

        assert_eq!(err, SolveError::ZeroSpringCompression);
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn impact_above_launch_is_rejected() {
        let params = LaunchParameters::new(
            10.0,
            0.05,
            HeightInput::HeightDifference { drop_m: -0.5 },
        );

        let err = solve(&params).expect_err("calculation should fail");

        assert_eq!(err, SolveError::ImpactAboveLaunch { rise_m: 0.5 });
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn non_positive_inputs_are_input_errors() {
        let base = LaunchParameters::new(10.0, 0.05, HeightInput::ImpactHeight { height_m: 1.0 });

        let cases = [
            LaunchParameters {
                range_m: 0.0,
                ..base
            },
            LaunchParameters {
                spring_compression_m: -0.1,
                ..base
            },
            base.with_dart_mass(0.0),
            LaunchParameters {
                heights: HeightInput::ImpactHeight { height_m: -1.0 },
                ..base
            },
            LaunchParameters {
                range_m: f64::NAN,
                ..base
            },
        ];

        for params in cases {
            let err = solve(&params).expect_err("calculation should fail");
            assert_eq!(err.kind(), ErrorKind::Input, "{params:?} -> {err}");
        }
    }

    #[test]
    fn overflowing_result_is_rejected() {
        let params = LaunchParameters::new(
            f64::MAX,
            1e-300,
            HeightInput::ImpactHeight { height_m: 1.0 },
        );

        let err = solve(&params).expect_err("calculation should fail");

        assert!(matches!(err, SolveError::NonFiniteResult { .. }));
    }

    #[test]
    fn inputs_prefer_explicit_start_and_end() {
        let inputs = LaunchInputs {
            range_m: Some(10.0),
            spring_compression_m: Some(0.05),
            impact_height_m: Some(3.0),
            start_height_m: Some(2.0),
            end_height_m: Some(0.5),
            ..Default::default()
        };

        let params = inputs.into_parameters().expect("inputs are complete");

        assert_eq!(
            params.heights,
            HeightInput::StartEnd {
                start_m: 2.0,
                end_m: 0.5
            }
        );
    }

    #[test]
    fn incomplete_inputs_report_the_missing_field() {
        let inputs = LaunchInputs {
            range_m: Some(10.0),
            spring_compression_m: Some(0.05),
            start_height_m: Some(2.0),
            ..Default::default()
        };
        assert_eq!(
            inputs.into_parameters(),
            Err(SolveError::MissingInput {
                field: "ending height"
            })
        );

        let no_height = LaunchInputs {
            range_m: Some(10.0),
            spring_compression_m: Some(0.05),
            ..Default::default()
        };
        let err = no_height.into_parameters().expect_err("height is missing");
        assert_eq!(err, SolveError::MissingInput { field: "height" });
        assert_eq!(err.kind(), ErrorKind::Input);

        assert_eq!(
            LaunchInputs::default().into_parameters(),
            Err(SolveError::MissingInput { field: "range" })
        );
    }

    #[test]
    fn report_rounds_to_two_decimals() {
        let params = LaunchParameters::new(10.0, 0.05, HeightInput::ImpactHeight { height_m: 1.0 });
        let report = solve(&params).expect("calculation should succeed").to_string();

        assert!(report.contains("Muzzle Velocity: 22.36 m/s"), "{report}");
        assert!(report.contains("Spring Constant: 100.00 N/m"), "{report}");
    }
}
