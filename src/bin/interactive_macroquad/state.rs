use std::path::Path;

use nerf_velocity::CalculatorConfig;
use nerf_velocity::core::export::export_csv;
use nerf_velocity::core::trajectory::sample;
use nerf_velocity::core::window::axis_limits;
use nerf_velocity::error::{ErrorKind, SolveError};

use crate::constants::REPLAY_SLOWDOWN;
use crate::model::{Calculation, FormState};

pub(crate) struct AppRuntime {
    pub(crate) config: CalculatorConfig,
    pub(crate) form: FormState,
    pub(crate) calculation: Option<Calculation>,
    pub(crate) replay_elapsed_s: Option<f32>,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: CalculatorConfig) -> Self {
        let form = FormState::new(config.default_dart_mass_kg);
        Self {
            config,
            form,
            calculation: None,
            replay_elapsed_s: None,
            status_line: "Set the inputs and press Calculate".to_string(),
        }
    }

    pub(crate) fn calculate(&mut self) {
        match self.try_calculate() {
            Ok(calculation) => {
                self.status_line = format!(
                    "Calculated {} samples over {:.2} s",
                    calculation.samples.len(),
                    calculation.result.time_of_flight_s
                );
                self.calculation = Some(calculation);
                self.replay_elapsed_s = Some(0.0);
            }
            Err(err) => {
                log::warn!("calculation rejected: {err}");
                self.status_line = describe_error(&err);
                self.calculation = None;
                self.replay_elapsed_s = None;
            }
        }
    }

    fn try_calculate(&self) -> Result<Calculation, SolveError> {
        let params = self.form.launch_inputs().into_parameters()?;
        let result = self.config.solver().solve(&params)?;
        let samples = sample(&result, &params, self.config.sample_count);
        let limits = axis_limits(
            &samples,
            params.heights.launch_height_m(),
            self.config.y_axis_headroom_m,
        );
        Ok(Calculation {
            params,
            result,
            samples,
            limits,
        })
    }

    pub(crate) fn export(&mut self) {
        let Some(calculation) = &self.calculation else {
            self.status_line = "Nothing to export yet, press Calculate first".to_string();
            return;
        };
        let path = Path::new(&self.config.csv_file_name);
        self.status_line = match export_csv(path, &calculation.samples) {
            Ok(()) => format!(
                "Saved {} rows to {}",
                calculation.samples.len(),
                path.display()
            ),
            Err(err) => {
                log::error!("export failed: {err}");
                format!("Export failed: {err}")
            }
        };
    }

    /// Advances the replay marker; it stops on the impact point.
    pub(crate) fn step_replay(&mut self, frame_dt: f32) {
        let (Some(elapsed), Some(calculation)) = (self.replay_elapsed_s, &self.calculation) else {
            return;
        };
        let flight_s = calculation.result.time_of_flight_s as f32;
        self.replay_elapsed_s = Some((elapsed + frame_dt / REPLAY_SLOWDOWN).min(flight_s));
    }
}

fn describe_error(err: &SolveError) -> String {
    match err.kind() {
        ErrorKind::Input => format!("Check your inputs: {err}"),
        ErrorKind::Domain => format!("Cannot solve this shot: {err}"),
    }
}
