//! Physical constants and output defaults, optionally read from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::export::CSV_FILE_NAME;
use crate::core::kinematics::{CLASSROOM_GRAVITY_MPS2, DEFAULT_DART_MASS_KG, Solver};
use crate::core::trajectory::DEFAULT_SAMPLE_COUNT;
use crate::core::window::Y_AXIS_HEADROOM_M;
use crate::error::ConfigError;

/// Largest trajectory that will be sampled into memory in one go.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    pub gravity_mps2: f64,
    pub default_dart_mass_kg: f64,
    pub sample_count: usize,
    pub y_axis_headroom_m: f64,
    pub csv_file_name: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            gravity_mps2: CLASSROOM_GRAVITY_MPS2,
            default_dart_mass_kg: DEFAULT_DART_MASS_KG,
            sample_count: DEFAULT_SAMPLE_COUNT,
            y_axis_headroom_m: Y_AXIS_HEADROOM_M,
            csv_file_name: CSV_FILE_NAME.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Parses a TOML document; keys that are absent keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("loaded configuration from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity_mps2.is_finite() && self.gravity_mps2 > 0.0) {
            return Err(ConfigError::Invalid {
                key: "gravity_mps2",
                value: self.gravity_mps2.to_string(),
            });
        }
        if !(self.default_dart_mass_kg.is_finite() && self.default_dart_mass_kg > 0.0) {
            return Err(ConfigError::Invalid {
                key: "default_dart_mass_kg",
                value: self.default_dart_mass_kg.to_string(),
            });
        }
        if !(2..=MAX_SAMPLE_COUNT).contains(&self.sample_count) {
            return Err(ConfigError::Invalid {
                key: "sample_count",
                value: self.sample_count.to_string(),
            });
        }
        if !(self.y_axis_headroom_m.is_finite() && self.y_axis_headroom_m >= 0.0) {
            return Err(ConfigError::Invalid {
                key: "y_axis_headroom_m",
                value: self.y_axis_headroom_m.to_string(),
            });
        }
        if self.csv_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "csv_file_name",
                value: format!("'{}'", self.csv_file_name),
            });
        }
        Ok(())
    }

    pub fn solver(&self) -> Solver {
        Solver {
            gravity_mps2: self.gravity_mps2,
            default_dart_mass_kg: self.default_dart_mass_kg,
        }
    }
}
