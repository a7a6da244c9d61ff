use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`SolveError`], used by front ends to pick wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing, non-finite, or non-positive scalar input.
    Input,
    /// The inputs are well formed but describe a shot the model cannot solve.
    Domain,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("missing input: {field}")]
    MissingInput { field: &'static str },
    #[error("invalid {field}: '{value}'. Inputs must be finite numbers.")]
    NonFiniteInput { field: &'static str, value: f64 },
    #[error("invalid {field}: {value}. Must be greater than zero.")]
    NonPositiveInput { field: &'static str, value: f64 },
    #[error("vertical drop is zero, the dart never lands")]
    ZeroVerticalDrop,
    #[error("spring compression is zero, no spring constant exists")]
    ZeroSpringCompression,
    #[error("impact point is {rise_m} m above the launch point, unreachable by a horizontal shot")]
    ImpactAboveLaunch { rise_m: f64 },
    #[error("calculation produced a non-finite {quantity}")]
    NonFiniteResult { quantity: &'static str },
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput { .. }
            | Self::NonFiniteInput { .. }
            | Self::NonPositiveInput { .. } => ErrorKind::Input,
            Self::ZeroVerticalDrop
            | Self::ZeroSpringCompression
            | Self::ImpactAboveLaunch { .. }
            | Self::NonFiniteResult { .. } => ErrorKind::Domain,
        }
    }
}

/// Failures while writing results out of the process.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to draw chart {path}: {reason}")]
    Chart { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration value {key} = {value}")]
    Invalid { key: &'static str, value: String },
}
