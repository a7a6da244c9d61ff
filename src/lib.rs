//! Muzzle velocity and spring constant calculator for foam dart launchers.
//!
//! The [`core`] module holds the pure physics: [`core::kinematics`] turns
//! range, height and spring compression into a muzzle velocity and a
//! Hooke's-law spring constant, and [`core::trajectory`] samples the
//! resulting parabola. Charting and CSV export sit next to them and only
//! consume the computed samples.

pub mod config;
pub mod core;
pub mod error;

pub use config::CalculatorConfig;
pub use error::{ConfigError, ErrorKind, OutputError, SolveError};
