//! Error types for configuration validation.

use thiserror::Error;

use crate::config::{MAX_DIMENSION, MAX_TRIALS};

/// Configuration error for the trial simulator.
///
/// These errors occur during construction when invalid parameters are
/// provided; a built [`SimulationConfig`](crate::SimulationConfig) is always
/// valid.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Row count outside the valid range.
    #[error("invalid row count {0}: must be in range [1, {max}]", max = MAX_DIMENSION)]
    InvalidRowCount(u32),

    /// Column count outside the valid range.
    #[error("invalid column count {0}: must be in range [1, {max}]", max = MAX_DIMENSION)]
    InvalidColumnCount(u32),

    /// Trial count outside the valid range.
    #[error("invalid trial count {0}: must be in range [1, {max}]", max = MAX_TRIALS)]
    InvalidTrialCount(usize),

    /// A required builder parameter was not supplied.
    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),
}
