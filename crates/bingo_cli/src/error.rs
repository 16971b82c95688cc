//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid simulation configuration.
    #[error("configuration error: {0}")]
    Config(#[from] bingo_core::ConfigError),

    /// Batch execution or aggregation failure.
    #[error("engine error: {0}")]
    Engine(#[from] bingo_engine::EngineError),

    /// Filesystem failure while writing reports.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Distribution file write failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
