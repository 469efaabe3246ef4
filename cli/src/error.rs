//! Error types for the CLI.

use restaurant_synth_core_rs::EngineError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while reading a config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset could not be configured or built.
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// JSON output failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Date argument could not be parsed.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
