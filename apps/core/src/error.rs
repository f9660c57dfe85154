use std::io;
use thiserror::Error;

/// Errors raised at the edges of the application (CLI input, configuration,
/// output). The analysis and template functions themselves never fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors, e.g. reading stdin.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents result serialization failures.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents malformed user input (e.g. a `--field` without `=`).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g. invalid environment values).
    #[error("Configuration error: {0}")]
    Config(String),
}
