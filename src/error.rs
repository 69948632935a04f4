//! Error types for day planning.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for u-dayplan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the planner boundary.
///
/// The allocation stage itself never fails; every variant here comes from
/// parsing, validation, or configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    /// A clock string was not a valid `HH:MM` time of day.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// A value outside the accepted domain (e.g. a minute past 23:59).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request failed pre-allocation validation.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The planner configuration is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
