//! Error types for flightmark.
//!
//! The time-point core is total and never fails; these errors cover the
//! surrounding layers (configuration, input parsing, terminal handling).

use thiserror::Error;

/// Errors raised outside the time-point core.
#[derive(Debug, Error)]
pub enum FlightmarkError {
    /// Configuration could not be located, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or stream failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input text (timestamps, scripts) could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The interactive terminal could not be set up or drawn.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A command-line value was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
