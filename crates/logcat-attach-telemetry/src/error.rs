//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur while installing a subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter level or a directive could not be parsed.
    #[error("invalid log configuration: {0}")]
    Config(String),

    /// A global subscriber is already installed or could not be set.
    #[error("failed to initialize logging: {0}")]
    Init(String),

    /// The log directory could not be created.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
