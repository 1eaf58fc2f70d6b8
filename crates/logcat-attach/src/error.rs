//! Error types for log collection.
//!
//! None of these reach the event pipeline: the collector folds them into
//! [`Collection::Skipped`](crate::Collection::Skipped).

use std::io;
use thiserror::Error;

/// Errors raised while acquiring or reading the log stream.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The log reader process could not be started.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The child was spawned without a readable stdout pipe.
    #[error("log reader stdout is not available")]
    MissingStdout,

    /// Reading from the log stream failed.
    #[error("failed to read log output: {0}")]
    Read(#[from] io::Error),
}

/// Result type for collection operations.
pub type CollectResult<T> = Result<T, CollectError>;

/// Errors from validating a [`CollectorConfig`](crate::CollectorConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No program to run.
    #[error("log reader program is empty")]
    EmptyProgram,

    /// A size or line bound was set to zero.
    #[error("{0} must be greater than zero")]
    ZeroBound(&'static str),
}

/// Result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
