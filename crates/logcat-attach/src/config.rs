//! Collector configuration and fixed limits.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Upper bound on buffered log text, in bytes (2 MiB).
pub const MAX_LOG_BYTES: usize = 2_097_152;

/// Upper bound on buffered log lines.
pub const MAX_LOG_LINES: usize = 1000;

/// Line appended when the byte bound cuts the log short.
pub const TRUNCATION_MARKER: &str = "Ended due to size limit.";

/// The platform log reader.
pub const LOGCAT_PROGRAM: &str = "logcat";

/// Dump and exit, last 1000 records, warning or above for every tag.
pub const LOGCAT_ARGS: &[&str] = &["-d", "-t", "1000", "*:W"];

/// File name of the attachment added to each event.
pub const ATTACHMENT_FILENAME: &str = "logcat-output.txt";

/// Content type of the attachment added to each event.
pub const ATTACHMENT_CONTENT_TYPE: &str = "text/plain";

/// Configuration consumed by [`LogCollector`](crate::LogCollector).
///
/// The defaults are the fixed limits above; nothing is read from files or
/// the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Whether collection runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log reader program.
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments passed to the log reader.
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Maximum buffered bytes, excluding the truncation marker.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Maximum buffered lines.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

fn default_true() -> bool {
    true
}

fn default_program() -> String {
    LOGCAT_PROGRAM.to_string()
}

fn default_args() -> Vec<String> {
    LOGCAT_ARGS.iter().map(ToString::to_string).collect()
}

fn default_max_bytes() -> usize {
    MAX_LOG_BYTES
}

fn default_max_lines() -> usize {
    MAX_LOG_LINES
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_program(),
            args: default_args(),
            max_bytes: MAX_LOG_BYTES,
            max_lines: MAX_LOG_LINES,
        }
    }
}

impl CollectorConfig {
    /// Create a configuration with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that never collects.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Run a different program instead of `logcat`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replace the program arguments.
    #[must_use]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the byte bound.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the line bound.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Check that the configuration can drive a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the program is blank or a bound is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }
        if self.max_bytes == 0 {
            return Err(ConfigError::ZeroBound("max_bytes"));
        }
        if self.max_lines == 0 {
            return Err(ConfigError::ZeroBound("max_lines"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_limits() {
        let config = CollectorConfig::default();
        assert!(config.enabled);
        assert_eq!(config.program, "logcat");
        assert_eq!(config.args, vec!["-d", "-t", "1000", "*:W"]);
        assert_eq!(config.max_bytes, 2_097_152);
        assert_eq!(config.max_lines, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_disabled() {
        let config = CollectorConfig::disabled();
        assert!(!config.enabled);
        assert_eq!(config.max_bytes, MAX_LOG_BYTES);
    }

    #[test]
    fn test_builder() {
        let config = CollectorConfig::new()
            .with_program("sh")
            .with_args(["-c", "echo hi"])
            .with_max_bytes(64)
            .with_max_lines(3);

        assert_eq!(config.program, "sh");
        assert_eq!(config.args, vec!["-c", "echo hi"]);
        assert_eq!(config.max_bytes, 64);
        assert_eq!(config.max_lines, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            CollectorConfig::new().with_program("  ").validate(),
            Err(ConfigError::EmptyProgram)
        );
        assert_eq!(
            CollectorConfig::new().with_max_bytes(0).validate(),
            Err(ConfigError::ZeroBound("max_bytes"))
        );
        assert_eq!(
            CollectorConfig::new().with_max_lines(0).validate(),
            Err(ConfigError::ZeroBound("max_lines"))
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: CollectorConfig = serde_json::from_str(r#"{"max_bytes": 128}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.program, LOGCAT_PROGRAM);
        assert_eq!(config.max_bytes, 128);
        assert_eq!(config.max_lines, MAX_LOG_LINES);
    }
}
