//! Logcat Attach Telemetry - `tracing` subscriber setup for hosts.
//!
//! The processor crate only emits `tracing` events. Hosts that do not already
//! install a subscriber can use this crate to get one with a sensible filter.
//!
//! # Example
//!
//! ```rust,no_run
//! use logcat_attach_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), logcat_attach_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("logcat_attach=debug");
//!
//! setup_logging(&config)?;
//! tracing::info!("host started");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    LogConfig, LogFormat, LogTarget, setup_default_logging, setup_logging, setup_test_logging,
};
