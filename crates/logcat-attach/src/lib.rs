//! Logcat Attach - attach recent device warnings to error reports.
//!
//! This crate provides an event processor for error-reporting pipelines. On
//! every captured event it runs the platform log reader, keeps the most
//! recent warning-or-above lines within a fixed size budget, and adds them to
//! the event's hint as a `logcat-output.txt` attachment.
//!
//! Log capture is best effort. If the reader cannot be started or its output
//! cannot be read, the event is passed through without an attachment; no
//! error ever reaches the pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use logcat_attach::{EventProcessor, Hint, LogcatProcessor};
//!
//! # struct ErrorEvent;
//! let processor = LogcatProcessor::new();
//!
//! let mut hint = Hint::new();
//! let event = processor.process(ErrorEvent, &mut hint);
//!
//! assert!(event.is_some());
//! for attachment in hint.take_attachments() {
//!     println!("{} ({} bytes)", attachment.filename(), attachment.len());
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod attachment;
pub mod chain;
pub mod collector;
pub mod config;
pub mod error;
pub mod hint;
pub mod processor;
pub mod source;

pub use attachment::Attachment;
pub use chain::ProcessorChain;
pub use collector::{Collection, LogCollector};
pub use config::{
    ATTACHMENT_CONTENT_TYPE, ATTACHMENT_FILENAME, CollectorConfig, LOGCAT_ARGS, LOGCAT_PROGRAM,
    MAX_LOG_BYTES, MAX_LOG_LINES, TRUNCATION_MARKER,
};
pub use error::{CollectError, CollectResult, ConfigError, ConfigResult};
pub use hint::Hint;
pub use processor::{EventProcessor, LogcatProcessor};
pub use source::{CommandSource, LogSource, ProcessStream};
