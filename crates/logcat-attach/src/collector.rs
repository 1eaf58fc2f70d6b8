//! Bounded log collection.
//!
//! The collector reads a [`LogSource`] line by line into a buffer capped by
//! both a byte bound and a line bound. When the next line would push the
//! buffer past the byte bound, reading stops and [`TRUNCATION_MARKER`] is
//! appended instead. Failures never escape: they turn into
//! [`Collection::Skipped`] carrying whatever text was already buffered.

use std::borrow::Cow;
use std::io::{BufRead, Read};
use tracing::{debug, debug_span, warn};

use crate::config::{CollectorConfig, TRUNCATION_MARKER};
use crate::error::CollectResult;
use crate::source::{CommandSource, LogSource};

/// Outcome of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// The stream was read to its end or to a bound.
    Collected {
        /// Buffered lines, each terminated by `\n`.
        text: String,
        /// Number of log lines buffered, not counting the marker.
        lines: usize,
        /// Whether the byte bound cut the stream short.
        truncated: bool,
    },
    /// Collection did not run or failed part way.
    Skipped {
        /// Why collection was skipped.
        reason: String,
        /// Text buffered before the failure, possibly empty.
        partial: String,
    },
}

impl Collection {
    /// The collected text, whichever variant this is.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Collected { text, .. } => text,
            Self::Skipped { partial, .. } => partial,
        }
    }

    /// Consume the collection and return its text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Collected { text, .. } => text,
            Self::Skipped { partial, .. } => partial,
        }
    }

    /// Whether there is nothing to attach.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Whether the byte bound was hit.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Collected { truncated: true, .. })
    }

    /// Whether collection was skipped.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Reads a log source into a bounded buffer.
#[derive(Debug, Clone)]
pub struct LogCollector<S = CommandSource> {
    config: CollectorConfig,
    source: S,
}

impl Default for LogCollector<CommandSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl LogCollector<CommandSource> {
    /// Collector running `logcat` with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CollectorConfig::default())
    }

    /// Collector running the program named in `config`.
    #[must_use]
    pub fn with_config(config: CollectorConfig) -> Self {
        let source = CommandSource::from_config(&config);
        Self { config, source }
    }
}

impl<S: LogSource> LogCollector<S> {
    /// Collector reading from a custom source. `config.program` and
    /// `config.args` are ignored.
    #[must_use]
    pub fn with_source(config: CollectorConfig, source: S) -> Self {
        Self { config, source }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Run one collection.
    ///
    /// Never fails; see [`Collection`]. The stream is released before this
    /// returns.
    pub fn collect(&self) -> Collection {
        let span = debug_span!("logcat_collect", program = %self.config.program);
        let _guard = span.enter();

        if !self.config.enabled {
            return Collection::Skipped {
                reason: "collector disabled".to_string(),
                partial: String::new(),
            };
        }

        if let Err(e) = self.config.validate() {
            warn!(error = %e, "Invalid collector configuration, skipping log capture");
            return Collection::Skipped {
                reason: e.to_string(),
                partial: String::new(),
            };
        }

        let mut buffer = LogBuffer::new(self.config.max_bytes, self.config.max_lines);
        let outcome = self
            .source
            .open()
            .and_then(|mut stream| buffer.fill(&mut stream));

        match outcome {
            Ok(()) => {
                debug!(
                    lines = buffer.lines,
                    bytes = buffer.text.len(),
                    truncated = buffer.truncated,
                    "Collected log output"
                );
                Collection::Collected {
                    lines: buffer.lines,
                    truncated: buffer.truncated,
                    text: buffer.text,
                }
            },
            Err(e) => {
                warn!(
                    error = %e,
                    lines = buffer.lines,
                    "Log capture failed, continuing with partial output"
                );
                Collection::Skipped {
                    reason: e.to_string(),
                    partial: buffer.text,
                }
            },
        }
    }
}

/// Append-only line buffer for a single collection.
#[derive(Debug)]
struct LogBuffer {
    text: String,
    lines: usize,
    truncated: bool,
    max_bytes: usize,
    max_lines: usize,
}

impl LogBuffer {
    fn new(max_bytes: usize, max_lines: usize) -> Self {
        Self {
            text: String::new(),
            lines: 0,
            truncated: false,
            max_bytes,
            max_lines,
        }
    }

    fn remaining(&self) -> usize {
        self.max_bytes.saturating_sub(self.text.len())
    }

    /// Read lines until EOF or a bound is reached.
    fn fill<R: BufRead>(&mut self, reader: &mut R) -> CollectResult<()> {
        let mut raw = Vec::new();

        while !self.truncated && self.lines < self.max_lines {
            raw.clear();

            // Room for the line plus a "\r\n" terminator. A read that fills
            // the whole budget without reaching '\n' cannot fit.
            let budget = self.remaining().saturating_add(2);
            let limit = u64::try_from(budget).unwrap_or(u64::MAX);
            let read = reader.by_ref().take(limit).read_until(b'\n', &mut raw)?;

            if read == 0 {
                break;
            }
            if read == budget && raw.last() != Some(&b'\n') {
                self.truncate();
                break;
            }
            self.push_line(&raw);
        }

        Ok(())
    }

    fn push_line(&mut self, raw: &[u8]) {
        let line = decode_line(raw);
        let needed = line.len().saturating_add(1);

        if self.text.len().saturating_add(needed) > self.max_bytes {
            self.truncate();
            return;
        }

        self.text.push_str(&line);
        self.text.push('\n');
        self.lines = self.lines.saturating_add(1);
    }

    fn truncate(&mut self) {
        self.text.push_str(TRUNCATION_MARKER);
        self.text.push('\n');
        self.truncated = true;
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}
