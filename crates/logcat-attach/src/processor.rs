//! Event processor capability and the logcat processor.

use tracing::debug;

use crate::attachment::Attachment;
use crate::collector::LogCollector;
use crate::config::{ATTACHMENT_CONTENT_TYPE, ATTACHMENT_FILENAME, CollectorConfig};
use crate::hint::Hint;
use crate::source::{CommandSource, LogSource};

/// A hook the host runs on every captured event before sending it.
///
/// Returning `None` drops the event. Any
/// `Fn(E, &mut Hint) -> Option<E>` closure is a processor.
pub trait EventProcessor<E>: Send + Sync {
    /// Inspect the event, optionally adding side data to `hint`.
    fn process(&self, event: E, hint: &mut Hint) -> Option<E>;
}

impl<E, F> EventProcessor<E> for F
where
    F: Fn(E, &mut Hint) -> Option<E> + Send + Sync,
{
    fn process(&self, event: E, hint: &mut Hint) -> Option<E> {
        self(event, hint)
    }
}

/// Attaches recent warning-level device logs to every event.
///
/// The event itself is never modified or dropped. When collection yields no
/// text, nothing is attached.
#[derive(Debug, Clone)]
pub struct LogcatProcessor<S = CommandSource> {
    collector: LogCollector<S>,
}

impl Default for LogcatProcessor<CommandSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl LogcatProcessor<CommandSource> {
    /// Processor running `logcat` with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collector: LogCollector::new(),
        }
    }

    /// Processor running the program named in `config`.
    #[must_use]
    pub fn with_config(config: CollectorConfig) -> Self {
        Self {
            collector: LogCollector::with_config(config),
        }
    }
}

impl<S: LogSource> LogcatProcessor<S> {
    /// Processor reading from a custom source.
    #[must_use]
    pub fn with_source(config: CollectorConfig, source: S) -> Self {
        Self {
            collector: LogCollector::with_source(config, source),
        }
    }

    /// The underlying collector.
    #[must_use]
    pub fn collector(&self) -> &LogCollector<S> {
        &self.collector
    }

    /// Collect logs and add them to `hint`. Returns whether an attachment
    /// was added.
    pub fn attach_to(&self, hint: &mut Hint) -> bool {
        let collection = self.collector.collect();
        if collection.is_empty() {
            debug!(skipped = collection.is_skipped(), "No log output to attach");
            return false;
        }

        let truncated = collection.is_truncated();
        let text = collection.into_text();
        debug!(bytes = text.len(), truncated, "Attaching log output");
        hint.add_attachment(Attachment::text(
            text,
            ATTACHMENT_FILENAME,
            ATTACHMENT_CONTENT_TYPE,
        ));
        true
    }
}

impl<E, S: LogSource> EventProcessor<E> for LogcatProcessor<S> {
    fn process(&self, event: E, hint: &mut Hint) -> Option<E> {
        self.attach_to(hint);
        Some(event)
    }
}
