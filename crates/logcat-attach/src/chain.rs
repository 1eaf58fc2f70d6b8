//! Ordered processor pipeline.

use std::fmt;
use tracing::{debug, trace};

use crate::hint::Hint;
use crate::processor::EventProcessor;

/// Runs processors in registration order.
///
/// Each processor receives the event returned by the previous one. The chain
/// stops as soon as a processor drops the event.
pub struct ProcessorChain<E> {
    processors: Vec<(String, Box<dyn EventProcessor<E>>)>,
}

impl<E> Default for ProcessorChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ProcessorChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorChain")
            .field("processors", &self.names())
            .finish()
    }
}

impl<E> ProcessorChain<E> {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Append a processor.
    pub fn register<P>(&mut self, name: impl Into<String>, processor: P)
    where
        P: EventProcessor<E> + 'static,
    {
        let name = name.into();
        debug!(processor = %name, "Registering event processor");
        self.processors.push((name, Box::new(processor)));
    }

    /// Append a processor, builder style.
    #[must_use]
    pub fn with<P>(mut self, name: impl Into<String>, processor: P) -> Self
    where
        P: EventProcessor<E> + 'static,
    {
        self.register(name, processor);
        self
    }

    /// Names of the registered processors, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.processors.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of registered processors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether no processors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Pass `event` through every processor.
    pub fn run(&self, mut event: E, hint: &mut Hint) -> Option<E> {
        for (name, processor) in &self.processors {
            trace!(processor = %name, "Running event processor");
            match processor.process(event, hint) {
                Some(next) => event = next,
                None => {
                    debug!(processor = %name, "Event dropped by processor");
                    return None;
                },
            }
        }
        Some(event)
    }
}
