//! Prelude module - commonly used types for convenient import.
//!
//! Use `use logcat_attach::prelude::*;` to import all essential types.

// Processors
pub use crate::{EventProcessor, LogcatProcessor, ProcessorChain};

// Host boundary
pub use crate::{Attachment, Hint};

// Collection
pub use crate::{Collection, CollectorConfig, CommandSource, LogCollector, LogSource};

// Errors
pub use crate::{CollectError, CollectResult, ConfigError, ConfigResult};
