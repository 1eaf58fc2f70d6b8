//! Per-event side channel passed alongside each event.

use std::collections::HashMap;

use crate::attachment::Attachment;

/// Carries attachments and contextual metadata for one event.
///
/// A fresh hint is created by the host for each captured event; processors
/// add to it and the host drains it when building the report.
#[derive(Debug, Clone, Default)]
pub struct Hint {
    attachments: Vec<Attachment>,
    extra: HashMap<String, serde_json::Value>,
}

impl Hint {
    /// Create an empty hint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attachment. Ownership moves to the hint.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Attachments registered so far, in insertion order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Remove and return all attachments.
    pub fn take_attachments(&mut self) -> Vec<Attachment> {
        std::mem::take(&mut self.attachments)
    }

    /// Add a metadata value.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Set a metadata value, replacing any previous one.
    pub fn set_extra(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.extra.insert(key.into(), value);
    }

    /// Get a metadata value.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachments_keep_order_and_drain() {
        let mut hint = Hint::new();
        hint.add_attachment(Attachment::text("a", "a.txt", "text/plain"));
        hint.add_attachment(Attachment::text("b", "b.txt", "text/plain"));

        let names: Vec<_> = hint.attachments().iter().map(Attachment::filename).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);

        let taken = hint.take_attachments();
        assert_eq!(taken.len(), 2);
        assert!(hint.attachments().is_empty());
    }

    #[test]
    fn test_extra_values() {
        let mut hint = Hint::new().with_extra("level", serde_json::json!("fatal"));
        hint.set_extra("handled", serde_json::json!(false));

        assert_eq!(hint.extra("level"), Some(&serde_json::json!("fatal")));
        assert_eq!(hint.extra("handled"), Some(&serde_json::json!(false)));
        assert!(hint.extra("missing").is_none());
    }
}
