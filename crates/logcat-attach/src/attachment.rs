//! Attachments handed to the host for inclusion in a report.

use std::fmt;

/// A named byte blob with a content type.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    bytes: Vec<u8>,
    filename: String,
    content_type: String,
}

impl Attachment {
    /// Create an attachment from raw bytes.
    #[must_use]
    pub fn new(
        bytes: impl Into<Vec<u8>>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
            content_type: content_type.into(),
        }
    }

    /// Create an attachment holding UTF-8 text.
    #[must_use]
    pub fn text(
        text: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self::new(text.into().into_bytes(), filename, content_type)
    }

    /// Payload bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the attachment and return its payload.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// File name shown in the report.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type of the payload.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Payloads run to megabytes; keep them out of debug output.
impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
