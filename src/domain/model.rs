use serde::{Deserialize, Serialize};

/// A candidate upload as declared by the source environment (file picker,
/// drag-and-drop). The MIME type is taken as declared, never content-sniffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    None,
    BadType,
    TooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub accepted: bool,
    pub reason: RejectReason,
}

impl ValidationResult {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            reason: RejectReason::None,
        }
    }

    pub fn rejected(reason: RejectReason) -> Self {
        Self {
            accepted: false,
            reason,
        }
    }
}

/// One row of tabular data. Key order is insertion order (serde_json is
/// built with `preserve_order`), which fixes the CSV header order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<serde_json::Value>) {
        self.fields.insert(key.to_string(), value.into());
    }
}

/// An in-memory export artifact: bytes tagged with a MIME type, handed to a
/// sink and discarded once the save is triggered.
#[derive(Debug, Clone)]
pub struct ExportBlob {
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl ExportBlob {
    pub fn new(content: Vec<u8>, mime_type: &str) -> Self {
        Self {
            content,
            mime_type: mime_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}
