pub mod exporter;
pub mod progress;
pub mod validator;

pub use crate::domain::model::{
    ExportBlob, FileDescriptor, Record, RejectReason, Severity, ValidationResult,
};
pub use crate::domain::ports::{BlobSink, Notifier, PolicyProvider};
pub use crate::utils::error::Result;
