pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{
    cli::{LocalSink, TracingNotifier},
    toml_config::TomlConfig,
    CliConfig,
};

pub use crate::core::validator::{rejection_message, validate, UploadPolicy};
pub use crate::core::{exporter, progress};
pub use domain::model::{
    ExportBlob, FileDescriptor, Record, RejectReason, Severity, ValidationResult,
};
pub use domain::ports::{BlobSink, Notifier, PolicyProvider};
pub use utils::error::{Result, UploadError};
pub use utils::format::format_size;
