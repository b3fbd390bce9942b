use crate::core::validator::UploadPolicy;
use crate::domain::model::{ExportBlob, Severity};
use crate::utils::error::Result;

pub trait PolicyProvider: Send + Sync {
    fn policy(&self) -> UploadPolicy;
    fn output_path(&self) -> &str;
    fn formats(&self) -> &[String];
    fn filename_prefix(&self) -> &str;
}

/// Destination for export artifacts. Implementations own the temporary
/// resources involved in the save and must release them before returning.
pub trait BlobSink: Send + Sync {
    /// Persists the blob under `filename`, returning the final location.
    fn save(&self, blob: &ExportBlob, filename: &str) -> Result<String>;
}

/// User-facing notification surface. The core produces `(message, severity)`
/// pairs; how they are displayed is the adapter's concern.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}
