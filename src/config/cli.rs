use crate::domain::model::{ExportBlob, Severity};
use crate::domain::ports::{BlobSink, Notifier};
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Filesystem sink for export blobs. The blob is staged in a temp file and
/// atomically persisted under the target name; the temp resource never
/// outlives the call.
#[derive(Debug, Clone)]
pub struct LocalSink {
    base_path: String,
}

impl LocalSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl BlobSink for LocalSink {
    fn save(&self, blob: &ExportBlob, filename: &str) -> Result<String> {
        let dir = Path::new(&self.base_path);
        fs::create_dir_all(dir)?;

        let final_path = dir.join(filename);

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(&blob.content)?;
        staged.persist(&final_path).map_err(|e| e.error)?;

        tracing::debug!(
            "Saved {} byte {} blob to {}",
            blob.content.len(),
            blob.mime_type,
            final_path.display()
        );

        Ok(final_path.to_string_lossy().into_owned())
    }
}

/// Notification surface backed by the tracing pipeline.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Success => tracing::info!("✅ {}", message),
            Severity::Error => tracing::error!("❌ {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_blob_content() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalSink::new(dir.path().to_string_lossy().into_owned());

        let blob = ExportBlob::new(b"a,b\n1,2".to_vec(), "text/csv");
        let path = sink.save(&blob, "out.csv").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"a,b\n1,2");
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalSink::new(dir.path().to_string_lossy().into_owned());

        let blob = ExportBlob::new(b"{}".to_vec(), "application/json");
        sink.save(&blob, "out.json").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.json")]);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalSink::new(dir.path().to_string_lossy().into_owned());

        sink.save(&ExportBlob::new(b"old".to_vec(), "text/csv"), "out.csv")
            .unwrap();
        let path = sink
            .save(&ExportBlob::new(b"new".to_vec(), "text/csv"), "out.csv")
            .unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }
}
