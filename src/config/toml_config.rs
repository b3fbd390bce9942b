use crate::core::validator::UploadPolicy;
use crate::domain::ports::PolicyProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_export_formats, validate_mime_type, validate_path, validate_positive_number,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub upload: UploadSection,
    pub export: ExportSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSection {
    pub max_size_mb: u64,
    pub allowed_mime_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSection {
    pub output_path: String,
    pub formats: Vec<String>,
    pub filename_prefix: Option<String>,
}

impl TomlConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("upload.max_size_mb", self.upload.max_size_mb, 1)?;
        for mime_type in &self.upload.allowed_mime_types {
            validate_mime_type("upload.allowed_mime_types", mime_type)?;
        }
        validate_path("export.output_path", &self.export.output_path)?;
        validate_export_formats("export.formats", &self.export.formats)?;
        Ok(())
    }
}

impl PolicyProvider for TomlConfig {
    fn policy(&self) -> UploadPolicy {
        UploadPolicy::new(
            self.upload.max_size_mb * 1024 * 1024,
            self.upload.allowed_mime_types.iter().cloned(),
        )
    }

    fn output_path(&self) -> &str {
        &self.export.output_path
    }

    fn formats(&self) -> &[String] {
        &self.export.formats
    }

    fn filename_prefix(&self) -> &str {
        self.export.filename_prefix.as_deref().unwrap_or("mcq_export")
    }
}
