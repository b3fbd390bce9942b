pub mod cli;
pub mod toml_config;

use crate::core::validator::{UploadPolicy, DEFAULT_MAX_SIZE_BYTES};
use crate::domain::ports::PolicyProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_export_formats, validate_mime_type, validate_non_empty_string, validate_path,
    validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "upload-kit"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Upload validation and tabular export utilities")
)]
pub struct CliConfig {
    /// File to validate against the upload policy
    #[cfg_attr(feature = "cli", arg(long))]
    pub file: Option<String>,

    /// Declared MIME type of --file (never sniffed from content)
    #[cfg_attr(feature = "cli", arg(long, default_value = "application/pdf"))]
    pub mime_type: String,

    /// JSON file holding an array of records to export
    #[cfg_attr(feature = "cli", arg(long))]
    pub input: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./exports"))]
    pub output_path: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', default_values_t = ["csv".to_string(), "json".to_string()])
    )]
    pub formats: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "mcq_export"))]
    pub filename_prefix: String,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = 16))]
    pub max_size_mb: u64,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', default_values_t = ["application/pdf".to_string()])
    )]
    pub allowed_mime_types: Vec<String>,

    /// Policy TOML file; overrides the policy and export flags above
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file: None,
            mime_type: "application/pdf".to_string(),
            input: None,
            output_path: "./exports".to_string(),
            formats: vec!["csv".to_string(), "json".to_string()],
            filename_prefix: "mcq_export".to_string(),
            max_size_mb: DEFAULT_MAX_SIZE_BYTES / (1024 * 1024),
            allowed_mime_types: vec!["application/pdf".to_string()],
            config: None,
            verbose: false,
        }
    }
}

impl PolicyProvider for CliConfig {
    fn policy(&self) -> UploadPolicy {
        UploadPolicy::new(
            self.max_size_mb * 1024 * 1024,
            self.allowed_mime_types.iter().cloned(),
        )
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn formats(&self) -> &[String] {
        &self.formats
    }

    fn filename_prefix(&self) -> &str {
        &self.filename_prefix
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("max_size_mb", self.max_size_mb, 1)?;
        validate_path("output_path", &self.output_path)?;
        validate_export_formats("formats", &self.formats)?;
        validate_non_empty_string("filename_prefix", &self.filename_prefix)?;
        validate_mime_type("mime_type", &self.mime_type)?;
        for mime_type in &self.allowed_mime_types {
            validate_mime_type("allowed_mime_types", mime_type)?;
        }
        Ok(())
    }
}
