use crate::utils::error::{Result, UploadError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// A declared MIME type must look like `type/subtype`. No registry lookup,
/// just shape: exactly one slash with non-empty halves.
pub fn validate_mime_type(field_name: &str, mime_type: &str) -> Result<()> {
    let mut parts = mime_type.splitn(2, '/');
    let main = parts.next().unwrap_or("");
    let sub = parts.next().unwrap_or("");

    if main.is_empty() || sub.is_empty() || sub.contains('/') {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: mime_type.to_string(),
            reason: "MIME type must have the form type/subtype".to_string(),
        });
    }
    Ok(())
}

pub fn validate_export_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one export format is required".to_string(),
        });
    }

    for format in formats {
        match format.as_str() {
            "csv" | "json" => {}
            other => {
                return Err(UploadError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: other.to_string(),
                    reason: "Supported export formats: csv, json".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
