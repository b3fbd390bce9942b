use crate::domain::model::{FileDescriptor, RejectReason, ValidationResult};
use crate::utils::format::format_size;
use std::collections::HashSet;

pub const DEFAULT_MAX_SIZE_BYTES: u64 = 16 * 1024 * 1024;

/// Upload acceptance policy. Caller-supplied configuration; the default
/// matches the MCQ Extractor upload form (16 MiB, PDF only).
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_size_bytes: u64,
    pub allowed_mime_types: HashSet<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            allowed_mime_types: HashSet::from(["application/pdf".to_string()]),
        }
    }
}

impl UploadPolicy {
    pub fn new(max_size_bytes: u64, allowed_mime_types: impl IntoIterator<Item = String>) -> Self {
        Self {
            max_size_bytes,
            allowed_mime_types: allowed_mime_types.into_iter().collect(),
        }
    }
}

/// Pure accept/reject decision. The type check precedes the size check;
/// rejections come back as data, never as errors.
pub fn validate(file: &FileDescriptor, policy: &UploadPolicy) -> ValidationResult {
    if !policy.allowed_mime_types.contains(&file.mime_type) {
        return ValidationResult::rejected(RejectReason::BadType);
    }

    if file.size_bytes > policy.max_size_bytes {
        return ValidationResult::rejected(RejectReason::TooLarge);
    }

    ValidationResult::accepted()
}

/// Message for the notification surface when a file is rejected. `None` for
/// accepted results.
pub fn rejection_message(result: &ValidationResult, policy: &UploadPolicy) -> Option<String> {
    match result.reason {
        RejectReason::None => None,
        RejectReason::BadType => {
            let mut allowed: Vec<&str> = policy
                .allowed_mime_types
                .iter()
                .map(String::as_str)
                .collect();
            allowed.sort_unstable();
            Some(format!(
                "Please select a file of an allowed type ({}).",
                allowed.join(", ")
            ))
        }
        RejectReason::TooLarge => Some(format!(
            "File size must be less than {}.",
            format_size(policy.max_size_bytes)
        )),
    }
}
