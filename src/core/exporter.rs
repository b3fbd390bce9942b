use crate::domain::model::{ExportBlob, Record};
use crate::utils::error::Result;
use chrono::Local;
use serde::Serialize;

pub const CSV_MIME_TYPE: &str = "text/csv";
pub const JSON_MIME_TYPE: &str = "application/json";

/// Converts a uniform record batch to CSV text.
///
/// Header keys come from the first record only, in insertion order. Fields
/// are quoted only when they contain a comma, with embedded quotes doubled.
/// Consumers depend on this exact output, not RFC 4180: a field holding a
/// quote or newline but no comma stays unquoted.
pub fn to_csv(records: &[Record]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let headers: Vec<&str> = first.fields.keys().map(String::as_str).collect();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(","));

    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|header| {
                let value = record
                    .fields
                    .get(*header)
                    .map(cell_text)
                    .unwrap_or_default();
                escape_cell(&value)
            })
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Pretty JSON with 2-space indentation, key order as inserted. A
/// serialization failure fails the whole call with no partial output.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn csv_blob(records: &[Record]) -> ExportBlob {
    ExportBlob::new(to_csv(records).into_bytes(), CSV_MIME_TYPE)
}

pub fn json_blob<T: Serialize>(value: &T) -> Result<ExportBlob> {
    Ok(ExportBlob::new(to_json(value)?.into_bytes(), JSON_MIME_TYPE))
}

/// Timestamped filename for exports where the caller does not supply one,
/// e.g. `mcq_export_20260826_143015.csv`.
pub fn default_filename(prefix: &str, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        Local::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn escape_cell(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    if value.contains(',') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}
