use serde_json::json;
use tempfile::TempDir;
use upload_kit::{exporter, BlobSink, LocalSink, Record};

fn sample_records() -> Vec<Record> {
    let mut first = Record::new();
    first.insert("question", json!("What is 2+2?"));
    first.insert("answer", json!("4"));
    first.insert("options", json!("2, 3, 4, 5"));

    let mut second = Record::new();
    second.insert("question", json!("Capital of France?"));
    second.insert("answer", json!("Paris"));
    second.insert("options", json!("London, Paris, Rome"));

    vec![first, second]
}

#[test]
fn test_csv_export_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let sink = LocalSink::new(temp_dir.path().to_str().unwrap().to_string());

    let records = sample_records();
    let blob = exporter::csv_blob(&records);
    assert_eq!(blob.mime_type, "text/csv");

    let saved = sink.save(&blob, "questions.csv").unwrap();
    let content = std::fs::read_to_string(&saved).unwrap();

    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), "question,answer,options");
    // option lists contain commas and so come back quoted
    assert_eq!(
        lines.next().unwrap(),
        "What is 2+2?,4,\"2, 3, 4, 5\""
    );
    assert_eq!(
        lines.next().unwrap(),
        "Capital of France?,Paris,\"London, Paris, Rome\""
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_json_export_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let sink = LocalSink::new(temp_dir.path().to_str().unwrap().to_string());

    let records = sample_records();
    let blob = exporter::json_blob(&records).unwrap();
    assert_eq!(blob.mime_type, "application/json");

    let saved = sink.save(&blob, "questions.json").unwrap();
    let content = std::fs::read_to_string(&saved).unwrap();

    // pretty output with 2-space indentation
    assert!(content.starts_with("[\n  {\n"));

    let parsed: Vec<Record> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].fields["answer"], json!("4"));

    // key order survives the round trip
    let keys: Vec<&String> = parsed[0].fields.keys().collect();
    assert_eq!(keys, vec!["question", "answer", "options"]);
}

#[test]
fn test_empty_batch_exports_empty_csv() {
    let temp_dir = TempDir::new().unwrap();
    let sink = LocalSink::new(temp_dir.path().to_str().unwrap().to_string());

    let blob = exporter::csv_blob(&[]);
    let saved = sink.save(&blob, "empty.csv").unwrap();

    assert_eq!(std::fs::read(&saved).unwrap(), b"");
}

#[test]
fn test_sink_creates_missing_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("exports").join("run-1");
    let sink = LocalSink::new(nested.to_str().unwrap().to_string());

    let blob = exporter::csv_blob(&sample_records());
    let saved = sink.save(&blob, "questions.csv").unwrap();

    assert!(std::path::Path::new(&saved).exists());
    assert!(saved.ends_with("questions.csv"));
}
