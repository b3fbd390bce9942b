use tempfile::TempDir;
use upload_kit::utils::validation::Validate;
use upload_kit::{
    rejection_message, validate, FileDescriptor, PolicyProvider, RejectReason, TomlConfig,
};

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("policy.toml");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_policy_loaded_from_toml_drives_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[upload]
max_size_mb = 1
allowed_mime_types = ["application/pdf", "text/csv"]

[export]
output_path = "./exports"
formats = ["csv"]
"#,
    );

    let config = TomlConfig::from_path(&path).unwrap();
    config.validate().unwrap();
    let policy = config.policy();

    let small_csv = FileDescriptor {
        name: "data.csv".to_string(),
        mime_type: "text/csv".to_string(),
        size_bytes: 512,
    };
    assert!(validate(&small_csv, &policy).accepted);

    let big_pdf = FileDescriptor {
        name: "big.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        size_bytes: 2 * 1024 * 1024,
    };
    let result = validate(&big_pdf, &policy);
    assert_eq!(result.reason, RejectReason::TooLarge);
    assert_eq!(
        rejection_message(&result, &policy).unwrap(),
        "File size must be less than 1 MB."
    );

    let image = FileDescriptor {
        name: "scan.png".to_string(),
        mime_type: "image/png".to_string(),
        size_bytes: 10,
    };
    assert_eq!(validate(&image, &policy).reason, RejectReason::BadType);
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let result = TomlConfig::from_path(&missing);
    assert!(matches!(
        result,
        Err(upload_kit::UploadError::IoError(_))
    ));
}

#[test]
fn test_malformed_toml_is_a_config_file_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[upload\nmax_size_mb = ");

    let result = TomlConfig::from_path(&path);
    assert!(matches!(
        result,
        Err(upload_kit::UploadError::TomlError(_))
    ));
}
