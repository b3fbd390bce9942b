use clap::Parser;
use upload_kit::utils::{logger, validation::Validate};
use upload_kit::{
    exporter, rejection_message, validate, BlobSink, CliConfig, FileDescriptor, LocalSink,
    Notifier, PolicyProvider, Record, Severity, TomlConfig, TracingNotifier,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting upload-kit CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // TOML policy file overrides the flag-based policy when present
    let provider: Box<dyn PolicyProvider> = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_path(path)?;
            config.validate()?;
            tracing::info!("📄 Loaded policy from {}", path);
            Box::new(config)
        }
        None => Box::new(cli.clone()),
    };

    let notifier = TracingNotifier;
    let sink = LocalSink::new(provider.output_path().to_string());

    if let Some(path) = &cli.file {
        if !check_file(path, &cli.mime_type, provider.as_ref(), &notifier)? {
            std::process::exit(1);
        }
    }

    if let Some(input) = &cli.input {
        export_records(input, provider.as_ref(), &sink, &notifier)?;
    }

    if cli.file.is_none() && cli.input.is_none() {
        tracing::warn!("Nothing to do: pass --file to validate or --input to export");
    }

    Ok(())
}

fn check_file(
    path: &str,
    mime_type: &str,
    provider: &dyn PolicyProvider,
    notifier: &dyn Notifier,
) -> anyhow::Result<bool> {
    let metadata = std::fs::metadata(path)?;
    let name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    let file = FileDescriptor {
        name,
        mime_type: mime_type.to_string(),
        size_bytes: metadata.len(),
    };

    let policy = provider.policy();
    let result = validate(&file, &policy);

    match rejection_message(&result, &policy) {
        None => {
            notifier.notify(
                &format!(
                    "{} ({}) accepted for upload",
                    file.name,
                    upload_kit::format_size(file.size_bytes)
                ),
                Severity::Success,
            );
            Ok(true)
        }
        Some(message) => {
            notifier.notify(&message, Severity::Error);
            Ok(false)
        }
    }
}

fn export_records(
    input: &str,
    provider: &dyn PolicyProvider,
    sink: &dyn BlobSink,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)?;
    let records: Vec<Record> = serde_json::from_str(&content)?;
    tracing::info!("Loaded {} records from {}", records.len(), input);

    for format in provider.formats() {
        let (blob, filename) = match format.as_str() {
            "csv" => (
                exporter::csv_blob(&records),
                exporter::default_filename(provider.filename_prefix(), "csv"),
            ),
            "json" => (
                exporter::json_blob(&records)?,
                exporter::default_filename(provider.filename_prefix(), "json"),
            ),
            other => {
                // config validation keeps this unreachable for known providers
                tracing::warn!("Skipping unsupported export format: {}", other);
                continue;
            }
        };

        let saved = sink.save(&blob, &filename)?;
        notifier.notify(&format!("Export saved to {}", saved), Severity::Success);
        println!("📁 {}", saved);
    }

    Ok(())
}
