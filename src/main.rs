use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use mimalloc::MiMalloc;
use shellcheck_importer::config::SensorConfig;
use shellcheck_importer::host::{FileIndex, GenericIssueReport};
use shellcheck_importer::services::ingestion::{self, TARGET_LANGUAGE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shellcheck_importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
        .init();

    let config = SensorConfig::from_env();
    let registry = FileIndex::scan(
        &config.project_dir,
        &config.source_patterns,
        &config.test_patterns,
        TARGET_LANGUAGE,
    )?;

    let mut report = GenericIssueReport::new();
    let result = ingestion::run(&config, &registry, &mut report).map_err(|e| {
        tracing::error!(error = %e, "An error occurred while importing the ShellCheck report");
        e
    })?;

    for skipped in &result.skipped {
        tracing::warn!(record_index = skipped.record_index, reason = %skipped.reason, "Diagnostic skipped");
    }
    tracing::info!(
        total_parsed = result.total_parsed,
        emitted = result.emitted,
        skipped = result.skipped.len(),
        "ShellCheck import finished"
    );

    match &config.output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            report.write_to(&mut writer)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            report.write_to(&mut stdout)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
