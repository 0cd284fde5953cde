//! Import pipeline turning a ShellCheck report into normalized issues.
//!
//! Fetches the report, parses it completely, then maps each diagnostic to
//! an analyzed file, a rule key, a location and a severity before handing
//! the issue to the sink. Report and parse failures abort the run before
//! anything is submitted; unresolvable diagnostics are skipped and recorded.

use std::io::Read;

use serde::Serialize;

use crate::config::SensorConfig;
use crate::errors::{AnalysisError, SkipReason};
use crate::host::{FileRegistry, IssueSink};
use crate::models::diagnostic::Diagnostic;
use crate::models::file::FileRole;
use crate::models::issue::{NormalizedIssue, RuleKey};
use crate::parsers::shellcheck::ShellCheckParser;
use crate::parsers::Parser;
use crate::services::report_source::ReportSource;
use crate::services::{location, severity};

/// Language the importer applies to.
pub const TARGET_LANGUAGE: &str = "bash";

/// Summary of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestionResult {
    pub source_tool: String,
    pub total_parsed: usize,
    pub emitted: usize,
    pub skipped: Vec<SkippedDiagnostic>,
}

/// A diagnostic that produced no issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDiagnostic {
    pub record_index: usize,
    pub reason: SkipReason,
}

/// Run the full import: select the report source, fetch, parse and emit.
///
/// Does nothing when the registry holds no `Main` file in `TARGET_LANGUAGE`:
/// no report is fetched, so a missing report only fails the run when there
/// are analyzed files.
pub fn run(
    config: &SensorConfig,
    registry: &dyn FileRegistry,
    sink: &mut dyn IssueSink,
) -> Result<IngestionResult, AnalysisError> {
    if registry
        .files_with_language(TARGET_LANGUAGE, FileRole::Main)
        .is_empty()
    {
        tracing::info!(language = TARGET_LANGUAGE, "No analyzed files, skipping ShellCheck import");
        return Ok(IngestionResult::default());
    }

    let source = ReportSource::select(config, registry, TARGET_LANGUAGE);
    let mut report = source.fetch()?;
    ingest_report(&mut report, registry, sink)
}

/// Parse `report` completely, then emit one issue per resolvable diagnostic.
pub fn ingest_report(
    report: &mut dyn Read,
    registry: &dyn FileRegistry,
    sink: &mut dyn IssueSink,
) -> Result<IngestionResult, AnalysisError> {
    let parser = ShellCheckParser::new();
    tracing::info!(tool = parser.source_tool(), "Parsing analysis results");
    let diagnostics = parser.parse(report)?;

    let mut result = IngestionResult {
        source_tool: parser.source_tool().to_string(),
        total_parsed: diagnostics.len(),
        ..IngestionResult::default()
    };

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        match normalize(diagnostic, registry) {
            Ok(issue) => {
                tracing::debug!(
                    file = %issue.file.relative_path,
                    rule = %issue.rule_key,
                    severity = %issue.severity,
                    "Emitting issue"
                );
                sink.submit(issue);
                result.emitted += 1;
            }
            Err(reason) => result.skipped.push(SkippedDiagnostic {
                record_index: i,
                reason,
            }),
        }
    }

    Ok(result)
}

/// Build the issue for one diagnostic, or say why there is none.
fn normalize(
    diagnostic: &Diagnostic,
    registry: &dyn FileRegistry,
) -> Result<NormalizedIssue, SkipReason> {
    let file = registry
        .find_file(&diagnostic.file, FileRole::Main)
        .ok_or_else(|| SkipReason::UnresolvedFile(diagnostic.file.clone()))?;
    let language = registry
        .language_of(&file)
        .ok_or_else(|| SkipReason::UnresolvedLanguage(file.relative_path.clone()))?;

    Ok(NormalizedIssue {
        rule_key: RuleKey::for_code(&language, diagnostic.code),
        location: location::resolve(
            diagnostic.line,
            diagnostic.column,
            diagnostic.end_line,
            diagnostic.end_column,
        ),
        severity: severity::map_level(&diagnostic.level),
        message: diagnostic.message.clone(),
        file,
    })
}
