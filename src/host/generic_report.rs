//! Issue sink rendering SonarQube's generic external issue format.

use std::io::Write;

use serde::Serialize;

use crate::host::IssueSink;
use crate::models::issue::{IssueLocation, NormalizedIssue, Severity, REPOSITORY_SUFFIX};

/// Issue type reported for every ShellCheck finding.
const ISSUE_TYPE: &str = "CODE_SMELL";

/// Collects issues and serializes them as `{"issues": [...]}`.
#[derive(Debug, Default, Serialize)]
pub struct GenericIssueReport {
    issues: Vec<GenericIssue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenericIssue {
    engine_id: String,
    rule_id: String,
    severity: Severity,
    #[serde(rename = "type")]
    issue_type: &'static str,
    primary_location: PrimaryLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrimaryLocation {
    message: String,
    file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_range: Option<TextRange>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextRange {
    start_line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<u32>,
}

impl From<IssueLocation> for TextRange {
    fn from(location: IssueLocation) -> Self {
        match location {
            IssueLocation::Range(range) => Self {
                start_line: range.start_line,
                end_line: Some(range.end_line),
                start_column: Some(range.start_column),
                end_column: Some(range.end_column),
            },
            IssueLocation::Line { line } => Self {
                start_line: line,
                end_line: None,
                start_column: None,
                end_column: None,
            },
        }
    }
}

impl GenericIssueReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_to<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}

impl IssueSink for GenericIssueReport {
    fn submit(&mut self, issue: NormalizedIssue) {
        self.issues.push(GenericIssue {
            engine_id: REPOSITORY_SUFFIX.to_string(),
            rule_id: issue.rule_key.rule,
            severity: issue.severity,
            issue_type: ISSUE_TYPE,
            primary_location: PrimaryLocation {
                message: issue.message,
                file_path: issue.file.relative_path,
                text_range: issue.location.map(TextRange::from),
            },
        });
    }
}
