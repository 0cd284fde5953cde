//! Normalized issue handed to the host, with its rule key, location and severity.

use std::fmt;

use serde::Serialize;

use crate::models::file::InputFile;

/// Suffix appended to the language key to form the rule repository key.
pub const REPOSITORY_SUFFIX: &str = "shellcheck";

/// Prefix ShellCheck uses for its rule codes (`SC2086`).
pub const RULE_PREFIX: &str = "SC";

/// Target severity scale, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Minor => write!(f, "MINOR"),
            Self::Major => write!(f, "MAJOR"),
            Self::Critical => write!(f, "CRITICAL"),
            Self::Blocker => write!(f, "BLOCKER"),
        }
    }
}

/// Fully qualified rule identifier: `{repository}:{rule}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub repository: String,
    pub rule: String,
}

impl RuleKey {
    /// Build the key for a ShellCheck code in the repository of `language`.
    ///
    /// `("bash", 2086)` gives `bash-shellcheck:SC2086`.
    pub fn for_code(language: &str, code: i64) -> Self {
        Self {
            repository: format!("{}-{REPOSITORY_SUFFIX}", language.to_lowercase()),
            rule: format!("{RULE_PREFIX}{code}"),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

impl Serialize for RuleKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Non-empty source span: 1-based lines, 0-based half-open columns.
///
/// Always satisfies `end_line >= start_line`, and `end_column > start_column`
/// when both ends sit on the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedRange {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

/// Where an issue is attached inside its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueLocation {
    Range(ResolvedRange),
    /// The whole of a 1-based line.
    Line { line: u32 },
}

/// Host-facing issue built from one diagnostic.
///
/// A `location` of `None` attaches the issue to the file as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedIssue {
    pub file: InputFile,
    pub rule_key: RuleKey,
    pub location: Option<IssueLocation>,
    pub severity: Severity,
    pub message: String,
}
