//! Error taxonomy for a single import run.
//!
//! `AnalysisError` is fatal: the whole run stops before any issue is
//! submitted. `SkipReason` is per-diagnostic: the diagnostic is dropped and
//! the run carries on with the next one.

use serde::Serialize;

/// Fatal failure of an import run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Report unavailable ({origin}): {reason}")]
    ReportUnavailable { origin: String, reason: String },

    #[error("Malformed report: {0}")]
    MalformedReport(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn unavailable(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReportUnavailable {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Check if the report stream could not be obtained.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ReportUnavailable { .. })
    }

    /// Check if the report was read but could not be decoded.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedReport(_))
    }
}

/// Why a single diagnostic produced no issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    #[error("No analyzed file matches '{0}'")]
    UnresolvedFile(String),

    #[error("File '{0}' has no assigned language")]
    UnresolvedLanguage(String),
}
