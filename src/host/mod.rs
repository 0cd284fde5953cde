//! Interfaces to the host platform: file registry and issue sink.
//!
//! The import pipeline only talks to these traits. `FileIndex` and
//! `GenericIssueReport` are the implementations the binary uses.

pub mod file_index;
pub mod generic_report;

use crate::models::file::{FileRole, InputFile};
use crate::models::issue::NormalizedIssue;

pub use file_index::FileIndex;
pub use generic_report::GenericIssueReport;

/// Lookup of the files under analysis.
pub trait FileRegistry {
    /// Exact relative-path match, restricted to files with `role`.
    fn find_file(&self, relative_path: &str, role: FileRole) -> Option<InputFile>;

    /// Language key assigned to `file`, if any.
    fn language_of(&self, file: &InputFile) -> Option<String>;

    /// Files with `role` whose language is `language`, in a stable order.
    fn files_with_language(&self, language: &str, role: FileRole) -> Vec<InputFile>;
}

/// Receiver of normalized issues.
pub trait IssueSink {
    fn submit(&mut self, issue: NormalizedIssue);
}

impl IssueSink for Vec<NormalizedIssue> {
    fn submit(&mut self, issue: NormalizedIssue) {
        self.push(issue);
    }
}
