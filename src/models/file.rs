//! Host-side file handles.

use std::path::PathBuf;

use serde::Serialize;

/// Role the host assigns to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileRole {
    /// Source file under analysis.
    Main,
    Test,
}

/// A file known to the host's registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InputFile {
    /// Path relative to the project root, `/`-separated.
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

impl InputFile {
    pub fn new(relative_path: impl Into<String>, absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            absolute_path: absolute_path.into(),
        }
    }
}
