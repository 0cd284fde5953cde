//! Importer configuration read from the environment.

use std::env;
use std::path::PathBuf;

/// Importer configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorConfig {
    /// Pre-generated report. When absent, ShellCheck is run live.
    pub report_path: Option<PathBuf>,
    pub project_dir: PathBuf,
    pub shellcheck_bin: String,
    pub shellcheck_args: Vec<String>,
    pub source_patterns: Vec<String>,
    pub test_patterns: Vec<String>,
    pub output_path: Option<PathBuf>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SensorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            report_path: var("SHELLCHECK_REPORT_PATH").map(PathBuf::from),
            project_dir: var("SHELLCHECK_PROJECT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            shellcheck_bin: var("SHELLCHECK_BIN").unwrap_or_else(|| "shellcheck".to_string()),
            shellcheck_args: var("SHELLCHECK_EXTRA_ARGS")
                .map(|v| v.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            source_patterns: var("SHELLCHECK_SOURCES")
                .map(|v| split_list(&v))
                .unwrap_or_else(|| vec!["**/*.sh".to_string(), "**/*.bash".to_string()]),
            test_patterns: var("SHELLCHECK_TESTS")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
            output_path: var("SHELLCHECK_OUTPUT").map(PathBuf::from),
        }
    }

    /// Report path as given, or joined onto the project directory when relative.
    pub fn resolved_report_path(&self) -> Option<PathBuf> {
        self.report_path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                self.project_dir.join(path)
            }
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
