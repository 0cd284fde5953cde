//! Where the raw ShellCheck report comes from.
//!
//! A run either reads a pre-generated report (`Offline`) or runs ShellCheck
//! against the analyzed files and captures its standard output (`Live`).
//! There is a single fetch attempt per run.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::SensorConfig;
use crate::errors::AnalysisError;
use crate::host::FileRegistry;
use crate::models::file::FileRole;

/// Exit codes ShellCheck uses for a completed run: 0 clean, 1 issues found.
const SHELLCHECK_OK_EXIT_CODES: [i32; 2] = [0, 1];

/// A live ShellCheck invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    /// Relative paths of the files to check, appended after `args`.
    pub files: Vec<String>,
}

/// How the report stream is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Offline(PathBuf),
    Live(LiveInvocation),
}

impl ReportSource {
    /// Offline when a report path is configured, live otherwise.
    ///
    /// Live mode checks every `Main` file in `language`.
    pub fn select(config: &SensorConfig, registry: &dyn FileRegistry, language: &str) -> Self {
        if let Some(path) = config.resolved_report_path() {
            return Self::Offline(path);
        }

        let mut args = vec!["--format=json".to_string()];
        args.extend(config.shellcheck_args.iter().cloned());

        Self::Live(LiveInvocation {
            program: config.shellcheck_bin.clone(),
            args,
            working_dir: config.project_dir.clone(),
            files: registry
                .files_with_language(language, FileRole::Main)
                .into_iter()
                .map(|f| f.relative_path)
                .collect(),
        })
    }

    /// Obtain the report stream. The stream is closed when dropped.
    pub fn fetch(&self) -> Result<Box<dyn Read>, AnalysisError> {
        match self {
            Self::Offline(path) => {
                tracing::info!(path = %path.display(), "Reading ShellCheck report");
                let file = File::open(path)
                    .map_err(|e| AnalysisError::unavailable(path.display().to_string(), e.to_string()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Live(invocation) => {
                let output = invocation.run()?;
                Ok(Box::new(Cursor::new(output)))
            }
        }
    }
}

impl LiveInvocation {
    /// Run to completion and return standard output.
    fn run(&self) -> Result<Vec<u8>, AnalysisError> {
        tracing::info!(
            program = %self.program,
            files = self.files.len(),
            working_dir = %self.working_dir.display(),
            "Running ShellCheck"
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .args(&self.files)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                AnalysisError::unavailable(&self.program, format!("failed to start: {e}"))
            })?;

        match output.status.code() {
            Some(code) if SHELLCHECK_OK_EXIT_CODES.contains(&code) => {
                tracing::debug!(exit_code = code, bytes = output.stdout.len(), "ShellCheck finished");
                Ok(output.stdout)
            }
            Some(code) => Err(AnalysisError::unavailable(
                &self.program,
                format!(
                    "exited with status {code}: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            )),
            None => Err(AnalysisError::unavailable(
                &self.program,
                "terminated by signal",
            )),
        }
    }
}
