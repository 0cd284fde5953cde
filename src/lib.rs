//! Import ShellCheck diagnostics as normalized code-quality issues.
//!
//! The pipeline fetches a ShellCheck JSON report (from a file or a live
//! run), parses it, and maps every diagnostic onto a file of the host's
//! registry with a rule key, a source location and a severity.

pub mod config;
pub mod errors;
pub mod host;
pub mod models;
pub mod parsers;
pub mod services;
