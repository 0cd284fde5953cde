//! Domain models: raw linter diagnostics, host files and normalized issues.

pub mod diagnostic;
pub mod file;
pub mod issue;
