//! ShellCheck level to target severity mapping.

use crate::models::issue::Severity;

/// Severity given to levels outside ShellCheck's known vocabulary.
pub const DEFAULT_SEVERITY: Severity = Severity::Minor;

/// Map a ShellCheck level onto the target scale.
///
/// Matching is exact and case-sensitive; anything unrecognized, including
/// the empty string, falls back to `DEFAULT_SEVERITY`.
pub fn map_level(level: &str) -> Severity {
    match level {
        "info" => Severity::Info,
        "style" => Severity::Minor,
        "warning" => Severity::Major,
        "error" => Severity::Critical,
        _ => DEFAULT_SEVERITY,
    }
}
