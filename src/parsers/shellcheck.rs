//! ShellCheck JSON report parser.
//!
//! Accepts both output formats ShellCheck can produce: `--format=json`, a
//! top-level array of comments, and `--format=json1`, an object wrapping
//! the same comments under a `comments` key.

use std::io::Read;

use serde::Deserialize;

use crate::errors::AnalysisError;
use crate::models::diagnostic::Diagnostic;
use crate::parsers::Parser;

/// ShellCheck parser instance.
#[derive(Debug, Default)]
pub struct ShellCheckParser;

impl ShellCheckParser {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ShellCheckReport {
    Comments(Vec<Diagnostic>),
    Wrapped { comments: Vec<Diagnostic> },
}

impl ShellCheckReport {
    fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            Self::Comments(comments) | Self::Wrapped { comments } => comments,
        }
    }
}

impl Parser for ShellCheckParser {
    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Diagnostic>, AnalysisError> {
        // Untagged decoding buffers the whole document anyway.
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| AnalysisError::unavailable("report stream", e.to_string()))?;

        let report: ShellCheckReport = serde_json::from_slice(&data)?;
        Ok(report.into_diagnostics())
    }

    fn source_tool(&self) -> &str {
        "ShellCheck"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<Diagnostic>, AnalysisError> {
        ShellCheckParser::new().parse(&mut input.as_bytes())
    }

    #[test]
    fn parses_json_array() {
        let diagnostics = parse(
            r#"[
                {"file":"a.sh","line":3,"endLine":3,"column":1,"endColumn":5,"level":"error","code":1009,"message":"first"},
                {"file":"b.sh","line":7,"endLine":7,"column":2,"endColumn":2,"level":"style","code":2006,"message":"second"}
            ]"#,
        )
        .unwrap();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].file, "a.sh");
        assert_eq!(diagnostics[0].code, 1009);
        assert_eq!(diagnostics[1].message, "second");
    }

    #[test]
    fn parses_json1_wrapper() {
        let diagnostics = parse(
            r#"{"comments":[{"file":"a.sh","line":1,"column":1,"level":"info","code":2148,"message":"shebang"}]}"#,
        )
        .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, 2148);
    }

    #[test]
    fn empty_report_has_no_diagnostics() {
        assert!(parse("[]").unwrap().is_empty());
        assert!(parse(r#"{"comments":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let diagnostics = parse(r#"[{"code":3},{"code":1},{"code":2}]"#).unwrap();
        let codes: Vec<i64> = diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![3, 1, 2]);
    }

    #[test]
    fn ignores_unknown_fields() {
        let diagnostics = parse(
            r#"[{"file":"a.sh","line":1,"code":2086,"fix":{"replacements":[]},"extra":true}]"#,
        )
        .unwrap();
        assert_eq!(diagnostics[0].code, 2086);
    }

    #[test]
    fn rejects_truncated_input() {
        let err = parse(r#"[{"file":"a.sh","line":1"#).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn rejects_non_list_document() {
        assert!(parse(r#"{"file":"a.sh"}"#).unwrap_err().is_malformed());
        assert!(parse("42").unwrap_err().is_malformed());
        assert!(parse("").unwrap_err().is_malformed());
    }

    #[test]
    fn rejects_out_of_range_column() {
        let err = parse(r#"[{"file":"a.sh","line":5,"column":4294967296,"code":1}]"#).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn rejects_whole_report_on_one_bad_entry() {
        let err = parse(r#"[{"file":"a.sh","code":1},{"file":"b.sh","code":"x"}]"#).unwrap_err();
        assert!(err.is_malformed());
    }
}
