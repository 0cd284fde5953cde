//! Linter report parsers.
//!
//! Each parser implements the `Parser` trait, decoding a raw report stream
//! into the ordered list of `Diagnostic` records it contains.

pub mod shellcheck;

use std::io::Read;

use crate::errors::AnalysisError;
use crate::models::diagnostic::Diagnostic;

/// Trait for pluggable linter report parsers.
pub trait Parser {
    /// Decode the whole report. Fails without partial results on any
    /// structural error.
    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Diagnostic>, AnalysisError>;

    /// The linter this parser handles.
    fn source_tool(&self) -> &str;
}
