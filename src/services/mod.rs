//! Import pipeline services.

pub mod ingestion;
pub mod location;
pub mod report_source;
pub mod severity;
