//! # designdex-query
//!
//! Search over an in-memory corpus of design documents.
//!
//! Includes:
//! - Filter engine (identifier / keyword / status, AND-combined)
//! - Search reports (JSON result object, human-readable summary)
//! - Result formatter (JSON, Table, Markdown)

pub mod engine;
pub mod formatter;
pub mod report;

pub use engine::{KeywordField, Query, SearchOutcome};
pub use formatter::{format_report, OutputFormat};
pub use report::{ErrorReport, SearchReport, NO_DOCUMENTS_MESSAGE};
