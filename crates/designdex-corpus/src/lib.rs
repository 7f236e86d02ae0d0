//! # designdex-corpus
//!
//! Builds the in-memory corpus from a project directory.
//!
//! The corpus is rebuilt from disk on every run: no index is persisted
//! and nothing is cached, so results can never be stale. All access is
//! read-only.

pub mod parser;
pub mod scanner;

pub use parser::parse_document;
pub use scanner::{scan_design_documents, ScanConfig, Scanner, CANDIDATE_DIRS, DOCUMENT_EXTENSION};
