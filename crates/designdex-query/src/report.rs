//! Search reports: the JSON object printed on stdout and the optional
//! human-readable summary.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use designdex_core::{DesignDexError, DocumentRecord, Result};

use crate::engine::SearchOutcome;

/// Message used when the scan found no documents at all.
pub const NO_DOCUMENTS_MESSAGE: &str = "No design documents found";

/// The structured result of one search.
///
/// Serializes as either
/// `{results, count, total_scanned, project_dir}` or, for an empty corpus,
/// `{results: [], count: 0, message}`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub results: Vec<DocumentRecord>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_scanned: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A failure surfaced to the caller as JSON, e.g. a missing project root.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    pub fn new(err: &DesignDexError) -> Self {
        Self {
            error: err.to_string(),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DesignDexError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(self)
    }
}

impl SearchReport {
    /// Report for a scan that found documents (possibly none matching).
    #[must_use]
    pub fn from_outcome(outcome: SearchOutcome, project_dir: &Path) -> Self {
        let count = outcome.count();
        Self {
            results: outcome.results,
            count,
            total_scanned: Some(outcome.total_scanned),
            project_dir: Some(project_dir.display().to_string()),
            message: None,
        }
    }

    /// Degenerate report for an empty corpus.
    #[must_use]
    pub fn no_documents() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            total_scanned: None,
            project_dir: None,
            message: Some(NO_DOCUMENTS_MESSAGE.to_string()),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DesignDexError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(self)
    }

    /// Human-readable summary listing each result with its status marker.
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.total_scanned.unwrap_or(0);
        let mut out = String::from("\n--- Design Search Results ---\n");
        let _ = writeln!(out, "Found: {} of {} documents", self.count, total);
        for doc in &self.results {
            let _ = writeln!(out, "  {} {}", doc.status.marker(), doc.title);
            let _ = writeln!(out, "      Path: {}", doc.location.display());
            if let Some(uuid) = &doc.identifier {
                let _ = writeln!(out, "      UUID: {uuid}");
            }
        }
        out
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| DesignDexError::Serialization(e.to_string()))
}
