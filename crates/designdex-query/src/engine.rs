//! Filter engine: narrows a corpus by identifier, keyword, and status.
//!
//! Filters run as successive narrowing passes in a fixed order
//! (identifier, keyword, status). Each pass only removes records, so
//! combining filters is a logical AND. Within the keyword filter a record
//! matches if *any* of its text fields contains the keyword.

use std::borrow::Borrow;
use std::fmt;

use tracing::{debug, trace};

use designdex_core::{DocumentRecord, Status};

/// The record field a keyword matched, in checking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordField {
    Title,
    Summary,
    Keywords,
    Path,
}

impl fmt::Display for KeywordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeywordField::Title => "title",
            KeywordField::Summary => "summary",
            KeywordField::Keywords => "keywords",
            KeywordField::Path => "path",
        };
        f.write_str(name)
    }
}

/// Optional filter criteria. All unset means "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub uuid: Option<String>,
    pub keyword: Option<String>,
    pub status: Option<Status>,
}

/// Result of running a [`Query`] over a corpus.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<DocumentRecord>,
    pub total_scanned: usize,
}

impl SearchOutcome {
    #[must_use]
    pub fn count(&self) -> usize {
        self.results.len()
    }
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier filter. Empty strings are ignored.
    #[must_use]
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = non_empty(uuid.into());
        self
    }

    /// Set the keyword filter. Empty strings are ignored.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = non_empty(keyword.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uuid.is_none() && self.keyword.is_none() && self.status.is_none()
    }

    /// Case-insensitive substring match on the identifier. Records without
    /// an identifier never match.
    #[must_use]
    pub fn uuid_matches(needle: &str, doc: &DocumentRecord) -> bool {
        let needle = needle.to_lowercase();
        doc.identifier
            .as_deref()
            .is_some_and(|id| id.to_lowercase().contains(&needle))
    }

    /// First field containing `needle` (case-insensitive), checked as
    /// title, summary, each keyword, then path.
    #[must_use]
    pub fn keyword_match(needle: &str, doc: &DocumentRecord) -> Option<KeywordField> {
        let needle = needle.to_lowercase();
        let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

        if hit(&doc.title) {
            Some(KeywordField::Title)
        } else if hit(&doc.summary) {
            Some(KeywordField::Summary)
        } else if doc.keywords.iter().any(|kw| hit(kw)) {
            Some(KeywordField::Keywords)
        } else if hit(&doc.location_str()) {
            Some(KeywordField::Path)
        } else {
            None
        }
    }

    /// Apply every set filter as a narrowing pass over `documents`.
    #[must_use]
    pub fn filter<'a>(&self, documents: &'a [DocumentRecord]) -> Vec<&'a DocumentRecord> {
        let mut results: Vec<&DocumentRecord> = documents.iter().collect();
        self.narrow(&mut results);
        results
    }

    /// Run the query, consuming the corpus.
    #[must_use]
    pub fn execute(&self, documents: Vec<DocumentRecord>) -> SearchOutcome {
        let total_scanned = documents.len();
        let mut results = documents;
        self.narrow(&mut results);
        SearchOutcome {
            results,
            total_scanned,
        }
    }

    fn narrow<D: Borrow<DocumentRecord>>(&self, results: &mut Vec<D>) {
        if let Some(uuid) = &self.uuid {
            results.retain(|doc| Self::uuid_matches(uuid, doc.borrow()));
            debug!(uuid = %uuid, remaining = results.len(), "applied identifier filter");
        }

        if let Some(keyword) = &self.keyword {
            results.retain(|doc| {
                let doc: &DocumentRecord = doc.borrow();
                match Self::keyword_match(keyword, doc) {
                    Some(field) => {
                        trace!(path = %doc.location.display(), %field, "keyword matched");
                        true
                    }
                    None => false,
                }
            });
            debug!(keyword = %keyword, remaining = results.len(), "applied keyword filter");
        }

        if let Some(status) = self.status {
            results.retain(|doc| {
                let doc: &DocumentRecord = doc.borrow();
                doc.status == status
            });
            debug!(%status, remaining = results.len(), "applied status filter");
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}
