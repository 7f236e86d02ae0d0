//! DocumentRecord: the metadata extracted from one design document.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Structured metadata for a single design document.
///
/// Built fresh on every scan and never written back to disk. Wire names
/// (`path`, `uuid`, `created`, `modified`) are what report consumers see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    // === Identity ===
    #[serde(rename = "path")]
    pub location: PathBuf,
    #[serde(rename = "uuid")]
    pub identifier: Option<String>,

    // === Extracted metadata ===
    pub title: String,
    pub status: Status,

    // === Filesystem timestamps ===
    #[serde(rename = "created")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "modified")]
    pub modified_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub keywords: BTreeSet<String>,
    #[serde(default)]
    pub summary: String,
}

impl DocumentRecord {
    /// The location rendered as a string, used for substring matching
    /// and display.
    #[must_use]
    pub fn location_str(&self) -> String {
        self.location.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DocumentRecord {
        DocumentRecord {
            location: PathBuf::from("design/auth.md"),
            identifier: Some("1234abcd-0000-4000-8000-000000000000".to_string()),
            title: "Auth Design".to_string(),
            status: Status::Draft,
            created_at: Some(Utc.with_ymd_and_hms(2025, 2, 10, 0, 0, 0).unwrap()),
            modified_at: None,
            keywords: ["auth", "security"].iter().map(|s| s.to_string()).collect(),
            summary: "How login works.".to_string(),
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["path"], "design/auth.md");
        assert_eq!(value["uuid"], "1234abcd-0000-4000-8000-000000000000");
        assert_eq!(value["status"], "draft");
        assert_eq!(value["created"], "2025-02-10T00:00:00Z");
        assert!(value["modified"].is_null());
        assert_eq!(value["keywords"], serde_json::json!(["auth", "security"]));
        assert!(value.get("location").is_none());
    }

    #[test]
    fn absent_identifier_serializes_as_null() {
        let mut record = sample();
        record.identifier = None;
        let value = serde_json::to_value(record).unwrap();
        assert!(value["uuid"].is_null());
    }
}
