//! Document parser: one file in, at most one [`DocumentRecord`] out.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tracing::debug;

use designdex_core::DocumentRecord;
use designdex_extract::extract_all;

/// Parse a design document at `path`.
///
/// Returns `None` when the file cannot be stat'ed or read as UTF-8. A bad
/// document is dropped from the corpus, never reported as an error.
pub fn parse_document(path: &Path) -> Option<DocumentRecord> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping document: cannot stat");
            return None;
        }
    };

    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping document: cannot read");
            return None;
        }
    };

    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let extracted = extract_all(&text, filename);

    let modified_at = metadata.modified().ok().map(to_utc);
    let created_at = metadata.created().ok().map(to_utc).or(modified_at);

    Some(DocumentRecord {
        location: path.to_path_buf(),
        identifier: extracted.identifier,
        title: extracted.title,
        status: extracted.status,
        created_at,
        modified_at,
        keywords: extracted.keywords,
        summary: extracted.summary,
    })
}

fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}
