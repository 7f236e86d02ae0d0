//! Corpus scanner: walks the conventional design directories under a
//! project root and parses every markdown file found there.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use designdex_core::{DesignDexError, DocumentRecord, Result};

use crate::parser::parse_document;

/// Subdirectories of the project root that may hold design documents,
/// in scan order.
pub const CANDIDATE_DIRS: [&str; 8] = [
    "design",
    "designs",
    "specs",
    "specifications",
    "architecture",
    "docs/design",
    "docs/specs",
    "docs/architecture",
];

/// Extension (without the dot) a file needs to count as a document.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Where to look and what to pick up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub candidate_dirs: Vec<String>,
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            candidate_dirs: CANDIDATE_DIRS.iter().map(|d| d.to_string()).collect(),
            extension: DOCUMENT_EXTENSION.to_string(),
        }
    }
}

/// Scans one project root. Holds no state between scans.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Candidate directories that exist under `root`.
    pub fn design_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.config
            .candidate_dirs
            .iter()
            .map(|rel| root.join(rel))
            .filter(|dir| dir.is_dir())
            .collect()
    }

    /// Every document file beneath the existing candidate directories,
    /// each path listed once.
    pub fn discover(&self, root: &Path) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for dir in self.design_dirs(root) {
            debug!(dir = %dir.display(), "walking design directory");
            for entry in WalkDir::new(&dir).sort_by_file_name() {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                        continue;
                    }
                };
                // Symlinked documents count; symlinked directories are not descended.
                if !entry.path().is_file() || !self.has_document_extension(entry.path()) {
                    continue;
                }
                let path = entry.into_path();
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        files
    }

    /// Parse every discovered document into the in-memory corpus.
    ///
    /// # Errors
    ///
    /// Returns [`DesignDexError::ProjectDirNotFound`] if `root` is not an
    /// existing directory. Individual unreadable documents are skipped.
    pub fn scan(&self, root: &Path) -> Result<Vec<DocumentRecord>> {
        if !root.is_dir() {
            return Err(DesignDexError::ProjectDirNotFound(root.to_path_buf()));
        }

        let candidates = self.discover(root);
        let documents: Vec<DocumentRecord> =
            candidates.iter().filter_map(|p| parse_document(p)).collect();

        info!(
            root = %root.display(),
            candidates = candidates.len(),
            parsed = documents.len(),
            "scan complete"
        );
        Ok(documents)
    }

    fn has_document_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(self.config.extension.as_str())
    }
}

/// Scan `root` with the default candidate directories.
///
/// # Errors
///
/// See [`Scanner::scan`].
pub fn scan_design_documents(root: &Path) -> Result<Vec<DocumentRecord>> {
    Scanner::default().scan(root)
}
