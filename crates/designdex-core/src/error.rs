//! Error types for designdex.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level result type for designdex operations.
pub type Result<T> = std::result::Result<T, DesignDexError>;

/// Top-level error type for designdex.
///
/// Covers a bad scan root and report rendering. A single unreadable
/// document is never an error; the parser drops it.
#[derive(Debug, Error)]
pub enum DesignDexError {
    #[error("Project directory not found: {}", .0.display())]
    ProjectDirNotFound(PathBuf),

    #[error("serialization error: {0}")]
    Serialization(String),
}
