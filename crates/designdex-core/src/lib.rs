//! # designdex-core
//!
//! Core types shared by every designdex crate:
//! - [`DocumentRecord`]: the metadata extracted from one design document
//! - [`Status`]: the closed status vocabulary
//! - Error hierarchy ([`DesignDexError`], [`Result`])

pub mod document;
pub mod error;
pub mod status;

pub use document::DocumentRecord;
pub use error::{DesignDexError, Result};
pub use status::{ParseStatusError, Status};
