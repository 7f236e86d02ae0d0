//! Document status: a closed vocabulary plus the `unknown` sentinel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a design document.
///
/// Extraction can only ever produce one of these variants; anything it
/// does not recognise becomes [`Status::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Approved,
    Review,
    Deprecated,
    Archived,
    Unknown,
}

impl Status {
    /// Every status, sentinel last.
    pub const ALL: [Status; 6] = [
        Status::Draft,
        Status::Approved,
        Status::Review,
        Status::Deprecated,
        Status::Archived,
        Status::Unknown,
    ];

    /// Lower-case wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Approved => "approved",
            Status::Review => "review",
            Status::Deprecated => "deprecated",
            Status::Archived => "archived",
            Status::Unknown => "unknown",
        }
    }

    /// Short marker used by the human-readable summary.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Status::Approved => "[+]",
            Status::Draft => "[.]",
            Status::Deprecated => "[-]",
            _ => "[?]",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the six status names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid status '{0}': expected one of draft, approved, review, deprecated, archived, unknown")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == lowered)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
