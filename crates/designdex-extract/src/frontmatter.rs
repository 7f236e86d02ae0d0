//! Front-matter block location.
//!
//! A document may open with a `---` delimited header:
//! ```markdown
//! ---
//! uuid: 1234abcd-0000-4000-8000-000000000000
//! title: "Auth Design"
//! status: draft
//! ---
//!
//! # Auth Design
//! ```
//!
//! The block is never parsed as YAML. Extractors search it with bounded
//! patterns instead, so a malformed header still yields whatever fields
//! can be recognised.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening `---` at the very start of the text, then everything up to the
/// first line that begins with `---`.
static BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---").expect("front-matter pattern"));

/// The whole header including the closing delimiter line.
static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\s*\n.*?\n---\s*\n").expect("front-matter header pattern"));

/// The text between the delimiters, or `None` when the document has no
/// front-matter.
pub fn block(text: &str) -> Option<&str> {
    crate::text::capture(&BLOCK, text)
}

/// The document with its front-matter header removed. Returns the input
/// unchanged when there is no complete header.
pub fn strip(text: &str) -> &str {
    match HEADER.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_extracts_header_contents() {
        let text = "---\nuuid: abc\nstatus: draft\n---\n\n# Body\n";
        assert_eq!(block(text), Some("uuid: abc\nstatus: draft"));
    }

    #[test]
    fn block_requires_delimiter_at_start() {
        assert_eq!(block("# Title\n---\nstatus: draft\n---\n"), None);
        assert_eq!(block("  ---\nstatus: draft\n---\n"), None);
    }

    #[test]
    fn block_requires_closing_delimiter() {
        assert_eq!(block("---\nstatus: draft\n"), None);
    }

    #[test]
    fn block_stops_at_first_closing_delimiter() {
        let text = "---\na: 1\n---\nbody\n---\nmore\n";
        assert_eq!(block(text), Some("a: 1"));
    }

    #[test]
    fn strip_removes_header_and_closing_line() {
        let text = "---\ntitle: X\n---\n\nFirst paragraph.\n";
        assert_eq!(strip(text), "First paragraph.\n");
    }

    #[test]
    fn strip_leaves_plain_documents_alone() {
        let text = "# Title\n\nBody.\n";
        assert_eq!(strip(text), text);
    }
}
