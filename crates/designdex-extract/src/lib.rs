//! # designdex-extract
//!
//! Field extractors for markdown design documents.
//!
//! Each field has its own module with an ordered [`cascade::Rule`] table,
//! most structured source first:
//!
//! | Field | Rules |
//! |---|---|
//! | [`identifier`] | front-matter `uuid:` → inline `EAMA-UUID:` tag → early bare UUID |
//! | [`status`] | front-matter `status:` → `**Status**:` → `Status:` → `[DRAFT]`/`[APPROVED]`/`[DEPRECATED]` |
//! | [`title`] | front-matter `title:` → first `# ` heading → humanized file name |
//! | [`summary`] | front-matter `description:` → first prose paragraph |
//! | [`keywords`] | union of front-matter `keywords: [...]` and `tags: [...]` |
//!
//! Every extractor is a pure, total function of the document text (and file
//! name, for titles): a missing pattern yields the documented fallback.

pub mod cascade;
pub mod frontmatter;
pub mod identifier;
pub mod keywords;
pub mod status;
pub mod summary;
pub mod text;
pub mod title;

use std::collections::BTreeSet;

use designdex_core::Status;

pub use cascade::{Rule, Source};

/// All metadata fields extracted from one document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub identifier: Option<String>,
    pub title: String,
    pub status: Status,
    pub keywords: BTreeSet<String>,
    pub summary: String,
}

/// Run every field extractor over the same text.
pub fn extract_all(text: &str, filename: &str) -> Extracted {
    let source = Source::new(text, filename);
    Extracted {
        identifier: identifier::extract(&source),
        title: title::extract(&source),
        status: status::extract(&source),
        keywords: keywords::extract(&source),
        summary: summary::extract(&source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn frontmatter_document() {
        let text = r#"---
uuid: 1234abcd-5678-4def-8abc-0123456789ab
title: "Auth Design"
status: draft
description: Session and token handling
keywords: [auth, sessions]
tags: ["security"]
---

# Authentication

Body text.
"#;
        let got = extract_all(text, "auth.md");
        assert_eq!(
            got.identifier.as_deref(),
            Some("1234abcd-5678-4def-8abc-0123456789ab")
        );
        assert_eq!(got.title, "Auth Design");
        assert_eq!(got.status, Status::Draft);
        assert_eq!(got.summary, "Session and token handling");
        assert_eq!(
            got.keywords.into_iter().collect::<Vec<_>>(),
            ["auth", "security", "sessions"]
        );
    }

    #[test]
    fn plain_markdown_document() {
        let text = "# Legacy Cache\n\n[DEPRECATED]\n\nThe old write-through cache.\n";
        let got = extract_all(text, "legacy-cache.md");
        assert_eq!(got.identifier, None);
        assert_eq!(got.title, "Legacy Cache");
        assert_eq!(got.status, Status::Deprecated);
        assert!(got.keywords.is_empty());
        assert_eq!(got.summary, "[DEPRECATED]");
    }

    #[test]
    fn malformed_frontmatter_is_tolerated() {
        let text = "---\ntitle: [unclosed\nstatus: approved\n: : :\n---\nbody\n";
        let got = extract_all(text, "weird.md");
        assert_eq!(got.status, Status::Approved);
        assert_eq!(got.title, "[unclosed");
    }

    proptest! {
        #[test]
        fn title_is_never_empty(text in ".{0,400}", name in "[a-z_.-]{0,12}") {
            let got = extract_all(&text, &name);
            prop_assert!(!got.title.trim().is_empty());
        }

        #[test]
        fn summary_stays_within_bound(text in "(.{0,300}\n{0,3}){0,4}") {
            let summary = extract_all(&text, "doc.md").summary;
            let len = summary.chars().count();
            if summary.ends_with(summary::ELLIPSIS) {
                prop_assert!(len <= summary::MAX_SUMMARY_CHARS + summary::ELLIPSIS.len());
            } else {
                prop_assert!(len <= summary::MAX_SUMMARY_CHARS);
            }
        }

        #[test]
        fn identifier_absent_without_hex_or_tag(text in "[g-z #\n]{0,600}") {
            prop_assert_eq!(extract_all(&text, "doc.md").identifier, None);
        }

        #[test]
        fn status_always_in_vocabulary(text in ".{0,200}(status: [a-z]{0,10})?.{0,200}") {
            let status = extract_all(&text, "doc.md").status;
            prop_assert!(Status::ALL.contains(&status));
        }
    }
}
