//! Status extraction.
//!
//! Only the five declarable statuses are ever captured, so the result is
//! always inside the closed vocabulary; no match at all yields
//! [`Status::Unknown`].

use once_cell::sync::Lazy;
use regex::Regex;

use designdex_core::Status;

use crate::cascade::{first_match, Rule, Source};
use crate::text::capture;

const VOCABULARY: &str = "draft|approved|review|deprecated|archived";

static FRONTMATTER_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)status:\s*({VOCABULARY})")).expect("status key pattern")
});

static BOLD_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\*\*Status\*\*:\s*({VOCABULARY})")).expect("bold status pattern")
});

static PLAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)Status:\s*({VOCABULARY})")).expect("plain status pattern")
});

static DRAFT_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[DRAFT\]").expect("draft tag"));
static APPROVED_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[APPROVED\]").expect("approved tag"));
static DEPRECATED_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[DEPRECATED\]").expect("deprecated tag"));

pub const RULES: &[Rule<Status>] = &[
    Rule::new("frontmatter-status", frontmatter_key),
    Rule::new("bold-label", bold_label),
    Rule::new("plain-label", plain_label),
    Rule::new("draft-tag", draft_tag),
    Rule::new("approved-tag", approved_tag),
    Rule::new("deprecated-tag", deprecated_tag),
];

/// Extract the document status, defaulting to [`Status::Unknown`].
pub fn extract(source: &Source<'_>) -> Status {
    first_match("status", RULES, source).unwrap_or(Status::Unknown)
}

fn vocabulary_capture(re: &Regex, haystack: &str) -> Option<Status> {
    capture(re, haystack).and_then(|word| word.parse().ok())
}

fn frontmatter_key(source: &Source<'_>) -> Option<Status> {
    vocabulary_capture(&FRONTMATTER_KEY, source.frontmatter?)
}

fn bold_label(source: &Source<'_>) -> Option<Status> {
    vocabulary_capture(&BOLD_LABEL, source.text)
}

fn plain_label(source: &Source<'_>) -> Option<Status> {
    vocabulary_capture(&PLAIN_LABEL, source.text)
}

fn draft_tag(source: &Source<'_>) -> Option<Status> {
    DRAFT_TAG.is_match(source.text).then_some(Status::Draft)
}

fn approved_tag(source: &Source<'_>) -> Option<Status> {
    APPROVED_TAG.is_match(source.text).then_some(Status::Approved)
}

fn deprecated_tag(source: &Source<'_>) -> Option<Status> {
    DEPRECATED_TAG.is_match(source.text).then_some(Status::Deprecated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(text: &str) -> Status {
        extract(&Source::new(text, "doc.md"))
    }

    #[test]
    fn frontmatter_status_is_lowercased() {
        assert_eq!(status("---\nstatus: Approved\n---\n"), Status::Approved);
        assert_eq!(status("---\nSTATUS: REVIEW\n---\n"), Status::Review);
    }

    #[test]
    fn frontmatter_value_outside_vocabulary_falls_through() {
        let text = "---\nstatus: final\n---\n\n[DEPRECATED] old stuff\n";
        assert_eq!(status(text), Status::Deprecated);
    }

    #[test]
    fn bold_label_in_body() {
        assert_eq!(status("# Doc\n\n**Status**: archived\n"), Status::Archived);
    }

    #[test]
    fn plain_label_in_body() {
        assert_eq!(status("# Doc\n\nStatus: review\n"), Status::Review);
    }

    #[test]
    fn label_beats_shorthand_tag() {
        assert_eq!(status("[DRAFT]\n\nStatus: approved\n"), Status::Approved);
    }

    #[test]
    fn shorthand_tags_tried_in_fixed_order() {
        assert_eq!(status("[deprecated] and [approved]"), Status::Approved);
        assert_eq!(status("[APPROVED] [DRAFT]"), Status::Draft);
        assert_eq!(status("# Legacy Cache\n\n[DEPRECATED]\n"), Status::Deprecated);
    }

    #[test]
    fn unknown_when_nothing_matches() {
        assert_eq!(status(""), Status::Unknown);
        assert_eq!(status("# Doc\n\nStatus: shipped\n"), Status::Unknown);
        assert_eq!(status("[REVIEW] pending"), Status::Unknown);
    }
}
