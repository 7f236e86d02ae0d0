//! Keyword extraction from inline front-matter lists.
//!
//! Unlike the other fields this is a union, not a cascade: both
//! `keywords: [...]` and `tags: [...]` contribute. There is no body-level
//! heuristic, so a document without front-matter has no keywords.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cascade::Source;
use crate::text::capture;

static LISTS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"keywords:\s*\[([^\]]+)\]").expect("keywords list pattern"),
        Regex::new(r"tags:\s*\[([^\]]+)\]").expect("tags list pattern"),
    ]
});

/// Collect keywords from the front-matter `keywords` and `tags` lists.
pub fn extract(source: &Source<'_>) -> BTreeSet<String> {
    let Some(block) = source.frontmatter else {
        return BTreeSet::new();
    };

    LISTS
        .iter()
        .filter_map(|re| capture(re, block))
        .flat_map(|list| list.split(','))
        .map(|entry| entry.trim().trim_matches(['\'', '"']))
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(text: &str) -> Vec<String> {
        extract(&Source::new(text, "doc.md")).into_iter().collect()
    }

    #[test]
    fn unions_keywords_and_tags() {
        let text = "---\nkeywords: [auth, login]\ntags: [security, auth]\n---\n";
        assert_eq!(keywords(text), ["auth", "login", "security"]);
    }

    #[test]
    fn strips_whitespace_and_quotes() {
        let text = "---\nkeywords: [ \"oauth\" , 'sso',plain ]\n---\n";
        assert_eq!(keywords(text), ["oauth", "plain", "sso"]);
    }

    #[test]
    fn drops_empty_entries() {
        let text = "---\ntags: [a, , \"\"]\n---\n";
        assert_eq!(keywords(text), ["a"]);
    }

    #[test]
    fn only_inline_lists_are_read() {
        let text = "---\nkeywords:\n  - auth\n  - login\n---\n";
        assert!(keywords(text).is_empty());
    }

    #[test]
    fn body_lists_are_ignored() {
        assert!(keywords("# Doc\n\nkeywords: [auth]\n").is_empty());
        assert!(keywords("---\ntitle: X\n---\n\ntags: [auth]\n").is_empty());
    }
}
