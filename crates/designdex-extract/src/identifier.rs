//! Identifier (UUID) extraction.
//!
//! Rules, in order:
//! 1. `uuid:` key inside the front-matter block
//! 2. an explicit `EAMA-UUID:` tag anywhere in the text
//! 3. a bare `8-4-4-4-12` hex token within the first 500 characters
//!
//! The third rule is windowed so that an unrelated UUID deep in a document
//! (a log excerpt, an example payload) is not mistaken for its identity.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cascade::{first_match, Rule, Source};
use crate::text::{capture, prefix_chars};

/// Inline tag recognised by [`inline_tag`].
pub const INLINE_TAG: &str = "EAMA-UUID";

/// How far into the document a bare UUID-shaped token is accepted.
pub const EARLY_WINDOW_CHARS: usize = 500;

static FRONTMATTER_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)uuid:\s*([a-f0-9-]+)").expect("uuid key pattern"));

static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i){INLINE_TAG}:\s*([a-f0-9-]+)")).expect("inline uuid tag pattern")
});

static UUID_SHAPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12})\b")
        .expect("uuid shape pattern")
});

pub const RULES: &[Rule<String>] = &[
    Rule::new("frontmatter-uuid", frontmatter_key),
    Rule::new("inline-tag", inline_tag),
    Rule::new("early-uuid", early_uuid),
];

/// Extract the document identifier, case preserved.
pub fn extract(source: &Source<'_>) -> Option<String> {
    first_match("identifier", RULES, source)
}

fn frontmatter_key(source: &Source<'_>) -> Option<String> {
    capture(&FRONTMATTER_KEY, source.frontmatter?).map(str::to_string)
}

fn inline_tag(source: &Source<'_>) -> Option<String> {
    capture(&INLINE, source.text).map(str::to_string)
}

fn early_uuid(source: &Source<'_>) -> Option<String> {
    let window = prefix_chars(source.text, EARLY_WINDOW_CHARS);
    capture(&UUID_SHAPED, window).map(str::to_string)
}
