//! Title extraction: front-matter `title:`, then the first H1 heading,
//! then a humanized file name. Never empty.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cascade::{first_match, Rule, Source};
use crate::text::{capture, title_case};

/// Last-resort title when even the file name is blank.
pub const UNTITLED: &str = "Untitled";

static FRONTMATTER_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)title:\s*["']?(.+?)["']?\s*$"#).expect("title key pattern")
});

static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("h1 pattern"));

pub const RULES: &[Rule<String>] = &[
    Rule::new("frontmatter-title", frontmatter_key),
    Rule::new("h1-heading", first_heading),
    Rule::new("filename", humanized_filename),
];

/// Extract the document title.
pub fn extract(source: &Source<'_>) -> String {
    first_match("title", RULES, source).unwrap_or_else(|| UNTITLED.to_string())
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn frontmatter_key(source: &Source<'_>) -> Option<String> {
    capture(&FRONTMATTER_KEY, source.frontmatter?).and_then(non_empty)
}

fn first_heading(source: &Source<'_>) -> Option<String> {
    capture(&H1, source.text).and_then(non_empty)
}

fn humanized_filename(source: &Source<'_>) -> Option<String> {
    let stem = Path::new(source.filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(source.filename);
    non_empty(&title_case(&stem.replace(['-', '_'], " ")))
}
