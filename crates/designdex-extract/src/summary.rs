//! Summary extraction: front-matter `description:`, else the first prose
//! paragraph of the body.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cascade::{first_match, Rule, Source};
use crate::frontmatter;
use crate::text::{capture, truncate_chars};

/// Maximum summary length in characters, before any ellipsis.
pub const MAX_SUMMARY_CHARS: usize = 200;

/// Appended when a body paragraph was cut to [`MAX_SUMMARY_CHARS`].
pub const ELLIPSIS: &str = "...";

static DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)description:\s*["']?(.+?)["']?\s*$"#).expect("description key pattern")
});

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n+").expect("paragraph break pattern"));

pub const RULES: &[Rule<String>] = &[
    Rule::new("frontmatter-description", description),
    Rule::new("first-paragraph", first_paragraph),
];

/// Extract a short summary; empty when nothing qualifies.
pub fn extract(source: &Source<'_>) -> String {
    first_match("summary", RULES, source).unwrap_or_default()
}

fn description(source: &Source<'_>) -> Option<String> {
    let value = capture(&DESCRIPTION, source.frontmatter?)?.trim();
    if value.is_empty() {
        return None;
    }
    let (head, _) = truncate_chars(value, MAX_SUMMARY_CHARS);
    Some(head.to_string())
}

fn is_prose(paragraph: &str) -> bool {
    !paragraph.is_empty()
        && !paragraph.starts_with('#')
        && !paragraph.starts_with('-')
        && !paragraph.starts_with("```")
}

fn first_paragraph(source: &Source<'_>) -> Option<String> {
    let body = frontmatter::strip(source.text);
    let paragraph = PARAGRAPH_BREAK
        .split(body)
        .map(str::trim)
        .find(|p| is_prose(p))?;

    let (head, truncated) = truncate_chars(paragraph, MAX_SUMMARY_CHARS);
    let mut summary = head.to_string();
    if truncated {
        summary.push_str(ELLIPSIS);
    }
    Some(summary)
}
