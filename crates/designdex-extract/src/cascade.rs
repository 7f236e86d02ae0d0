//! Ordered rule cascades.
//!
//! Every field is extracted by a fixed table of [`Rule`]s, most structured
//! first. [`first_match`] walks the table and stops at the first rule that
//! produces a value; later rules are never evaluated.

use tracing::trace;

use crate::frontmatter;

/// Everything an extraction rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    /// Full raw document text.
    pub text: &'a str,
    /// Contents of the front-matter block, if the document has one.
    pub frontmatter: Option<&'a str>,
    /// File name (with extension) the text was read from.
    pub filename: &'a str,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str, filename: &'a str) -> Self {
        Self {
            text,
            frontmatter: frontmatter::block(text),
            filename,
        }
    }
}

/// A single named extraction strategy.
pub struct Rule<T> {
    pub name: &'static str,
    pub apply: fn(&Source<'_>) -> Option<T>,
}

impl<T> Rule<T> {
    pub const fn new(name: &'static str, apply: fn(&Source<'_>) -> Option<T>) -> Self {
        Self { name, apply }
    }
}

/// Run `rules` in order and return the first value produced.
pub fn first_match<T>(field: &'static str, rules: &[Rule<T>], source: &Source<'_>) -> Option<T> {
    rules.iter().find_map(|rule| {
        let value = (rule.apply)(source)?;
        trace!(field, rule = rule.name, file = source.filename, "extraction rule matched");
        Some(value)
    })
}
