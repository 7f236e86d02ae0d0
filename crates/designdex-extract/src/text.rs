//! Small string helpers shared by the extractors.
//!
//! All lengths here count `char`s, never bytes, so truncation cannot split
//! a multi-byte character.

use regex::Regex;

/// First capture group of `re` in `haystack`, if the pattern matches.
pub(crate) fn capture<'a>(re: &Regex, haystack: &'a str) -> Option<&'a str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The first `max_chars` characters of `s`.
pub fn prefix_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Truncate to `max_chars` characters. The flag is `true` when anything
/// was cut off.
pub fn truncate_chars(s: &str, max_chars: usize) -> (&str, bool) {
    let head = prefix_chars(s, max_chars);
    (head, head.len() < s.len())
}

/// Upper-case the first letter of every alphabetic run and lower-case the
/// rest, so `"auth DESIGN v2notes"` becomes `"Auth Design V2Notes"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
