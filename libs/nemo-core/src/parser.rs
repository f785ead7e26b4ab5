//! Line parser for flashcard entries.
//!
//! # Format
//! ```text
//! prompt - answer | another answer
//! dog - (ten) pies
//! bark - szczeka[ć|nie]
//! a\-b - c\-d
//! ```
//!
//! The first unescaped `-` separates the prompt from the answers. Answers are
//! separated by `|`, `[a|b]` picks one of several substrings and `(x)` marks a
//! substring as optional. A backslash makes the following control character
//! literal.

use crate::expand::{alternations, optionals};
use crate::scan::{is_escaped, split_once_unescaped, split_unescaped, CONTROL_CHARS};
use crate::types::ParsedEntry;

/// Parse one raw line into its prompt and accepted answers.
///
/// Never fails: malformed groups are kept as literal text.
pub fn parse_line(raw: &str) -> ParsedEntry {
    let (prompt, blob) = split_line(raw);
    let answers = blob.map(expand_translations).unwrap_or_default();

    ParsedEntry {
        prompt: clean(prompt),
        answers,
    }
}

/// Split a raw line on its first unescaped `-`.
pub fn split_line(raw: &str) -> (&str, Option<&str>) {
    match split_once_unescaped(raw, '-') {
        Some((prompt, blob)) => (prompt, Some(blob)),
        None => (raw, None),
    }
}

/// Expand a translations blob into the final list of answers.
pub fn expand_translations(blob: &str) -> Vec<String> {
    alternations(blob)
        .into_iter()
        .flat_map(|alternative| optionals([alternative]))
        .flat_map(|variant| {
            split_unescaped(&variant, '|')
                .into_iter()
                .map(clean)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Remove the escaping backslash in front of every escaped control character.
///
/// Backslashes that do not escape a control character are kept.
pub fn decode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (pos, c) in s.char_indices() {
        if CONTROL_CHARS.contains(&c) && is_escaped(s, pos) {
            out.pop();
        }
        out.push(c);
    }
    out
}

/// Normalize whitespace in a string (trim and collapse runs to one space).
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn clean(s: &str) -> String {
    decode(&normalize_whitespace(s))
}
