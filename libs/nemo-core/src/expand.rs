//! Expansion of alternation (`[a|b]`) and optional (`(x)`) groups.
//!
//! Both expanders work on an explicit worklist: the entry at the cursor is
//! replaced in place by its expansions and re-scanned until it holds no
//! further complete group, then the cursor moves on.

use crate::brackets::{find_pair, Delimiters};
use crate::scan::is_escaped;

/// Expand every `[...]` alternation group in `s`.
///
/// Groups combine left to right: `"[a|b][c|d]"` gives `ac, ad, bc, bd`.
/// Unmatched brackets are kept as literal text.
pub fn alternations(s: &str) -> Vec<String> {
    let mut work = vec![s.to_string()];
    let mut i = 0;

    while i < work.len() {
        match find_pair(&work[i], Delimiters::SQUARE).matched() {
            Some((open, close)) => {
                let expanded = substitute_alternatives(&work[i], open, close);
                work.splice(i..=i, expanded);
            }
            None => i += 1,
        }
    }

    work
}

fn substitute_alternatives(s: &str, open: usize, close: usize) -> Vec<String> {
    let head = &s[..open];
    let tail = &s[close + 1..];
    split_alternatives(&s[open + 1..close])
        .into_iter()
        .map(|alt| format!("{head}{alt}{tail}"))
        .collect()
}

/// Split the content of an alternation group on top-level `|`.
///
/// A `|` inside a nested `[...]` group or an escaped `|` does not split.
pub fn split_alternatives(content: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (pos, c) in content.char_indices() {
        if !matches!(c, '[' | ']' | '|') || is_escaped(content, pos) {
            continue;
        }
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                parts.push(&content[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }

    parts.push(&content[start..]);
    parts
}

/// Expand every `(...)` optional group in each of `items`.
///
/// Each group doubles its string: first without the group, then with the
/// group's content kept. Unmatched parentheses are kept as literal text.
pub fn optionals<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut work: Vec<String> = items.into_iter().collect();
    let mut i = 0;

    while i < work.len() {
        match find_pair(&work[i], Delimiters::PARENS).matched() {
            Some((open, close)) => {
                let (without, with) = split_optional(&work[i], open, close);
                work[i] = without;
                work.insert(i + 1, with);
            }
            None => i += 1,
        }
    }

    work
}

/// Split `s` around the optional group delimited by `open` and `close`.
///
/// Returns `(without_group, with_group_content)`.
pub fn split_optional(s: &str, open: usize, close: usize) -> (String, String) {
    let head = &s[..open];
    let tail = &s[close + 1..];
    let without = format!("{head}{tail}");
    let with = format!("{head}{}{tail}", &s[open + 1..close]);
    (without, with)
}
