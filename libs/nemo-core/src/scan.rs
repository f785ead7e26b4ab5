//! Escape-aware scanning for control characters.
//!
//! A control character is literal when it is preceded by an odd number of
//! consecutive backslashes. `\(` is a literal parenthesis, `\\(` is an opening
//! one (the two backslashes escape each other).

/// Characters with syntactic meaning in an entry line.
pub const CONTROL_CHARS: [char; 6] = ['-', '|', '[', ']', '(', ')'];

const ESCAPE: u8 = b'\\';

/// Check whether the character starting at byte `pos` is escaped.
///
/// Position 0 is never escaped. Positions past the end of `s` are clamped.
pub fn is_escaped(s: &str, pos: usize) -> bool {
    let bytes = s.as_bytes();
    let run = bytes[..pos.min(bytes.len())]
        .iter()
        .rev()
        .take_while(|&&b| b == ESCAPE)
        .count();
    run % 2 == 1
}

/// Find the byte position of the first unescaped `target` in `s`.
pub fn find_unescaped(s: &str, target: char) -> Option<usize> {
    s.match_indices(target)
        .map(|(pos, _)| pos)
        .find(|&pos| !is_escaped(s, pos))
}

/// Split `s` once on the first unescaped `sep`.
pub fn split_once_unescaped(s: &str, sep: char) -> Option<(&str, &str)> {
    let pos = find_unescaped(s, sep)?;
    Some((&s[..pos], &s[pos + sep.len_utf8()..]))
}

/// Split `s` on every unescaped `sep`.
///
/// Always yields at least one piece; empty pieces are kept.
pub fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (pos, _) in s.match_indices(sep) {
        if !is_escaped(s, pos) {
            parts.push(&s[start..pos]);
            start = pos + sep.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}
