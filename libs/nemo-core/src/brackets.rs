//! Matching of (possibly nested) delimiter pairs.

use crate::scan::{find_unescaped, is_escaped};

/// An opening/closing delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: char,
    pub close: char,
}

impl Delimiters {
    /// `(` and `)`, used for optional groups.
    pub const PARENS: Self = Self {
        open: '(',
        close: ')',
    };

    /// `[` and `]`, used for alternation groups.
    pub const SQUARE: Self = Self {
        open: '[',
        close: ']',
    };
}

/// Byte positions of a delimiter pair. Each side is `None` when not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BracketSpan {
    pub open: Option<usize>,
    pub close: Option<usize>,
}

impl BracketSpan {
    pub fn new(open: Option<usize>, close: Option<usize>) -> Self {
        Self { open, close }
    }

    /// Both positions, if the pair is complete.
    pub fn matched(&self) -> Option<(usize, usize)> {
        match (self.open, self.close) {
            (Some(open), Some(close)) => Some((open, close)),
            _ => None,
        }
    }
}

/// Find the first unescaped opening delimiter and its matching closing one.
///
/// Without an opening delimiter, the first lone unescaped closing delimiter is
/// reported instead. An opening delimiter whose depth never returns to zero is
/// reported with no closing position.
pub fn find_pair(s: &str, delims: Delimiters) -> BracketSpan {
    let Some(open) = find_unescaped(s, delims.open) else {
        return BracketSpan::new(None, find_unescaped(s, delims.close));
    };

    let mut depth = 0usize;
    for (offset, c) in s[open..].char_indices() {
        let pos = open + offset;
        if (c != delims.open && c != delims.close) || is_escaped(s, pos) {
            continue;
        }
        if c == delims.open {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return BracketSpan::new(Some(open), Some(pos));
            }
        }
    }

    BracketSpan::new(Some(open), None)
}

pub fn find_parens_pair(s: &str) -> BracketSpan {
    find_pair(s, Delimiters::PARENS)
}

pub fn find_square_pair(s: &str) -> BracketSpan {
    find_pair(s, Delimiters::SQUARE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(open: Option<usize>, close: Option<usize>) -> BracketSpan {
        BracketSpan::new(open, close)
    }

    #[test]
    fn empty_string() {
        assert_eq!(find_parens_pair(""), span(None, None));
    }

    #[test]
    fn lack_of_brackets() {
        assert_eq!(find_parens_pair("foo"), span(None, None));
    }

    #[test]
    fn lack_of_closing_bracket() {
        assert_eq!(find_parens_pair("f(x"), span(Some(1), None));
    }

    #[test]
    fn lack_of_opening_bracket() {
        assert_eq!(find_parens_pair("fx)"), span(None, Some(2)));
    }

    #[test]
    fn single_pair() {
        assert_eq!(find_parens_pair("f(x)"), span(Some(1), Some(3)));
    }

    #[test]
    fn first_of_multiple_pairs() {
        assert_eq!(find_parens_pair("f(x)(y)(z)"), span(Some(1), Some(3)));
    }

    #[test]
    fn nested_pairs() {
        assert_eq!(find_parens_pair("f(g(h(x)))"), span(Some(1), Some(9)));
    }

    #[test]
    fn swapped_brackets() {
        assert_eq!(find_parens_pair("f)x("), span(Some(3), None));
    }

    #[test]
    fn stray_closing_before_pair() {
        assert_eq!(find_parens_pair("f)(x)"), span(Some(2), Some(4)));
    }

    #[test]
    fn square_brackets() {
        assert_eq!(find_square_pair("f[x]"), span(Some(1), Some(3)));
        assert_eq!(find_square_pair("f(x)"), span(None, None));
    }

    #[test]
    fn escaped_delimiters_are_skipped() {
        assert_eq!(find_parens_pair(r"(\()"), span(Some(0), Some(3)));
        assert_eq!(find_parens_pair(r"\(x)"), span(None, Some(3)));
        assert_eq!(find_parens_pair(r"(x\)"), span(Some(0), None));
        assert_eq!(find_parens_pair(r"\\(x)"), span(Some(2), Some(4)));
    }

    #[test]
    fn matched_requires_both_sides() {
        assert_eq!(span(Some(1), Some(3)).matched(), Some((1, 3)));
        assert_eq!(span(Some(1), None).matched(), None);
        assert_eq!(span(None, Some(2)).matched(), None);
    }
}
