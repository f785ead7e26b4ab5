//! Helpers for whole deck texts (one entry per line).

use crate::parser::parse_line;
use crate::types::ParsedEntry;

/// Non-blank lines of `content`, without their line endings.
pub fn lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| !line.trim().is_empty())
}

/// Parse every non-blank line of `content`.
pub fn parse(content: &str) -> Vec<ParsedEntry> {
    lines(content).map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_blank_lines() {
        let content = "foo-bar\n\n   \t\nbaz-qux\r\n";
        assert_eq!(lines(content).collect::<Vec<_>>(), vec!["foo-bar", "baz-qux"]);
    }

    #[test]
    fn parses_each_line() {
        let entries = parse("dog-(ten) pies\ncat-kot\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].prompt, "dog");
        assert_eq!(entries[0].answers, vec!["pies", "ten pies"]);
        assert_eq!(entries[1], ParsedEntry::new("cat", vec!["kot".to_string()]));
    }

    #[test]
    fn empty_content() {
        assert!(parse("").is_empty());
    }
}
