//! Core types for flashcard entries.

use serde::{Deserialize, Serialize};

/// A parsed flashcard line: the prompt shown to the user and every accepted
/// answer, in generation order.
///
/// `answers` is empty when the line has no translations and may contain
/// duplicates or empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEntry {
    pub prompt: String,
    pub answers: Vec<String>,
}

impl ParsedEntry {
    pub fn new(prompt: impl Into<String>, answers: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    /// The answer shown first when the user gets it wrong.
    pub fn primary_answer(&self) -> Option<&str> {
        self.answers.first().map(String::as_str)
    }

    /// Exact, case-sensitive membership test.
    pub fn accepts(&self, answer: &str) -> bool {
        self.answers.iter().any(|a| a == answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ParsedEntry {
        ParsedEntry::new("dog", vec!["pies".to_string(), "piesek".to_string()])
    }

    #[test]
    fn accepts_exact_answers_only() {
        let entry = entry();
        assert!(entry.accepts("pies"));
        assert!(entry.accepts("piesek"));
        assert!(!entry.accepts("Pies"));
        assert!(!entry.accepts(" pies"));
    }

    #[test]
    fn primary_answer_is_first() {
        assert_eq!(entry().primary_answer(), Some("pies"));
        assert_eq!(ParsedEntry::new("x", vec![]).primary_answer(), None);
    }

    #[test]
    fn empty_answer_is_accepted_when_listed() {
        let entry = ParsedEntry::new("foo", vec![String::new()]);
        assert!(entry.accepts(""));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_string(&entry()).unwrap();
        assert_eq!(json, r#"{"prompt":"dog","answers":["pies","piesek"]}"#);
    }
}
