//! Answer matching and session scoring.

use crate::types::ParsedEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is one of the accepted answers.
    pub is_correct: bool,
    /// The answer as typed.
    pub typed: String,
}

/// Compare a typed answer to the accepted answers of `entry`.
///
/// Matching is exact and case-sensitive; only a trailing line ending is
/// ignored.
pub fn check_answer(entry: &ParsedEntry, typed: &str) -> MatchResult {
    let typed = typed
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(typed);

    MatchResult {
        is_correct: entry.accepts(typed),
        typed: typed.to_string(),
    }
}

/// Running score of a quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub started_at: DateTime<Utc>,
}

impl Score {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            correct: 0,
            total: 0,
            started_at,
        }
    }

    /// Start a score at the current time.
    pub fn start() -> Self {
        Self::new(Utc::now())
    }

    pub fn record(&mut self, result: &MatchResult) {
        if result.is_correct {
            self.correct += 1;
        }
        self.total += 1;
    }

    /// Percentage of correct answers, rounded down; 0 when nothing was asked.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.correct * 100 / self.total
    }
}
