//! Core library for `nemo` flashcard lines.
//!
//! Provides:
//! - Escape-aware scanning of control characters
//! - Bracket-pair matching for `(...)` and `[...]` groups
//! - Alternation and optional group expansion
//! - The line parser turning one raw line into a prompt and its answers
//! - Answer matching and session scoring

pub mod brackets;
pub mod deck;
pub mod expand;
pub mod matching;
pub mod parser;
pub mod scan;
pub mod types;

pub use brackets::{find_pair, BracketSpan, Delimiters};
pub use expand::{alternations, optionals, split_optional};
pub use matching::{check_answer, MatchResult, Score};
pub use parser::{decode, parse_line};
pub use scan::{find_unescaped, is_escaped, CONTROL_CHARS};
pub use types::ParsedEntry;
