//! Loading deck lines from files or standard input.

use crate::args::{Order, STDIN_PATH};
use crate::error::SourceError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Non-blank lines gathered from every source, in file order.
#[derive(Debug, Default)]
pub struct Deck {
    pub lines: Vec<String>,
    /// Whether standard input was consumed for deck content.
    pub used_stdin: bool,
}

/// Read every source in turn. `-` reads standard input.
pub fn read_sources(files: &[PathBuf]) -> Result<Deck, SourceError> {
    let mut deck = Deck::default();

    for path in files {
        let content = if path.as_os_str() == STDIN_PATH {
            deck.used_stdin = true;
            read_stdin().map_err(|source| SourceError::Unavailable {
                path: path.clone(),
                source,
            })?
        } else {
            read_file(path)?
        };

        let before = deck.lines.len();
        deck.lines
            .extend(nemo_core::deck::lines(&content).map(str::to_owned));
        tracing::debug!(
            path = %path.display(),
            lines = deck.lines.len() - before,
            "read deck source"
        );
    }

    Ok(deck)
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> io::Result<String> {
    let mut content = String::new();
    io::stdin().lock().read_to_string(&mut content)?;
    Ok(content)
}

/// Arrange `lines` in the requested order and keep at most `limit` of them.
pub fn select<R: Rng + ?Sized>(
    mut lines: Vec<String>,
    order: Order,
    limit: Option<usize>,
    rng: &mut R,
) -> Vec<String> {
    if order == Order::Random {
        lines.shuffle(rng);
    }
    if let Some(limit) = limit {
        lines.truncate(limit);
    }
    lines
}
