//! Sources of typed answers.
//!
//! Answers normally come from standard input. When the deck itself was piped
//! through standard input, answers are read from the terminal device instead.

use crate::error::SourceError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};

#[cfg(windows)]
const CONSOLE_PATH: &str = "CONIN$";
#[cfg(not(windows))]
const CONSOLE_PATH: &str = "/dev/tty";

/// Something the quiz can read answers from.
pub trait InputSource {
    /// Read one answer without its line ending. `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>>;
}

/// Line-based answers over any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineInput<StdinLock<'static>> {
    /// Answers from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl LineInput<BufReader<File>> {
    /// Answers from the terminal, for when standard input carried the deck.
    pub fn console() -> Result<Self, SourceError> {
        let file = File::open(CONSOLE_PATH).map_err(SourceError::Console)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Pick where answers come from, given whether the deck used stdin.
pub fn open(deck_used_stdin: bool) -> Result<Box<dyn InputSource>, SourceError> {
    if deck_used_stdin {
        tracing::debug!(path = CONSOLE_PATH, "reading answers from console");
        Ok(Box::new(LineInput::console()?))
    } else {
        Ok(Box::new(LineInput::stdin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_without_endings() {
        let mut input = LineInput::new(Cursor::new("bar\r\nbaz\n  qux  "));
        assert_eq!(input.read_answer().unwrap().as_deref(), Some("bar"));
        assert_eq!(input.read_answer().unwrap().as_deref(), Some("baz"));
        assert_eq!(input.read_answer().unwrap().as_deref(), Some("  qux  "));
        assert_eq!(input.read_answer().unwrap(), None);
    }

    #[test]
    fn empty_line_is_an_empty_answer() {
        let mut input = LineInput::new(Cursor::new("\n"));
        assert_eq!(input.read_answer().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_answer().unwrap(), None);
    }
}
