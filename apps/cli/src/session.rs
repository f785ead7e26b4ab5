//! Interactive quiz loop.

use crate::input::InputSource;
use crossterm::style::{style, Stylize};
use nemo_core::{check_answer, ParsedEntry, Score};
use std::io::{self, Write};

/// Colors used for feedback; disabled colors print plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn green(&self, text: &str) -> String {
        if self.enabled {
            style(text).green().to_string()
        } else {
            text.to_string()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.enabled {
            style(text).red().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Ask every entry in turn and print the final score.
///
/// End of input stops the quiz early; the score covers the entries answered
/// so far.
pub fn run<I, W>(
    entries: &[ParsedEntry],
    input: &mut I,
    out: &mut W,
    palette: Palette,
) -> io::Result<Score>
where
    I: InputSource + ?Sized,
    W: Write,
{
    let mut score = Score::start();

    for entry in entries {
        write!(out, "{} - ", entry.prompt)?;
        out.flush()?;

        let Some(typed) = input.read_answer()? else {
            writeln!(out, "\n")?;
            tracing::debug!("input closed, ending session");
            break;
        };

        let result = check_answer(entry, &typed);
        score.record(&result);
        if result.is_correct {
            writeln!(out, "{}", palette.green("Correct answer!\n"))?;
        } else {
            show_wrong_answer(out, entry, palette)?;
        }
    }

    writeln!(out, "Result: {}%", score.percent())?;
    Ok(score)
}

fn show_wrong_answer<W: Write>(out: &mut W, entry: &ParsedEntry, palette: Palette) -> io::Result<()> {
    let answers = entry
        .answers
        .iter()
        .map(|answer| palette.green(answer))
        .collect::<Vec<_>>()
        .join(" or ");
    writeln!(out, "{}Should be: {}\n", palette.red("Wrong answer!\n"), answers)
}
