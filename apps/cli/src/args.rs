//! Command-line arguments.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "nemo")]
#[command(version, about = "Quiz yourself on flashcard lines", long_about = None)]
pub struct Args {
    /// Deck files, one entry per line; `-` reads standard input
    #[arg(value_name = "FILE", default_value = STDIN_PATH)]
    pub files: Vec<PathBuf>,

    /// Load NUM lines, or all of them if NUM is greater than the number of lines
    #[arg(short = 'n', long = "lines", value_name = "NUM")]
    pub lines: Option<usize>,

    /// Order in which lines are asked
    #[arg(short, long, value_enum, default_value_t = Order::Random, env = "NEMO_ORDER")]
    pub order: Order,

    /// Print parsed entries as JSON lines instead of running a quiz
    #[arg(long, default_value_t = false)]
    pub dump: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    Random,
    File,
}

impl Args {
    /// Whether feedback should be colored. `NO_COLOR` also disables it.
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
