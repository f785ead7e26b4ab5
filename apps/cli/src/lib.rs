pub mod args;
pub mod error;
pub mod input;
pub mod session;
pub mod source;

use std::io::{self, Write};

use anyhow::Context;
use chrono::Utc;
use nemo_core::{parse_line, ParsedEntry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Args;
use crate::session::Palette;
use crate::source::Deck;

/// Install the stderr log subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let Deck { lines, used_stdin } = source::read_sources(&args.files)?;
    let lines = source::select(lines, args.order, args.lines, &mut rand::thread_rng());
    tracing::info!(count = lines.len(), order = ?args.order, "loaded deck");

    let entries: Vec<ParsedEntry> = lines.iter().map(|line| parse_line(line)).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dump {
        for entry in &entries {
            serde_json::to_writer(&mut out, entry).context("failed to write entry")?;
            writeln!(out)?;
        }
        return Ok(());
    }

    if entries.is_empty() {
        tracing::warn!("no entries to ask");
        return Ok(());
    }

    let mut input = input::open(used_stdin)?;
    let palette = Palette::new(args.color_enabled());
    let score = session::run(&entries, input.as_mut(), &mut out, palette)?;

    tracing::info!(
        correct = score.correct,
        total = score.total,
        elapsed_secs = (Utc::now() - score.started_at).num_seconds(),
        "session finished"
    );

    Ok(())
}
