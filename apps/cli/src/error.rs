//! Error types for the nemo binary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while sourcing deck lines or answers.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{source}: '{}'", path.display())]
    Unavailable { path: PathBuf, source: io::Error },

    #[error("no console to read answers from after reading the deck from stdin: {0}")]
    Console(#[source] io::Error),
}

impl SourceError {
    /// Process exit code for this error: the OS error number when known.
    pub fn exit_code(&self) -> u8 {
        let source = match self {
            Self::Unavailable { source, .. } | Self::Console(source) => source,
        };
        source
            .raw_os_error()
            .and_then(|code| u8::try_from(code).ok())
            .filter(|&code| code != 0)
            .unwrap_or(1)
    }
}
