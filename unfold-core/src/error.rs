//! Error types for rejoining

use std::io;
use thiserror::Error;

/// Errors from driving a line source into an output sink.
///
/// Classification and the separator decision are total; the only failure
/// modes are the two I/O edges, and callers are expected to treat both as
/// unrecoverable and propagate them.
#[derive(Debug, Error)]
pub enum Error {
    /// The line source failed (including invalid UTF-8 surfaced by the
    /// reader).
    #[error("failed to read input line {line}: {source}")]
    Read {
        /// One-based number of the line that could not be read.
        line: u64,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The output sink failed.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Result type for rejoin operations.
pub type Result<T> = std::result::Result<T, Error>;
