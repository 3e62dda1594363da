//! `unfold` — rejoin hard-wrapped plain text.
//!
//! Reads all of standard input, collapses the non-semantic line breaks,
//! and writes the result to standard output. There are no flags and no
//! configuration; diagnostics go to stderr via `RUST_LOG`. Input must use
//! Unix line termination (see the `unfold-core` crate docs).

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use unfold_core::rejoin_stream;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    let stats = rejoin_stream(stdin.lock(), writer)
        .context("failed to rejoin standard input")?;

    log::debug!(
        "read {} lines, wrote {} lines, collapsed {} breaks",
        stats.lines_in,
        stats.lines_out,
        stats.joins
    );

    Ok(())
}
