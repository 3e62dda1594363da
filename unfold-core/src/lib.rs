//! Rejoin hard-wrapped plain text into logical lines.
//!
//! A lot of plain-text and almost-plain-text documents are prematurely
//! formatted: their authors (or the standard `fold` tool) broke lines at a
//! presentational width, so most line breaks carry no meaning. That makes
//! it hard for downstream tooling to work with the real units of the text,
//! sentences and paragraphs. This crate roughly reverses that formatting:
//! it classifies every line as blank, structural markup (table rows,
//! bullets, headings), or prose, keeps the line breaks around the first
//! two, and collapses the breaks inside runs of prose into single joining
//! spaces.
//!
//! Input is expected to use Unix (`\n`) line termination. CR/LF input is
//! not understood; convert it first with something like `fromdos`.

#![warn(missing_docs)]

mod classify;
mod error;
mod rejoin;

pub use classify::{classify, LineClass, STRUCTURAL_MARKERS};
pub use error::{Error, Result};
pub use rejoin::{rejoin, rejoin_stream, separator, RejoinStats, Rejoiner, Separator};
