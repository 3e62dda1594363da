//! The merge state machine
//!
//! Decides, for each adjacent pair of input lines, whether the break
//! between them is meaningful. The decision itself ([`separator`]) is a
//! pure function over the previous line and the two classes; [`Rejoiner`]
//! threads it over an output sink with the single two-line window as its
//! only state.

use std::io::{BufRead, Write};

use crate::classify::{classify, LineClass};
use crate::error::{Error, Result};

/// What to emit between two adjacent lines' content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Join the pair with a single space (wrapped prose).
    Space,
    /// Join the pair with nothing extra (the previous line already ends
    /// in a space).
    Nothing,
    /// The break is meaningful; end the output line.
    LineBreak,
}

/// Decide the separator between `previous` and the current line.
///
/// Two prose lines join; every other pair keeps its line break. The match
/// is exhaustive over the class pair, so the join and break rules are
/// jointly exhaustive and mutually exclusive by construction.
pub fn separator(
    previous: &str,
    previous_class: LineClass,
    current_class: LineClass,
) -> Separator {
    match (previous_class, current_class) {
        (LineClass::Prose, LineClass::Prose) => {
            // The check is for the ASCII space character only, matching
            // the single normalized joining space this crate emits.
            if previous.ends_with(' ') {
                Separator::Nothing
            } else {
                Separator::Space
            }
        }
        (LineClass::Blank | LineClass::Structural, _)
        | (_, LineClass::Blank | LineClass::Structural) => Separator::LineBreak,
    }
}

/// Counters for one rejoin run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejoinStats {
    /// Input lines consumed.
    pub lines_in: u64,
    /// Output line breaks emitted.
    pub lines_out: u64,
    /// Input line breaks collapsed into joins.
    pub joins: u64,
}

/// Streaming line rejoiner writing to an output sink.
///
/// Feed it lines without their terminators, then call [`finish`] to flush
/// the final buffered line. The only state is the previous line and its
/// class; the first fed line is buffered without emitting anything, and
/// `finish` emits the last line with a trailing newline, so neither end of
/// the stream is mishandled.
///
/// [`finish`]: Rejoiner::finish
#[derive(Debug)]
pub struct Rejoiner<W: Write> {
    writer: W,
    window: Option<(String, LineClass)>,
    stats: RejoinStats,
}

impl<W: Write> Rejoiner<W> {
    /// Create a rejoiner with an unset window.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            window: None,
            stats: RejoinStats::default(),
        }
    }

    /// Process one input line (content only, no terminator).
    ///
    /// Emits the *previous* line's raw content followed by the separator
    /// decided against the current line, then buffers the current line.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        let class = classify(line);

        if let Some((previous, previous_class)) = self.window.take() {
            self.writer.write_all(previous.as_bytes())?;
            match separator(&previous, previous_class, class) {
                Separator::Space => {
                    self.writer.write_all(b" ")?;
                    self.stats.joins += 1;
                }
                Separator::Nothing => {
                    self.stats.joins += 1;
                }
                Separator::LineBreak => {
                    self.writer.write_all(b"\n")?;
                    self.stats.lines_out += 1;
                }
            }
        }

        self.window = Some((line.to_owned(), class));
        self.stats.lines_in += 1;
        Ok(())
    }

    /// Flush the final buffered line with a trailing newline.
    ///
    /// A rejoiner that was never fed emits nothing.
    pub fn finish(mut self) -> Result<RejoinStats> {
        if let Some((previous, _)) = self.window.take() {
            self.writer.write_all(previous.as_bytes())?;
            self.writer.write_all(b"\n")?;
            self.stats.lines_out += 1;
        }
        self.writer.flush()?;
        Ok(self.stats)
    }

    /// Counters so far.
    pub fn stats(&self) -> RejoinStats {
        self.stats
    }
}

/// Rejoin an entire input stream into an output sink.
///
/// Splits the input on `\n` only; a stray `\r` from CR/LF input is carried
/// through as line content (such input is unsupported, pre-convert it).
pub fn rejoin_stream<R: BufRead, W: Write>(mut reader: R, writer: W) -> Result<RejoinStats> {
    let mut rejoiner = Rejoiner::new(writer);
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let read = reader.read_line(&mut buffer).map_err(|source| Error::Read {
            line: rejoiner.stats().lines_in + 1,
            source,
        })?;
        if read == 0 {
            break;
        }
        let line = buffer.strip_suffix('\n').unwrap_or(&buffer);
        rejoiner.feed(line)?;
    }

    rejoiner.finish()
}

/// Rejoin a string in memory.
///
/// Empty input maps to empty output; any other input ends with exactly one
/// trailing newline.
pub fn rejoin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut window: Option<(&str, LineClass)> = None;

    for current in text.lines() {
        let class = classify(current);
        if let Some((previous, previous_class)) = window {
            out.push_str(previous);
            match separator(previous, previous_class, class) {
                Separator::Space => out.push(' '),
                Separator::Nothing => {}
                Separator::LineBreak => out.push('\n'),
            }
        }
        window = Some((current, class));
    }

    if let Some((previous, _)) = window {
        out.push_str(previous);
        out.push('\n');
    }

    out
}
