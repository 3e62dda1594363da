//! Per-line classification

/// Marker characters that open a structural line.
///
/// `|` opens table rows, `*` and `-` open bullet items, `#` opens headings
/// in the common lightweight plain-text markup conventions. Lines starting
/// with one of these are assumed pre-formatted and keep their own line
/// boundary.
pub const STRUCTURAL_MARKERS: [char; 4] = ['|', '*', '-', '#'];

/// Classification of a single input line.
///
/// The class of a line depends only on that line's own content; it decides
/// how the line breaks *around* the line are treated, never what the line
/// itself emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only. Line breaks around it are meaningful.
    Blank,
    /// Opens with a structural marker (table row, bullet, heading).
    /// Never joined to a neighbor.
    Structural,
    /// Ordinary wrapped text; the break before the next prose line is a
    /// formatting artifact.
    Prose,
}

/// Classify one line of input.
///
/// Trims surrounding whitespace to decide the class, but the trimming is
/// local to the decision: callers always emit the original, untrimmed
/// content. Pure and total.
pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if trimmed.starts_with(STRUCTURAL_MARKERS) {
        return LineClass::Structural;
    }

    LineClass::Prose
}
