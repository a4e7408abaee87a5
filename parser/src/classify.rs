//! Line classification.
//!
//! Classification is lenient: anything that is not a header, filler or data
//! row is skipped without error. Only lines classified as [`LineKind::Row`]
//! reach the row parser.

use crate::patterns::PATTERNS;

/// Kind of a line inside a located table span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `| Level | Path | Navlink |`
    Header,
    /// `| --- | --- | --- |`
    Filler,
    /// A data row to hand to [`parse_row`](crate::parse_row).
    Row,
    /// Blank lines, prose and anything else that is not part of the grammar.
    Skip,
}

/// Classifies one line of a table span.
///
/// Header and filler patterns are checked before the row pattern.
///
/// # Examples
///
/// ```
/// use navtable_parser::{classify, LineKind};
///
/// assert_eq!(classify("| Level | Path | Navlink |"), LineKind::Header);
/// assert_eq!(classify("| -- | -- | -- |"), LineKind::Filler);
/// assert_eq!(classify("| 1 | group-1 | [Group 1]() |"), LineKind::Row);
/// assert_eq!(classify("Some intro text."), LineKind::Skip);
/// ```
pub fn classify(line: &str) -> LineKind {
    if PATTERNS.header.is_match(line) {
        LineKind::Header
    } else if PATTERNS.filler.is_match(line) {
        LineKind::Filler
    } else if PATTERNS.row.is_match(line) {
        LineKind::Row
    } else {
        LineKind::Skip
    }
}
