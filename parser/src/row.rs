//! Row parsing.

use navtable_core::{Navlink, NavigationTableParseError, TableRow};

use crate::patterns::PATTERNS;

/// Parses a data row line into a [`TableRow`].
///
/// The grammar is `| <level> | <path> | [<title>](<link>) |`, where whitespace
/// around every field is ignored and text after the closing pipe is ignored.
/// An empty link parses to a navlink without a link target.
///
/// # Errors
///
/// Returns [`NavigationTableParseError::InvalidRow`] when the line does not
/// follow the grammar, and [`NavigationTableParseError::LevelOutOfRange`] when
/// the level does not fit a `u64`. Lines produced by
/// [`extract_rows`](crate::extract_rows) have already been classified as rows,
/// so only direct callers see the first variant.
///
/// # Examples
///
/// ```
/// use navtable_parser::parse_row;
///
/// let row = parse_row("| 2 | page-1 | [Page 1](group-1/page-1) |").unwrap();
/// assert_eq!(row.level(), 2);
/// assert_eq!(row.path(), "page-1");
/// assert_eq!(row.navlink().title(), "Page 1");
/// assert_eq!(row.navlink().link(), Some("group-1/page-1"));
///
/// assert!(parse_row("| Level | Path | Navlink |").is_err());
/// ```
pub fn parse_row(line: &str) -> Result<TableRow, NavigationTableParseError> {
    let Some(caps) = PATTERNS.row.captures(line) else {
        return Err(NavigationTableParseError::InvalidRow {
            line: line.to_string(),
        });
    };

    let level_text = &caps[1];
    let level = level_text
        .parse::<u64>()
        .map_err(|_| NavigationTableParseError::LevelOutOfRange {
            level: level_text.to_string(),
            line: line.to_string(),
        })?;

    let navlink = Navlink::new(&caps[3], Some(&caps[4]));
    Ok(TableRow::new(level, &caps[2], navlink))
}
