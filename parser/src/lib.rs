//! Navigation table extraction from markdown documentation pages.
//!
//! A documentation index page carries its hierarchy as a three-column markdown
//! table:
//!
//! ```text
//! | Level | Path    | Navlink                  |
//! | ----- | ------- | ------------------------ |
//! | 1     | group-1 | [Group 1]()              |
//! | 2     | page-1  | [Page 1](group-1/page-1) |
//! ```
//!
//! Extraction runs in three stages:
//!
//! 1. [`locate`] finds the table span by its `level | path | navlink` header.
//!    A page without that header is a table without rows, not an error.
//! 2. [`classify`] sorts each line into header, filler, row or skip. Prose,
//!    blank lines and malformed lines are skipped silently.
//! 3. [`parse_row`] turns each row line into a [`TableRow`].
//!
//! [`extract_rows`] chains the stages into a lazy iterator. [`Extractor`] does
//! the same behind a configurable page size limit, and [`diagnose`] reports
//! what classification skipped.
//!
//! # Example
//!
//! ```
//! use navtable_core::{Navlink, TableRow};
//! use navtable_parser::extract_rows;
//!
//! let page = "\
//! Some intro text.
//!
//! | Level | Path | Navlink |
//! | -- | -- | -- |
//! | 1 | group-1 | [Group 1]() |
//! | 2 | page-1 | [Page 1](group-1/page-1) |
//! ";
//!
//! let rows: Vec<TableRow> = extract_rows(page).collect::<Result<_, _>>().unwrap();
//! assert_eq!(
//!     rows,
//!     vec![
//!         TableRow::new(1, "group-1", Navlink::group("Group 1")),
//!         TableRow::new(2, "page-1", Navlink::new("Page 1", Some("group-1/page-1"))),
//!     ]
//! );
//! ```

mod classify;
mod config;
mod diagnostics;
mod error;
mod lines;
mod locate;
mod patterns;
mod row;

use std::fmt;
use std::iter::FusedIterator;

use navtable_core::{NavigationTableParseError, TableRow};
use tracing::{debug, trace, warn};

use lines::{LineSplit, split_lines};

pub use classify::{LineKind, classify};
pub use config::{DEFAULT_MAX_PAGE_BYTES, ExtractConfig};
pub use diagnostics::{TableDiagnostics, diagnose};
pub use error::{ExtractError, Result};
pub use locate::locate;
pub use row::parse_row;

/// Lazy iterator over the rows of a navigation table.
///
/// Created by [`extract_rows`] or [`Extractor::extract`]. Each call to
/// [`next`](Iterator::next) classifies lines until it reaches a row line and
/// parses only that line. The iterator is single-pass; iterating again
/// requires a new call to [`extract_rows`].
pub struct Rows<'a> {
    lines: Option<LineSplit<'a>>,
}

impl<'a> Rows<'a> {
    fn new(page: &'a str) -> Self {
        let lines = locate(page).map(split_lines);
        if lines.is_none() {
            debug!(page_bytes = page.len(), "No navigation table found");
        }
        Self { lines }
    }
}

impl Iterator for Rows<'_> {
    type Item = std::result::Result<TableRow, NavigationTableParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;
        for line in lines {
            match classify(line) {
                LineKind::Row => return Some(parse_row(line)),
                kind => trace!(kind = ?kind, line = %line, "Skipping navigation table line"),
            }
        }
        None
    }
}

impl FusedIterator for Rows<'_> {}

impl fmt::Debug for Rows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("table_found", &self.lines.is_some())
            .finish_non_exhaustive()
    }
}

/// Extracts the navigation table rows of a markdown page.
///
/// Never fails for a page without a table: the iterator is simply empty.
/// Row lines are parsed lazily as the iterator advances.
///
/// # Examples
///
/// ```
/// use navtable_parser::extract_rows;
///
/// assert_eq!(extract_rows("no table here").count(), 0);
///
/// let page = "| level | path | navlink |\n|-|-|-|\n| 1 | a | [A](t/a) |\n";
/// let row = extract_rows(page).next().unwrap().unwrap();
/// assert_eq!(row.navlink().link(), Some("t/a"));
/// ```
pub fn extract_rows(page: &str) -> Rows<'_> {
    Rows::new(page)
}

/// Row extraction with size screening.
///
/// # Examples
///
/// ```
/// use navtable_parser::{ExtractConfig, ExtractError, Extractor};
///
/// let extractor = Extractor::new(ExtractConfig {
///     max_page_bytes: Some(8),
///     ..ExtractConfig::default()
/// });
///
/// assert!(extractor.extract("tiny").is_ok());
/// assert!(matches!(
///     extractor.extract("far too long a page"),
///     Err(ExtractError::PageTooLarge { size: 19, limit: 8 })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Creates an extractor with the given settings.
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Settings this extractor applies.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts rows from `page` after checking it against the size limit.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageTooLarge`] when the page is longer than
    /// [`ExtractConfig::max_page_bytes`].
    pub fn extract<'a>(&self, page: &'a str) -> Result<Rows<'a>> {
        if let Some(limit) = self.config.max_page_bytes.filter(|&limit| page.len() > limit) {
            warn!(size = page.len(), limit, "Rejecting oversized navigation page");
            return Err(ExtractError::PageTooLarge {
                size: page.len(),
                limit,
            });
        }
        Ok(Rows::new(page))
    }

    /// Extracts and collects all rows of `page`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::PageTooLarge`] for oversized pages and
    /// [`ExtractError::RowParse`] for the first row that fails to parse.
    pub fn extract_all(&self, page: &str) -> Result<Vec<TableRow>> {
        let rows = self.extract(page)?.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
