//! Line-level diagnostics for a navigation table page.
//!
//! Extraction silently skips anything it does not recognise. [`diagnose`]
//! makes those decisions visible without changing them.

use crate::classify::{LineKind, classify};
use crate::lines::split_lines;
use crate::locate::locate;

/// Counts of line kinds in the located table span.
///
/// Blank lines are not counted as skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDiagnostics {
    pub table_found: bool,
    pub header_lines: usize,
    pub filler_lines: usize,
    pub row_lines: usize,
    pub skipped_lines: usize,
    /// Row lines seen before the first header line.
    pub rows_before_header: usize,
    /// Non-blank skipped lines seen after the first header line.
    pub skipped_after_header: usize,
}

impl TableDiagnostics {
    /// Human-readable notes about lines extraction will ignore.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.table_found {
            warnings.push("No navigation table found".to_string());
            return warnings;
        }

        if self.header_lines > 1 {
            warnings.push(format!(
                "Found {} navigation table header lines",
                self.header_lines
            ));
        }

        if self.rows_before_header > 0 {
            warnings.push(format!(
                "{} row lines appear before the table header",
                self.rows_before_header
            ));
        }

        if self.skipped_after_header > 0 {
            warnings.push(format!(
                "Ignored {} unrecognized lines after the table header",
                self.skipped_after_header
            ));
        }

        warnings
    }
}

/// Classifies every line of the page's table span without parsing rows.
///
/// # Examples
///
/// ```
/// use navtable_parser::diagnose;
///
/// let page = "Intro\n| Level | Path | Navlink |\n| - | - | - |\n| 1 | a | [A]() |\nnote\n";
/// let diagnostics = diagnose(page);
/// assert!(diagnostics.table_found);
/// assert_eq!(diagnostics.row_lines, 1);
/// assert_eq!(diagnostics.skipped_lines, 2);
/// assert_eq!(diagnostics.warnings().len(), 1);
/// ```
pub fn diagnose(page: &str) -> TableDiagnostics {
    let mut diagnostics = TableDiagnostics::default();
    let Some(table) = locate(page) else {
        return diagnostics;
    };
    diagnostics.table_found = true;

    for line in split_lines(table) {
        let seen_header = diagnostics.header_lines > 0;
        match classify(line) {
            LineKind::Header => diagnostics.header_lines += 1,
            LineKind::Filler => diagnostics.filler_lines += 1,
            LineKind::Row => {
                diagnostics.row_lines += 1;
                if !seen_header {
                    diagnostics.rows_before_header += 1;
                }
            }
            LineKind::Skip if line.trim().is_empty() => {}
            LineKind::Skip => {
                diagnostics.skipped_lines += 1;
                if seen_header {
                    diagnostics.skipped_after_header += 1;
                }
            }
        }
    }

    diagnostics
}
