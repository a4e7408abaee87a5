//! Table location within a full page.

use crate::patterns::PATTERNS;

/// Returns the span of `page` that holds the navigation table.
///
/// The table is recognised by a `| level | path | navlink |` header row
/// (case-insensitive, any whitespace around cells and pipes) anywhere in the
/// page. The returned span always starts at the beginning of the page and runs
/// to its end, so it includes any preamble before the header; line
/// classification is responsible for discarding it.
///
/// Returns `None` when the page has no header row, which callers treat as a
/// table without rows.
///
/// # Examples
///
/// ```
/// use navtable_parser::locate;
///
/// let page = "Intro\n\n| Level | Path | Navlink |\n| -- | -- | -- |\n";
/// assert_eq!(locate(page), Some(page));
///
/// assert_eq!(locate("| Level | Path |\n"), None);
/// ```
pub fn locate(page: &str) -> Option<&str> {
    PATTERNS.table.find(page).map(|found| found.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_no_header() {
        assert_eq!(locate(""), None);
        assert_eq!(locate("just some prose\nwith lines"), None);
        assert_eq!(locate("| level | navlink | path |"), None);
    }

    #[test]
    fn test_locate_span_starts_at_page_start() {
        let page = "# Title\n\nSome text\n| level | path | navlink |\n| - | - | - |\n| 1 | a | [A]() |\ntrailing";
        let span = locate(page).expect("table should be found");
        assert_eq!(span, page);
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        assert!(locate("|LEVEL|PATH|NAVLINK|").is_some());
        assert!(locate("  |  Level  |  pAtH |navLink|  ").is_some());
    }

    #[test]
    fn test_locate_header_may_span_whitespace_lines() {
        // Whitespace around the cells includes newlines.
        assert!(locate("|\nlevel\n|\npath\n|\nnavlink\n|").is_some());
    }

    #[test]
    fn test_locate_requires_closing_pipe() {
        assert_eq!(locate("| level | path | navlink"), None);
    }
}
