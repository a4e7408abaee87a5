//! Core row types for documentation navigation tables.
//!
//! A navigation table is a three-column markdown table (`level`, `path`,
//! `navlink`) embedded in a documentation index page. This crate defines the
//! value types a parsed table is made of:
//!
//! - [`TableRow`] — one data row: hierarchy level, path identifier and navlink.
//! - [`Navlink`] — the `[title](link)` cell of a row; a missing link marks a
//!   grouping entry.
//! - [`NavigationTableParseError`] — raised when a line that should be a data
//!   row does not follow the row grammar.
//! - [`ModelError`] — raised when deserialized rows break the model's rules.
//!
//! Parsing itself lives in the `navtable-parser` crate.
//!
//! # Example
//!
//! ```
//! use navtable_core::{Navlink, TableRow};
//!
//! let group = TableRow::new(1, "tutorials", Navlink::group("Tutorials"));
//! let page = TableRow::new(
//!     2,
//!     "getting-started",
//!     Navlink::new("Getting started", Some("t/getting-started/42")),
//! );
//!
//! assert!(group.is_group());
//! assert!(!page.is_group());
//! assert_eq!(page.navlink().link(), Some("t/getting-started/42"));
//! ```

mod error;
mod types;

pub use error::{ModelError, NavigationTableParseError};
pub use types::{Navlink, TableRow};
