//! Error types for navigation table rows.

use thiserror::Error;

/// A line handed to the row parser could not be turned into a
/// [`TableRow`](crate::TableRow).
///
/// Every variant keeps the literal offending line for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationTableParseError {
    /// The line does not follow the `| level | path | [title](link) |` grammar.
    #[error("invalid table row, line={line:?}")]
    InvalidRow { line: String },

    /// The level cell is a digit run too large for the level type.
    #[error("table row level {level} out of range, line={line:?}")]
    LevelOutOfRange { level: String, line: String },
}

/// A row value that breaks the model's rules, reported when loading rows
/// through `serde`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("navlink title cannot be empty")]
    EmptyTitle,
    #[error("table row path cannot be empty")]
    EmptyPath,
}

impl NavigationTableParseError {
    /// Returns the line that failed to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtable_core::NavigationTableParseError;
    ///
    /// let err = NavigationTableParseError::InvalidRow { line: "| x |".into() };
    /// assert_eq!(err.line(), "| x |");
    /// ```
    pub fn line(&self) -> &str {
        match self {
            Self::InvalidRow { line } | Self::LevelOutOfRange { line, .. } => line,
        }
    }
}
