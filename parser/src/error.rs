//! Error types for navigation table extraction.
//!
//! Covers configuration I/O and YAML failures, size screening and row parse
//! failures surfaced through the configured [`Extractor`](crate::Extractor).

use navtable_core::NavigationTableParseError;
use thiserror::Error;

/// Errors that can occur while configuring or running extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration is structurally valid YAML but has unusable values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The page exceeds the configured size limit and was not scanned.
    #[error("page is {size} bytes, exceeding the {limit} byte limit")]
    PageTooLarge { size: usize, limit: usize },

    /// A table row failed to parse.
    #[error(transparent)]
    RowParse(#[from] NavigationTableParseError),
}

/// Convenience alias for results with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
