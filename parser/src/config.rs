//! Extraction configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! max_page_bytes: 1048576
//! ```
//!
//! Omitting `max_page_bytes` disables size screening.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};

/// Size limit applied by [`ExtractConfig::default`], 1 MiB.
pub const DEFAULT_MAX_PAGE_BYTES: usize = 1024 * 1024;

const CONFIG_VERSION: &str = "1.0";

/// Settings for an [`Extractor`](crate::Extractor).
///
/// # Examples
///
/// ```
/// use navtable_parser::{ExtractConfig, DEFAULT_MAX_PAGE_BYTES};
///
/// let config = ExtractConfig::default();
/// assert_eq!(config.max_page_bytes, Some(DEFAULT_MAX_PAGE_BYTES));
///
/// let unlimited = ExtractConfig::from_yaml_str("version: \"1.0\"\n").unwrap();
/// assert_eq!(unlimited.max_page_bytes, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Configuration format version (e.g., `"1.0"`).
    #[serde(default = "default_version")]
    pub version: String,
    /// Pages longer than this many bytes are rejected before matching.
    /// `None` accepts pages of any size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_page_bytes: Option<usize>,
}

fn default_version() -> String {
    CONFIG_VERSION.to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            max_page_bytes: Some(DEFAULT_MAX_PAGE_BYTES),
        }
    }
}

impl ExtractConfig {
    /// Parses and validates configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`YamlError`](ExtractError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](ExtractError::InvalidConfig) if validation fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ExtractError::IoError) if the file cannot be read,
    /// [`YamlError`](ExtractError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](ExtractError::InvalidConfig) if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ExtractError::IoError) if the file cannot be
    /// written, or [`YamlError`](ExtractError::YamlError) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfig`](ExtractError::InvalidConfig) for an empty
    /// version or a zero byte limit.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ExtractError::InvalidConfig(
                "version cannot be empty".to_string(),
            ));
        }
        if self.max_page_bytes == Some(0) {
            return Err(ExtractError::InvalidConfig(
                "max_page_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.max_page_bytes, Some(DEFAULT_MAX_PAGE_BYTES));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_complete() {
        let config = ExtractConfig::from_yaml_str("version: \"1.0\"\nmax_page_bytes: 4096\n").unwrap();
        assert_eq!(config.max_page_bytes, Some(4096));
    }

    #[test]
    fn test_deserialize_empty_mapping_uses_defaults() {
        let config = ExtractConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.max_page_bytes, None);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = ExtractConfig::from_yaml_str("version: \"1.0\"\nmax_page_bytes: 0\n").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_version_is_rejected() {
        let err = ExtractConfig::from_yaml_str("version: \"  \"\n").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let err = ExtractConfig::from_yaml_str("max_page_bytes: [1, 2").unwrap_err();
        assert!(matches!(err, ExtractError::YamlError(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExtractConfig::load(dir.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, ExtractError::IoError(_)));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navtable.yml");

        let original = ExtractConfig {
            version: "1.0".to_string(),
            max_page_bytes: Some(2048),
        };
        original.save(&path).unwrap();

        let loaded = ExtractConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_omits_unset_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navtable.yml");

        let config = ExtractConfig {
            version: "1.0".to_string(),
            max_page_bytes: None,
        };
        config.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("max_page_bytes"));
        assert_eq!(ExtractConfig::load(&path).unwrap(), config);
    }
}
