//! Dashboard configuration, read from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use clinic_board_nav::DEFAULT_TITLE_SUFFIX;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Dashboard configuration.
///
/// ```toml
/// database_path = "/var/mobile/clinic-board.sqlite"
/// title_suffix = "Healthcare App"
/// log_filter = "clinic_board_core=debug"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// SQLite file backing local storage; in-memory when unset
    pub database_path: Option<PathBuf>,
    /// Appended to page titles after " | "
    pub title_suffix: String,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse from a TOML string. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.title_suffix, "Healthcare App");
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = DashboardConfig::from_toml_str(
            r#"
            database_path = "/tmp/board.sqlite"
            log_filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/board.sqlite")));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.title_suffix, "Healthcare App");
    }

    #[test]
    fn test_invalid_config() {
        let err = DashboardConfig::from_toml_str("title_suffix = 42").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DashboardConfig::load("/nonexistent/clinic-board.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
