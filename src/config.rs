//! Configuration
//!
//! Defaults for the CLI, stored as TOML:
//!
//! ```toml
//! [pagination]
//! items_per_page = 10
//!
//! [debounce]
//! delay_ms = 500
//! ```
//!
//! A missing file yields the defaults. Command-line flags override both.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::debounce::DEFAULT_DELAY_MS;
use crate::core::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::paths;

/// Largest accepted debounce delay
pub const MAX_DELAY_MS: u64 = 60_000;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// A value is out of its accepted range
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// pagekit configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Debounce defaults
    #[serde(default)]
    pub debounce: DebounceConfig,
}

/// Pagination defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when `--per-page` is not given
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

const fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

/// Debounce defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Quiet period in milliseconds used when `--delay` is not given
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

const fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl DebounceConfig {
    /// The configured quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(paths::config_file, Path::to_path_buf);
        Self::load_from(&path)
    }

    /// Load from a specific file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.items_per_page == 0 {
            return Err(ConfigError::Invalid(
                "pagination.items_per_page must be at least 1".to_string(),
            ));
        }
        if self.debounce.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "debounce.delay_ms must be at most {MAX_DELAY_MS}, got {}",
                self.debounce.delay_ms
            )));
        }
        Ok(())
    }
}
