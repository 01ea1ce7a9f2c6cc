//! Centralized path definitions for pagekit
//!
//! ## Layout
//!
//! ```text
//! ~/.config/pagekit/
//! └── config.toml               # Default page size and debounce delay
//! ```
//!
//! The config location can be overridden with `PAGEKIT_CONFIG` or the
//! `--config` flag; the flag wins.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "PAGEKIT_CONFIG";

/// Config directory name under the platform config dir
const CONFIG_DIR: &str = "pagekit";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the pagekit config directory.
///
/// Returns `~/.config/pagekit/` on Linux.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the default config file path, honoring `PAGEKIT_CONFIG`.
#[must_use]
pub fn config_file() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map_or_else(|| config_dir().join(CONFIG_FILE), PathBuf::from)
}
