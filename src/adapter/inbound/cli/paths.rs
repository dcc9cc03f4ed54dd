//! Path utilities for snippetbox.
//!
//! User-level files live under `~/.snippetbox/`:
//! - `~/.snippetbox/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the snippetbox home directory (`~/.snippetbox/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".snippetbox")
}

/// Returns the default config file path (`~/.snippetbox/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
