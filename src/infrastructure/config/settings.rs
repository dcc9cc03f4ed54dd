//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; `SNIPPETBOX_DATABASE` overrides the
//! database path.
//!
//! # Example
//!
//! ```no_run
//! use snippetbox::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::store::StoreConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides [`Config::database`].
pub const DATABASE_ENV: &str = "SNIPPETBOX_DATABASE";

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file, or `:memory:`.
    ///
    /// Defaults to "snippetbox.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Connection pool and deadline settings.
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_database_path() -> String {
    "snippetbox.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content, applying environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Like [`Config::parse_toml`] but reads overrides through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// Replace the database path and re-validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn with_database(mut self, database: &str) -> Result<Self> {
        self.database = database.to_owned();
        self.validate()?;
        Ok(self)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database) = lookup(DATABASE_ENV).filter(|v| !v.trim().is_empty()) {
            self.database = database;
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        self.logging.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml_with_env("", no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn full_file_parses() {
        let toml = r#"
database = "/var/lib/snippetbox/snippets.db"

[logging]
level = "debug"
format = "json"

[store]
pool_size = 8
busy_timeout_ms = 1000
connection_timeout_ms = 2000
operation_timeout_ms = 500
"#;
        let config = Config::parse_toml_with_env(toml, no_env).unwrap();

        assert_eq!(config.database, "/var/lib/snippetbox/snippets.db");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.store.pool_size, 8);
        assert_eq!(config.store.operation_timeout_ms, Some(500));
    }

    #[test]
    fn env_overrides_database() {
        let config = Config::parse_toml_with_env("database = \"file.db\"", |key| {
            (key == DATABASE_ENV).then(|| "/tmp/override.db".to_string())
        })
        .unwrap();
        assert_eq!(config.database, "/tmp/override.db");
    }

    #[test]
    fn blank_env_does_not_override() {
        let config =
            Config::parse_toml_with_env("database = \"file.db\"", |_| Some("  ".into())).unwrap();
        assert_eq!(config.database, "file.db");
    }

    #[test]
    fn empty_database_is_rejected() {
        let result = Config::parse_toml_with_env("database = \"\"", no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "database" }))
        ));
    }

    #[test]
    fn database_override_is_validated() {
        let config = Config::parse_toml_with_env("", no_env).unwrap();

        let err = config.clone().with_database("  ").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { field: "database" })
        ));

        let config = config.with_database("other.db").unwrap();
        assert_eq!(config.database, "other.db");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml_with_env("database = ", no_env);
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn nested_validation_errors_surface() {
        let result = Config::parse_toml_with_env("[store]\npool_size = 0\n", no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "store.pool_size",
                ..
            }))
        ));
    }
}
