//! Snippet store pool and deadline configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::sqlite::PoolOptions;
use crate::error::ConfigError;

/// `[store]` section of the configuration file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum pooled SQLite connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// SQLite busy timeout per connection (milliseconds).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// Wait for a free pooled connection (milliseconds).
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
    /// Optional deadline for each store operation (milliseconds).
    #[serde(default)]
    pub operation_timeout_ms: Option<u64>,
}

fn default_pool_size() -> u32 {
    5
}

fn default_busy_timeout_ms() -> u64 {
    5000 // 5 seconds
}

fn default_connection_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            busy_timeout_ms: default_busy_timeout_ms(),
            connection_timeout_ms: default_connection_timeout_ms(),
            operation_timeout_ms: None,
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_size: self.pool_size,
            connection_timeout: Duration::from_millis(self.connection_timeout_ms),
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }

    #[must_use]
    pub fn operation_deadline(&self) -> Option<Duration> {
        self.operation_timeout_ms.map(Duration::from_millis)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.pool_size",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.busy_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.busy_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.connection_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.connection_timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.operation_timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "store.operation_timeout_ms",
                reason: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }
}
