use std::fmt::Display;
use std::time::Duration;

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::SnippetId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors surfaced by snippet store operations.
///
/// `NotFound` covers both ids that never existed and ids whose snippet has
/// expired. Callers cannot tell the two apart.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no live snippet with id {id}")]
    NotFound { id: SnippetId },

    #[error("store failure during {operation}: {reason}")]
    Failure {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} cancelled after {after:?}")]
    Cancelled {
        operation: &'static str,
        after: Duration,
    },
}

impl StoreError {
    /// Failure to obtain or use a pooled connection.
    pub fn connection(operation: &'static str, err: impl Display) -> Self {
        Self::Failure {
            operation,
            reason: format!("connection: {err}"),
        }
    }

    /// Failure while executing a statement.
    pub fn query(operation: &'static str, err: impl Display) -> Self {
        Self::Failure {
            operation,
            reason: err.to_string(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub type StoreResult<T> = std::result::Result<T, StoreError>;
