//! Domain validation errors.

use thiserror::Error;

/// Errors raised while constructing domain values from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid retention of {days} days: must be between {min} and {max}")]
    InvalidRetention { days: i64, min: u32, max: u32 },
}
