//! Snippet entity and its value types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::error::DomainError;

/// Maximum number of snippets returned by a recency listing.
pub const LATEST_LIMIT: i64 = 10;

/// Store-assigned snippet identifier.
///
/// Ids are allocated by the store on insert, increase monotonically and are
/// never reused, so ordering by id is ordering by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SnippetId(i64);

impl SnippetId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnippetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// Number of days a snippet stays live after creation.
///
/// Constructing a `Retention` is where raw caller input gets validated; the
/// store itself trusts whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Retention(u32);

impl Retention {
    pub const MIN_DAYS: u32 = 1;
    /// Roughly a century. Keeps expiry arithmetic far from chrono's limits.
    pub const MAX_DAYS: u32 = 36_500;

    pub const ONE_DAY: Self = Self(1);
    pub const ONE_WEEK: Self = Self(7);
    pub const ONE_YEAR: Self = Self(365);

    /// Validate a raw day count.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidRetention`] when `days` is outside
    /// `MIN_DAYS..=MAX_DAYS`.
    pub fn days(days: i64) -> Result<Self, DomainError> {
        match u32::try_from(days) {
            Ok(d) if (Self::MIN_DAYS..=Self::MAX_DAYS).contains(&d) => Ok(Self(d)),
            _ => Err(DomainError::InvalidRetention {
                days,
                min: Self::MIN_DAYS,
                max: Self::MAX_DAYS,
            }),
        }
    }

    #[must_use]
    pub const fn as_days(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::days(i64::from(self.0))
    }

    /// Expiry instant for a snippet created at `created`.
    #[must_use]
    pub fn expiry_from(self, created: DateTime<Utc>) -> DateTime<Utc> {
        created + self.as_duration()
    }
}

impl Default for Retention {
    fn default() -> Self {
        Self::ONE_YEAR
    }
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.0)
        }
    }
}

/// A stored snippet. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// A snippet is live strictly before its expiry instant.
    #[must_use]
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.expires - self.created
    }
}
