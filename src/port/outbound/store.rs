//! Persistence port for snippets.

use std::future::Future;

use crate::domain::{Retention, Snippet, SnippetId};
use crate::error::StoreResult;

/// Storage operations for snippets.
///
/// Every read filters out expired snippets. Implementations execute each
/// operation as a single statement and never retry.
pub trait SnippetStore: Send + Sync {
    /// Insert a snippet expiring `retention` after now. Returns the new id.
    fn create(
        &self,
        title: &str,
        content: &str,
        retention: Retention,
    ) -> impl Future<Output = StoreResult<SnippetId>> + Send;

    /// Get a live snippet by id.
    ///
    /// Unknown and expired ids both yield `StoreError::NotFound`.
    fn get(&self, id: SnippetId) -> impl Future<Output = StoreResult<Snippet>> + Send;

    /// Up to [`LATEST_LIMIT`](crate::domain::LATEST_LIMIT) live snippets, newest first.
    fn latest(&self) -> impl Future<Output = StoreResult<Vec<Snippet>>> + Send;

    /// Lightweight round trip to verify the store is reachable.
    fn health_check(&self) -> impl Future<Output = StoreResult<()>> + Send;
}
