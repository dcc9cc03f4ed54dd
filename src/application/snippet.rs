//! Snippet use cases.
//!
//! [`SnippetService`] is what presentation adapters talk to. It forwards each
//! call to a [`SnippetStore`] exactly once and, when configured with a
//! deadline, turns a slow store call into `StoreError::Cancelled`.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{Retention, Snippet, SnippetId};
use crate::error::{StoreError, StoreResult};
use crate::port::outbound::store::SnippetStore;

/// Application service over a snippet store.
#[derive(Debug, Clone)]
pub struct SnippetService<S> {
    store: S,
    deadline: Option<Duration>,
}

impl<S: SnippetStore> SnippetService<S> {
    /// Create a service with no deadline.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            deadline: None,
        }
    }

    /// Bound every operation by `deadline`. `None` waits indefinitely.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a snippet and return its id.
    ///
    /// # Errors
    /// `Failure` if the write fails, `Cancelled` if the deadline fires first.
    /// A cancelled create may still have been persisted.
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        retention: Retention,
    ) -> StoreResult<SnippetId> {
        let id = self
            .bounded("create", self.store.create(title, content, retention))
            .await?;
        debug!(snippet_id = %id, retention = %retention, "create ok");
        Ok(id)
    }

    /// Fetch a live snippet.
    ///
    /// # Errors
    /// `NotFound` for unknown or expired ids, otherwise `Failure`/`Cancelled`.
    pub async fn get(&self, id: SnippetId) -> StoreResult<Snippet> {
        self.bounded("get", self.store.get(id)).await
    }

    /// The most recent live snippets, newest first.
    ///
    /// # Errors
    /// `Failure` or `Cancelled`; never a partial list.
    pub async fn latest(&self) -> StoreResult<Vec<Snippet>> {
        self.bounded("latest", self.store.latest()).await
    }

    /// Probe the store.
    ///
    /// # Errors
    /// `Failure` or `Cancelled`.
    pub async fn health_check(&self) -> StoreResult<()> {
        self.bounded("health check", self.store.health_check()).await
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = StoreResult<T>>,
    ) -> StoreResult<T> {
        let result = match self.deadline {
            Some(after) => match tokio::time::timeout(after, fut).await {
                Ok(result) => result,
                Err(_) => Err(StoreError::Cancelled { operation, after }),
            },
            None => fut.await,
        };

        if let Err(ref e) = result {
            if !e.is_not_found() {
                warn!(operation, error = %e, "Snippet store operation failed");
            }
        }
        result
    }
}
