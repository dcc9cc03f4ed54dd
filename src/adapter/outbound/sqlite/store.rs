//! SQLite snippet store implementation.
//!
//! Provides persistent storage for snippets using SQLite and Diesel ORM.
//! Diesel is synchronous, so each operation checks a connection out of the
//! pool inside `spawn_blocking` and runs exactly one statement on it.

use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, warn};

use crate::adapter::outbound::sqlite::database::connection::{
    create_pool_with, enable_wal, is_memory_url, run_migrations, DbPool, PoolOptions,
};
use crate::adapter::outbound::sqlite::database::model::{NewSnippetRow, SnippetRow};
use crate::adapter::outbound::sqlite::database::schema::snippets;
use crate::domain::{Retention, Snippet, SnippetId, LATEST_LIMIT};
use crate::error::{StoreError, StoreResult};
use crate::port::outbound::store::SnippetStore;

/// SQLite-backed snippet store.
///
/// Owns its connection pool for its whole lifetime. Cloning the store clones
/// the pool handle, not the connections.
#[derive(Clone)]
pub struct SqliteSnippetStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteSnippetStore {
    /// Create a new SQLite snippet store with the given connection pool.
    ///
    /// The pool must already have migrations applied.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, apply migrations and, for file
    /// databases, switch to WAL journaling.
    ///
    /// # Errors
    /// Returns `StoreError::Failure` if the database cannot be opened or
    /// migrated.
    pub fn open(database_url: &str, options: &PoolOptions) -> StoreResult<Self> {
        let pool = create_pool_with(database_url, options)?;
        run_migrations(&pool)?;
        if !is_memory_url(database_url) {
            enable_wal(&pool)?;
        }
        Ok(Self::new(pool))
    }

    /// The underlying pool handle.
    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Run `f` on a pooled connection off the async runtime.
    async fn with_connection<T, F>(&self, operation: &'static str, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> StoreResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| StoreError::connection(operation, e))?;
            f(&mut *conn)
        })
        .await
        .map_err(|e| StoreError::Failure {
            operation,
            reason: format!("blocking task failed: {e}"),
        })?
    }
}

impl SnippetStore for SqliteSnippetStore {
    async fn create(
        &self,
        title: &str,
        content: &str,
        retention: Retention,
    ) -> StoreResult<SnippetId> {
        let created = Utc::now();
        let row = NewSnippetRow {
            title: title.to_owned(),
            content: content.to_owned(),
            created: created.naive_utc(),
            expires: retention.expiry_from(created).naive_utc(),
        };

        let id = self
            .with_connection("create", move |conn| {
                diesel::insert_into(snippets::table)
                    .values(&row)
                    .returning(snippets::id)
                    .get_result::<i64>(conn)
                    .map_err(|e| StoreError::query("create", e))
            })
            .await?;

        debug!(
            snippet_id = id,
            retention_days = retention.as_days(),
            "Snippet created"
        );
        Ok(SnippetId::new(id))
    }

    async fn get(&self, id: SnippetId) -> StoreResult<Snippet> {
        let now = Utc::now().naive_utc();

        let row = self
            .with_connection("get", move |conn| {
                snippets::table
                    .filter(snippets::id.eq(id.get()))
                    .filter(snippets::expires.gt(now))
                    .select(SnippetRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(|e| StoreError::query("get", e))
            })
            .await?;

        match row.map(Snippet::from) {
            Some(snippet) if snippet.is_live_at(now.and_utc()) => Ok(snippet),
            Some(_) => {
                warn!(snippet_id = id.get(), "Store returned an expired snippet");
                Err(StoreError::NotFound { id })
            }
            None => {
                debug!(snippet_id = id.get(), "No live snippet");
                Err(StoreError::NotFound { id })
            }
        }
    }

    async fn latest(&self) -> StoreResult<Vec<Snippet>> {
        let now = Utc::now().naive_utc();

        let rows = self
            .with_connection("latest", move |conn| {
                snippets::table
                    .filter(snippets::expires.gt(now))
                    .order(snippets::id.desc())
                    .limit(LATEST_LIMIT)
                    .select(SnippetRow::as_select())
                    .load(conn)
                    .map_err(|e| StoreError::query("latest", e))
            })
            .await?;

        let now = now.and_utc();
        let snippets: Vec<Snippet> = rows
            .into_iter()
            .map(Snippet::from)
            .filter(|snippet| snippet.is_live_at(now))
            .collect();
        debug!(count = snippets.len(), "Loaded latest snippets");
        Ok(snippets)
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.with_connection("health check", |conn| {
            diesel::sql_query("SELECT 1")
                .execute(conn)
                .map(|_| ())
                .map_err(|e| StoreError::query("health check", e))
        })
        .await
    }
}
