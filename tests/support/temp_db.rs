use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use diesel::prelude::*;
use tempfile::TempDir;

use snippetbox::adapter::outbound::sqlite::{PoolOptions, SqliteSnippetStore};
use snippetbox::domain::SnippetId;

/// File-backed SQLite store in a throwaway directory.
///
/// The directory and database are removed when this is dropped.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
    store: SqliteSnippetStore,
}

impl TempDb {
    pub fn create() -> Self {
        Self::create_with(&PoolOptions::default())
    }

    pub fn create_with(options: &PoolOptions) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("snippetbox.db");
        let store = SqliteSnippetStore::open(&path.display().to_string(), options)
            .expect("open sqlite store");
        Self { dir, path, store }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    pub fn store(&self) -> SqliteSnippetStore {
        self.store.clone()
    }

    /// Move a snippet's expiry into the past.
    pub fn expire(&self, id: SnippetId) {
        let mut conn = self.store.pool().get().expect("get sqlite connection");
        let past = (Utc::now() - Duration::seconds(1)).naive_utc();
        diesel::sql_query("UPDATE snippets SET expires = ? WHERE id = ?")
            .bind::<diesel::sql_types::Timestamp, _>(past)
            .bind::<diesel::sql_types::BigInt, _>(id.get())
            .execute(&mut conn)
            .expect("expire snippet");
    }
}
