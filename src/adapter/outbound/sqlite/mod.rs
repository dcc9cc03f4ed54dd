//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`SnippetStore`](crate::port::SnippetStore)
//! implementation using Diesel ORM over an r2d2 connection pool.

pub mod database;
pub mod store;

pub use database::connection::{create_pool, create_pool_with, run_migrations, DbPool, PoolOptions};
pub use store::SqliteSnippetStore;
