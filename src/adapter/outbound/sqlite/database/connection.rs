//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and per-connection
//! pragmas for SQLite databases.

use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const MEMORY_URL: &str = ":memory:";

/// Sizing and timeout settings for the connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Maximum number of pooled connections.
    pub max_size: u32,
    /// How long to wait for a free connection before failing.
    pub connection_timeout: Duration,
    /// SQLite `busy_timeout` applied to every connection.
    pub busy_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_size: 5,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

/// Applies pragmas to every connection the pool opens.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn, self.busy_timeout)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// True for URLs that open a private in-memory database per connection.
#[must_use]
pub fn is_memory_url(database_url: &str) -> bool {
    database_url == MEMORY_URL
}

/// Create a connection pool with default options.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> StoreResult<DbPool> {
    create_pool_with(database_url, &PoolOptions::default())
}

/// Create a connection pool for the given database URL.
///
/// Every `:memory:` connection is its own database, so in-memory pools are
/// capped at a single connection to keep the schema visible to every caller.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool_with(database_url: &str, options: &PoolOptions) -> StoreResult<DbPool> {
    let max_size = if is_memory_url(database_url) {
        1
    } else {
        options.max_size
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_timeout(options.connection_timeout)
        .connection_customizer(Box::new(ConnectionPragmas {
            busy_timeout: options.busy_timeout,
        }))
        .build(manager)
        .map_err(|e| StoreError::connection("open pool", e))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> StoreResult<()> {
    let mut conn = pool
        .get()
        .map_err(|e| StoreError::connection("migrate", e))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::query("migrate", e))?;
    debug!(applied = applied.len(), "Migrations complete");
    Ok(())
}

/// Switch a file database to WAL journaling.
///
/// The journal mode is stored in the database file, so this only needs to
/// run once per database.
///
/// # Errors
/// Returns an error if the pragma fails to apply.
pub fn enable_wal(pool: &DbPool) -> StoreResult<()> {
    let mut conn = pool
        .get()
        .map_err(|e| StoreError::connection("enable wal", e))?;
    diesel::sql_query("PRAGMA journal_mode=WAL")
        .execute(&mut conn)
        .map_err(|e| StoreError::query("enable wal", e))?;
    Ok(())
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout: Duration,
) -> QueryResult<()> {
    diesel::sql_query(format!("PRAGMA busy_timeout={}", busy_timeout.as_millis()))
        .execute(conn)?;
    diesel::sql_query("PRAGMA foreign_keys=ON").execute(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[derive(diesel::QueryableByName)]
    struct TableCount {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        count: i64,
    }

    #[derive(diesel::QueryableByName)]
    struct BusyTimeout {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        timeout: i64,
    }

    fn temp_url(dir: &tempfile::TempDir) -> String {
        dir.path().join("pool.db").display().to_string()
    }

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:");
        assert!(pool.is_ok());
    }

    #[test]
    fn memory_pool_is_capped_at_one_connection() {
        let pool = create_pool_with(
            ":memory:",
            &PoolOptions {
                max_size: 8,
                ..PoolOptions::default()
            },
        )
        .unwrap();
        assert_eq!(pool.max_size(), 1);
    }

    #[test]
    fn file_pool_uses_configured_size() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_with(
            &temp_url(&dir),
            &PoolOptions {
                max_size: 3,
                ..PoolOptions::default()
            },
        )
        .unwrap();
        assert_eq!(pool.max_size(), 3);
    }

    #[test]
    fn run_migrations_creates_snippets_table() {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let tables: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

        assert_eq!(tables, vec!["snippets".to_string()]);
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let pool = create_pool(":memory:").unwrap();

        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let count = diesel::sql_query(
            "SELECT COUNT(*) as count FROM sqlite_master WHERE type='table' AND name='snippets'",
        )
        .load::<TableCount>(&mut conn)
        .unwrap()
        .first()
        .unwrap()
        .count;

        assert_eq!(count, 1);
    }

    #[test]
    fn acquired_connections_carry_busy_timeout() {
        let pool = create_pool_with(
            ":memory:",
            &PoolOptions {
                busy_timeout: Duration::from_millis(1234),
                ..PoolOptions::default()
            },
        )
        .unwrap();
        let mut conn = pool.get().unwrap();

        let rows = diesel::sql_query("PRAGMA busy_timeout")
            .load::<BusyTimeout>(&mut conn)
            .unwrap();
        assert_eq!(rows[0].timeout, 1234);
    }

    #[test]
    fn enable_wal_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(&temp_url(&dir)).unwrap();
        run_migrations(&pool).unwrap();
        assert!(enable_wal(&pool).is_ok());
    }

    #[test]
    fn file_pool_handles_concurrent_access() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempfile::tempdir().unwrap();
        let pool = Arc::new(create_pool(&temp_url(&dir)).unwrap());
        run_migrations(&pool).unwrap();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || {
                    let mut conn = pool.get().unwrap();
                    let result: Vec<TableCount> =
                        diesel::sql_query("SELECT COUNT(*) as count FROM sqlite_master")
                            .load(&mut conn)
                            .unwrap();
                    assert!(!result.is_empty());
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("Thread should complete without panic");
        }
    }
}
