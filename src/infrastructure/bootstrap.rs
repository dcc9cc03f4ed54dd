//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;

use tracing::info;

use crate::adapter::outbound::sqlite::database::connection::is_memory_url;
use crate::adapter::outbound::sqlite::SqliteSnippetStore;
use crate::application::SnippetService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Snippet service wired to the SQLite store.
pub type AppService = SnippetService<SqliteSnippetStore>;

/// Open the configured database and build the snippet service.
///
/// Creates the database's parent directory when needed, applies pending
/// migrations and attaches the configured operation deadline.
///
/// # Errors
/// Returns an error if the directory cannot be created or the store cannot
/// be opened.
pub fn build_service(config: &Config) -> Result<AppService> {
    let database = config.database.as_str();
    if !is_memory_url(database) {
        if let Some(parent) = Path::new(database).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let store = SqliteSnippetStore::open(database, &config.store.pool_options())?;
    info!(
        database,
        pool_size = config.store.pool_size,
        deadline_ms = config.store.operation_timeout_ms,
        "Snippet store ready"
    );

    Ok(SnippetService::new(store).with_deadline(config.store.operation_deadline()))
}
