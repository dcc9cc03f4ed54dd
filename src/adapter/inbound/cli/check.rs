use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Validate the loaded configuration and probe the snippet store.
///
/// Reaching this point means the configuration already parsed and
/// validated; what remains is opening the database and running a probe.
pub async fn execute_check(config: &Config, config_path: Option<&Path>) -> Result<()> {
    let service = bootstrap::build_service(config)?;
    service.health_check().await?;
    let live = service.latest().await?.len();

    if output::is_json() {
        output::json_output(json!({
            "command": "check",
            "status": "healthy",
            "database": config.database,
            "live_snippets": live,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    match config_path {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "(defaults)"),
    }
    output::success("Configuration is valid");

    output::section("Store");
    output::field("Database", &config.database);
    output::field("Pool size", config.store.pool_size);
    match config.store.operation_deadline() {
        Some(deadline) => output::field("Deadline", format!("{}ms", deadline.as_millis())),
        None => output::field("Deadline", output::muted("none")),
    }
    output::field("Live", live);
    output::success("Database reachable");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, StoreError};

    #[tokio::test]
    async fn check_passes_for_memory_database() {
        let config = Config {
            database: ":memory:".into(),
            ..Config::default()
        };

        assert!(execute_check(&config, None).await.is_ok());
    }

    #[tokio::test]
    async fn check_fails_for_corrupt_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.db");
        std::fs::write(&path, "not a database ".repeat(100)).unwrap();
        let mut config = Config {
            database: path.display().to_string(),
            ..Config::default()
        };
        config.store.connection_timeout_ms = 1000;

        let err = execute_check(&config, None).await.unwrap_err();

        assert!(matches!(err, Error::Store(StoreError::Failure { .. })));
    }
}
