//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: snippetbox --config {} check",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config, path: Option<&Path>) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.map(|p| p.display().to_string()),
            "database": config.database,
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
            "store": {
                "pool_size": config.store.pool_size,
                "busy_timeout_ms": config.store.busy_timeout_ms,
                "connection_timeout_ms": config.store.connection_timeout_ms,
                "operation_timeout_ms": config.store.operation_timeout_ms,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    match path {
        Some(path) => output::field("Source", path.display()),
        None => output::field("Source", "(defaults)"),
    }
    output::field("Database", &config.database);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Store");
    output::field("Pool size", config.store.pool_size);
    output::field("Busy", format!("{}ms", config.store.busy_timeout_ms));
    output::field("Connect", format!("{}ms", config.store.connection_timeout_ms));
    match config.store.operation_timeout_ms {
        Some(ms) => output::field("Deadline", format!("{ms}ms")),
        None => output::field("Deadline", output::muted("none")),
    }
    Ok(())
}
