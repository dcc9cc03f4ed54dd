use std::path::PathBuf;

use clap::Parser;
use tokio::signal;
use tracing::{debug, info};

use snippetbox::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use snippetbox::adapter::inbound::cli::output::{self, Mode};
use snippetbox::adapter::inbound::cli::{check, config, paths, snippet};
use snippetbox::error::Result;
use snippetbox::infrastructure::bootstrap;
use snippetbox::infrastructure::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(Mode::from_flags(cli.json, cli.quiet));

    tokio::select! {
        result = run(cli) => {
            if let Err(e) = result {
                output::error(&e.to_string());
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Interrupted");
            std::process::exit(130);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // `config init` must work before any config file exists.
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        let path = cli.config.clone().unwrap_or_else(paths::default_config);
        return config::execute_init(&path, args.force);
    }

    let (mut settings, source) = load_config(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        settings = settings.with_database(db)?;
    }
    if cli.quiet && cli.verbose == 0 {
        settings.logging.level = "warn".into();
    }
    settings.logging = settings.logging.with_verbosity(cli.verbose);
    settings.init_logging();
    debug!(source = ?source, database = %settings.database, "Configuration loaded");

    match &cli.command {
        Commands::Create(args) => {
            let service = bootstrap::build_service(&settings)?;
            snippet::execute_create(&service, args).await
        }
        Commands::View(args) => {
            let service = bootstrap::build_service(&settings)?;
            snippet::execute_view(&service, args).await
        }
        Commands::Latest => {
            let service = bootstrap::build_service(&settings)?;
            snippet::execute_latest(&service).await
        }
        Commands::Check => check::execute_check(&settings, source.as_deref()).await,
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(&settings, source.as_deref())
        }
        // Handled before configuration is loaded.
        Commands::Config(ConfigCommand::Init(_)) => Ok(()),
    }
}

/// Load an explicit config file strictly, or the default one if present.
///
/// Returns the path that was actually read, if any.
fn load_config(explicit: Option<&std::path::Path>) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((Config::load(path)?, Some(path.to_path_buf())));
    }

    let default = paths::default_config();
    let source = default.exists().then(|| default.clone());
    Ok((Config::load_or_default(&default)?, source))
}
