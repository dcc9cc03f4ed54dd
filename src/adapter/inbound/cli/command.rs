//! Command-line interface definitions.
//!
//! Defines the CLI structure for snippetbox using `clap`. Global flags choose
//! the configuration file, database, and output mode; subcommands map onto
//! the snippet service operations plus configuration and diagnostics.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Retention, SnippetId};

/// Store and share short text snippets that expire
#[derive(Parser, Debug)]
#[command(name = "snippetbox")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.snippetbox/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides the configuration file)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the snippetbox CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a new snippet and print its id
    Create(CreateArgs),

    /// Show a live snippet by id
    View(ViewArgs),

    /// List the most recent live snippets
    Latest,

    /// Validate configuration and probe the database
    Check,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `snippetbox create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Snippet title
    #[arg(short, long)]
    pub title: String,

    /// Snippet body
    #[arg(long)]
    pub content: String,

    /// Days until the snippet expires
    #[arg(short, long, default_value_t = i64::from(Retention::ONE_YEAR.as_days()), allow_negative_numbers = true)]
    pub expires: i64,
}

/// Arguments for `snippetbox view`.
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Snippet id
    pub id: SnippetId,
}

/// Subcommands for `snippetbox config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Arguments for `snippetbox config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}
