//! Snippetbox - short text snippets with a retention period.
//!
//! Snippets are created with a title, a body and a lifetime in days. Once a
//! snippet's expiry instant passes it is invisible to every read, and the
//! recency listing only ever shows the ten newest live snippets.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Snippet entity, ids and retention rules
//! - [`port`] - The [`port::SnippetStore`] trait the application depends on
//! - [`adapter`] - SQLite store (outbound) and the command-line interface (inbound)
//! - [`application`] - [`application::SnippetService`], deadline handling
//! - [`infrastructure`] - Configuration, logging and service wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use snippetbox::domain::Retention;
//! use snippetbox::infrastructure::bootstrap::build_service;
//! use snippetbox::infrastructure::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     let service = build_service(&config)?;
//!
//!     let id = service.create("O snail", "Climb Mount Fuji", Retention::ONE_WEEK).await?;
//!     let snippet = service.get(id).await?;
//!     println!("{}: {}", snippet.title, snippet.content);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
