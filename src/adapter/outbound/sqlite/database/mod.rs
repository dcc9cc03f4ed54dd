//! SQLite database modules.
//!
//! Provides connection pooling, embedded migrations, the Diesel schema and
//! row types for the `snippets` table.

pub mod connection;
pub mod model;
pub mod schema;
