//! Storage-free domain types for snippets.
//!
//! Nothing in here touches the database or the terminal. Adapters convert
//! their own row and argument types into these before handing them to the
//! application layer.

pub mod error;
pub mod snippet;

pub use error::DomainError;
pub use snippet::{Retention, Snippet, SnippetId, LATEST_LIMIT};
