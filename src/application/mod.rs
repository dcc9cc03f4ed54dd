//! Application layer: use cases built on ports.

pub mod snippet;

pub use snippet::SnippetService;
