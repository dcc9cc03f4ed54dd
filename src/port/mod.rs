//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌─────────────────┐      ┌──────────────────┐
//!   │ CLI adapter  │ ───▶ │ SnippetService  │ ───▶ │  SnippetStore    │
//!   │  (inbound)   │      │  (application)  │      │  (outbound port) │
//!   └──────────────┘      └─────────────────┘      └────────┬─────────┘
//!                                                           │
//!                                                  ┌────────▼─────────┐
//!                                                  │ SQLite adapter   │
//!                                                  └──────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::SnippetStore;
