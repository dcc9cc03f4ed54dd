//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod store;

pub use settings::Config;
