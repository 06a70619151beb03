//! Application configuration: file loading, defaults, and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, TerminalConfig};
