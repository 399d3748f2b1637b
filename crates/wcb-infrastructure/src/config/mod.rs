//! Application configuration
//!
//! [`AppConfig`] holds the `weaviate` block and the logging settings.
//! [`ConfigLoader`] merges defaults, a TOML file and environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig};
