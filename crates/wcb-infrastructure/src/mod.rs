//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around Weaviate client construction.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML and environment configuration via figment |
//! | [`di`] | dill catalog, service names and the client service factory |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use di::{ClientServiceFactory, ConfigProvider, build_catalog};
pub use error_ext::ErrorContext;
