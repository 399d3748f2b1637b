//! # Weaviate Client Bridge - Domain Layer
//!
//! Typed, validated representations of the settings needed to build a
//! Weaviate client, and the port through which clients are constructed.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Configuration error taxonomy |
//! | [`constants`] | Defaults and closed value sets |
//! | [`value_objects`] | Raw configuration schema and validated settings |
//! | [`ports`] | `ClientConnector` port implemented by providers |
//!
//! ## Pipeline
//!
//! ```text
//! raw config (serde) → settings (validated) → resolution (url/host/port) → connector
//! ```

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ports::providers::ClientConnector;
pub use value_objects::{
    AuthConfig, AuthSettings, AuthType, ClientConfig, ClientLayout, ClientOptions, ClientSettings,
    CloudConnection, ConnectionConfig, ConnectionMethod, ConnectionSettings, Credentials,
    CustomConnection, LocalConnection, RetryPolicy, WeaviateClient, WeaviateConfig,
};
