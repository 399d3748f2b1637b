//! Domain Value Objects
//!
//! Immutable value objects built from configuration. Raw schema types are
//! deserialized first; settings types are validated on construction and
//! never mutated afterwards.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`WeaviateConfig`] | Raw `weaviate` configuration block |
//! | [`ConnectionSettings`] | Validated network target |
//! | [`AuthSettings`] | Validated credential |
//! | [`ClientSettings`] | Validated per-client settings bundle |
//! | [`LocalConnection`] | Resolved request for a local client |
//! | [`WeaviateClient`] | Client produced by a connector |

/// Authentication settings
pub mod auth;
/// Per-client settings bundle
pub mod client;
/// Raw configuration schema
pub mod config;
/// Connection settings and derivations
pub mod connection;
/// Resolved connection requests handed to connectors
pub mod request;
/// Host/port/URL helpers
pub mod resolution;
/// Client value produced by connectors
pub mod weaviate_client;

// Re-export commonly used value objects
pub use auth::{AuthSettings, AuthType};
pub use client::{ClientSettings, ConnectionMethod, RequiredField, RetryPolicy};
pub use config::{AuthConfig, ClientConfig, ClientLayout, ConnectionConfig, WeaviateConfig};
pub use connection::ConnectionSettings;
pub use request::{
    ClientOptions, CloudConnection, Credentials, CustomConnection, LocalConnection,
};
pub use weaviate_client::WeaviateClient;
