//! # Weaviate Client Bridge - Connector Implementations
//!
//! Each connector implements the `ClientConnector` port defined in
//! `wcb-domain` and registers itself in the connector registry declared by
//! `wcb-application`.
//!
//! | Connector | Description |
//! |-----------|-------------|
//! | `standard` | Builds a client for the resolved base URL, headers and credentials |
//! | `null` | Builds clients without a base URL, for tests |
//!
//! ## Usage
//!
//! ```ignore
//! use wcb_providers::connector::StandardConnector;
//! ```

// Re-export wcb-domain types commonly used with connectors
pub use wcb_domain::error::{Error, Result};
pub use wcb_domain::ports::providers::ClientConnector;

/// Provider-specific constants
pub mod constants;

/// Client connector implementations
pub mod connector;

pub use connector::{NullConnector, StandardConnector};
