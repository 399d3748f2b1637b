//! Application Ports
//!
//! - **registry/** - Auto-registration system for client connectors

/// Connector registry for dynamic connector discovery
pub mod registry;

pub use registry::{
    CLIENT_CONNECTORS, ClientConnectorEntry, list_client_connectors, resolve_client_connector,
};
