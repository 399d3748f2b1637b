//! Client Connector Registry
//!
//! Connectors register themselves via `#[linkme::distributed_slice]` and are
//! resolved by name at runtime.

use std::sync::Arc;

use wcb_domain::error::{Error, Result};
use wcb_domain::ports::providers::ClientConnector;

/// Registry entry for client connectors
///
/// Each connector implementation registers itself with this entry using
/// `#[linkme::distributed_slice(CLIENT_CONNECTORS)]`.
pub struct ClientConnectorEntry {
    /// Unique connector name (e.g., "standard", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the connector
    pub factory: fn() -> Arc<dyn ClientConnector>,
}

// Auto-collection via linkme distributed slices - connectors submit entries at compile time
#[linkme::distributed_slice]
pub static CLIENT_CONNECTORS: [ClientConnectorEntry] = [..];

/// Resolve a client connector by name
///
/// Fails with [`Error::InvalidClientConnector`] listing the registered
/// connectors when no entry matches.
///
/// # Example
///
/// ```ignore
/// let connector = resolve_client_connector("standard")?;
/// let client = connector.connect_local(request)?;
/// ```
pub fn resolve_client_connector(name: &str) -> Result<Arc<dyn ClientConnector>> {
    if let Some(entry) = CLIENT_CONNECTORS.iter().find(|e| e.name == name) {
        return Ok((entry.factory)());
    }

    let available: Vec<&str> = CLIENT_CONNECTORS.iter().map(|e| e.name).collect();
    Err(Error::InvalidClientConnector {
        name: name.to_string(),
        available: available.join(", "),
    })
}

/// List all registered client connectors
///
/// Returns `(name, description)` pairs.
pub fn list_client_connectors() -> Vec<(&'static str, &'static str)> {
    CLIENT_CONNECTORS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
