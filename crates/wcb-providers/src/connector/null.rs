//! Null client connector for testing
//!
//! Accepts every request and returns a client with an empty base URL. No
//! headers are derived.

use std::collections::BTreeMap;
use std::sync::Arc;

use wcb_application::ports::registry::{CLIENT_CONNECTORS, ClientConnectorEntry};
use wcb_domain::error::Result;
use wcb_domain::ports::providers::ClientConnector;
use wcb_domain::value_objects::{
    ClientOptions, CloudConnection, ConnectionMethod, Credentials, CustomConnection,
    LocalConnection, WeaviateClient,
};

use crate::constants::NULL_CONNECTOR_NAME;

/// Null connector for testing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConnector;

impl NullConnector {
    /// Create a new null connector
    pub fn new() -> Self {
        Self
    }

    fn client(
        method: ConnectionMethod,
        credentials: Option<Credentials>,
        options: ClientOptions,
    ) -> WeaviateClient {
        WeaviateClient {
            connector: NULL_CONNECTOR_NAME.to_string(),
            connection_method: method,
            base_url: String::new(),
            headers: BTreeMap::new(),
            credentials,
            timeout: options.timeout,
            retry: options.retry,
        }
    }
}

impl ClientConnector for NullConnector {
    fn name(&self) -> &str {
        NULL_CONNECTOR_NAME
    }

    fn connect_local(&self, request: LocalConnection) -> Result<WeaviateClient> {
        Ok(Self::client(ConnectionMethod::Local, request.credentials, request.options))
    }

    fn connect_cloud(&self, request: CloudConnection) -> Result<WeaviateClient> {
        Ok(Self::client(
            ConnectionMethod::Cloud,
            Some(request.credentials),
            request.options,
        ))
    }

    fn connect_custom(&self, request: CustomConnection) -> Result<WeaviateClient> {
        Ok(Self::client(ConnectionMethod::Custom, request.credentials, request.options))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_connector_factory() -> Arc<dyn ClientConnector> {
    Arc::new(NullConnector::new())
}

#[linkme::distributed_slice(CLIENT_CONNECTORS)]
static NULL_CONNECTOR: ClientConnectorEntry = ClientConnectorEntry {
    name: NULL_CONNECTOR_NAME,
    description: "Null connector for testing (no base URL, no headers)",
    factory: null_connector_factory,
};
