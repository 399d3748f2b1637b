//! Standard client connector
//!
//! Builds a [`WeaviateClient`] from a resolved request: the base URL the
//! transport talks to, the headers sent with every request and the
//! credential.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;
use wcb_application::ports::registry::{CLIENT_CONNECTORS, ClientConnectorEntry};
use wcb_domain::error::Result;
use wcb_domain::ports::providers::ClientConnector;
use wcb_domain::value_objects::resolution::{host_with_port, protocol};
use wcb_domain::value_objects::{
    ClientOptions, CloudConnection, ConnectionMethod, Credentials, CustomConnection,
    LocalConnection, WeaviateClient,
};

use crate::constants::STANDARD_CONNECTOR_NAME;

/// Default connector
///
/// Request headers are layered: transport headers first, then the
/// additional headers of a custom connection, then `Authorization`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConnector;

impl StandardConnector {
    /// Create a new standard connector
    pub fn new() -> Self {
        Self
    }

    fn build(
        method: ConnectionMethod,
        base_url: String,
        extra_headers: Option<&BTreeMap<String, String>>,
        credentials: Option<Credentials>,
        options: ClientOptions,
    ) -> WeaviateClient {
        let mut headers = options.transport_headers;
        if let Some(extra) = extra_headers {
            headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(credentials) = &credentials {
            let (name, value) = credentials.authorization_header();
            headers.insert(name, value);
        }

        debug!(method = %method, base_url = %base_url, headers = headers.len(), "Built Weaviate client");

        WeaviateClient {
            connector: STANDARD_CONNECTOR_NAME.to_string(),
            connection_method: method,
            base_url,
            headers,
            credentials,
            timeout: options.timeout,
            retry: options.retry,
        }
    }
}

impl ClientConnector for StandardConnector {
    fn name(&self) -> &str {
        STANDARD_CONNECTOR_NAME
    }

    fn connect_local(&self, request: LocalConnection) -> Result<WeaviateClient> {
        let base_url = format!("{}://{}", protocol(request.secure), request.host);
        Ok(Self::build(
            ConnectionMethod::Local,
            base_url,
            None,
            request.credentials,
            request.options,
        ))
    }

    fn connect_cloud(&self, request: CloudConnection) -> Result<WeaviateClient> {
        Ok(Self::build(
            ConnectionMethod::Cloud,
            request.url,
            None,
            Some(request.credentials),
            request.options,
        ))
    }

    fn connect_custom(&self, request: CustomConnection) -> Result<WeaviateClient> {
        let base_url = format!(
            "{}://{}",
            protocol(request.secure),
            host_with_port(&request.host, request.port, request.secure)
        );
        Ok(Self::build(
            ConnectionMethod::Custom,
            base_url,
            Some(&request.headers),
            request.credentials,
            request.options,
        ))
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn standard_connector_factory() -> Arc<dyn ClientConnector> {
    Arc::new(StandardConnector::new())
}

#[linkme::distributed_slice(CLIENT_CONNECTORS)]
static STANDARD_CONNECTOR: ClientConnectorEntry = ClientConnectorEntry {
    name: STANDARD_CONNECTOR_NAME,
    description: "Standard connector (base URL, merged headers and credentials)",
    factory: standard_connector_factory,
};
