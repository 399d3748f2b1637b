//! Client Factory Use Case
//!
//! Resolves a named client, validates its settings and dispatches on the
//! connection method to a connector.

use std::sync::Arc;

use tracing::{debug, info};
use wcb_domain::error::Result;
use wcb_domain::ports::providers::ClientConnector;
use wcb_domain::value_objects::{ClientSettings, ConnectionMethod, WeaviateClient, WeaviateConfig};

use super::client_resolution::resolve_client_settings;
use super::construction::{cloud_request, custom_request, local_request};
use crate::ports::registry::resolve_client_connector;

/// Builds Weaviate clients for named client configurations
#[derive(Clone)]
pub struct ClientFactory {
    config: Arc<WeaviateConfig>,
    default_connector: Arc<dyn ClientConnector>,
}

impl ClientFactory {
    /// Create a factory using `default_connector` unless a client names its own
    pub fn new(config: Arc<WeaviateConfig>, default_connector: Arc<dyn ClientConnector>) -> Self {
        Self {
            config,
            default_connector,
        }
    }

    /// Configuration block the factory reads from
    pub fn config(&self) -> &WeaviateConfig {
        &self.config
    }

    /// Name of the connector used when a client names none
    pub fn default_connector_name(&self) -> &str {
        self.default_connector.name()
    }

    /// Build the client configured under `name`
    pub fn create(&self, name: &str) -> Result<WeaviateClient> {
        let settings = resolve_client_settings(&self.config, name)?;
        self.create_from_settings(name, &settings)
    }

    /// Build a client from already validated settings
    pub fn create_from_settings(
        &self,
        name: &str,
        settings: &ClientSettings,
    ) -> Result<WeaviateClient> {
        let connector = self.select_connector(settings)?;
        let method = settings.connection_method();
        debug!(client = %name, method = %method, connector = connector.name(), "Dispatching client construction");

        let client = match method {
            ConnectionMethod::Local => connector.connect_local(local_request(settings)?)?,
            ConnectionMethod::Cloud => connector.connect_cloud(cloud_request(settings)?)?,
            ConnectionMethod::Custom => connector.connect_custom(custom_request(settings)?)?,
        };

        info!(client = %name, method = %method, base_url = %client.base_url, "Weaviate client created");
        Ok(client)
    }

    fn select_connector(&self, settings: &ClientSettings) -> Result<Arc<dyn ClientConnector>> {
        match settings.client_connector() {
            Some(name) => resolve_client_connector(name),
            None => Ok(Arc::clone(&self.default_connector)),
        }
    }
}

impl std::fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientFactory")
            .field("default_connector", &self.default_connector.name())
            .finish_non_exhaustive()
    }
}
