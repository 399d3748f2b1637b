//! Abstract client service factory
//!
//! Answers requests for `weaviate.client.{name}` services. Clients are built
//! on first request and cached per client name.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;
use wcb_application::use_cases::{ClientFactory, configured_client_names, has_client};
use wcb_domain::error::{Error, Result};
use wcb_domain::value_objects::WeaviateClient;

use super::services::{client_name_for_service, client_service_name};

/// Builds and caches Weaviate clients addressed by service name
pub struct ClientServiceFactory {
    factory: ClientFactory,
    clients: RwLock<HashMap<String, Arc<WeaviateClient>>>,
}

impl ClientServiceFactory {
    /// Create a service factory over a client factory
    pub fn new(factory: ClientFactory) -> Self {
        Self {
            factory,
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Whether `service` names a configured client
    pub fn can_create(&self, service: &str) -> bool {
        client_name_for_service(service).is_some_and(|name| has_client(self.factory.config(), &name))
    }

    /// Build, or return the cached, client for `service`
    pub fn create(&self, service: &str) -> Result<Arc<WeaviateClient>> {
        let name = client_name_for_service(service).ok_or_else(|| {
            Error::configuration(format!("Service '{service}' is not a Weaviate client service"))
        })?;

        if let Some(client) = self
            .clients
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&name)
        {
            debug!(client = %name, "Returning cached Weaviate client");
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(self.factory.create(&name)?);
        let mut clients = self.clients.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(clients.entry(name).or_insert(client)))
    }

    /// Build, or return the cached, client configured under `name`
    pub fn client(&self, name: &str) -> Result<Arc<WeaviateClient>> {
        self.create(&client_service_name(name))
    }

    /// Names of every configured client
    pub fn configured_clients(&self) -> Vec<String> {
        configured_client_names(self.factory.config())
    }

    /// Underlying client factory
    pub fn factory(&self) -> &ClientFactory {
        &self.factory
    }
}

impl std::fmt::Debug for ClientServiceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientServiceFactory")
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}
