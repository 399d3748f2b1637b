//! Service naming contract
//!
//! Maps container service names to Weaviate client names and describes the
//! registrations a container needs.

use std::any::type_name;
use std::collections::BTreeMap;

use wcb_application::use_cases::{AuthFactory, ClientFactory, ConnectionFactory};
use wcb_domain::constants::DEFAULT_CLIENT_NAME;

use super::client_service::ClientServiceFactory;
use crate::constants::{
    AUTH_FACTORY_SERVICE, CLIENT_FACTORY_SERVICE, CLIENT_SERVICE_ALIAS, CLIENT_SERVICE_PREFIX,
    CLIENT_TYPE_ALIAS, CONNECTION_FACTORY_SERVICE,
};

/// Service name of a named client
pub fn client_service_name(client: &str) -> String {
    format!("{CLIENT_SERVICE_PREFIX}{client}")
}

/// Resolve the default-client aliases to their target service
pub fn resolve_alias(service: &str) -> String {
    if service == CLIENT_SERVICE_ALIAS || service == CLIENT_TYPE_ALIAS {
        client_service_name(DEFAULT_CLIENT_NAME)
    } else {
        service.to_string()
    }
}

/// Client name addressed by a service name, if it is a client service
///
/// Aliases are resolved first. An empty client name is rejected.
pub fn client_name_for_service(service: &str) -> Option<String> {
    let service = resolve_alias(service);
    service
        .strip_prefix(CLIENT_SERVICE_PREFIX)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Registrations a container needs for Weaviate clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistrations {
    /// Service name to component type
    pub factories: BTreeMap<&'static str, &'static str>,
    /// Alias to target service name
    pub aliases: BTreeMap<&'static str, String>,
    /// Abstract factories answering `weaviate.client.{name}` requests
    pub abstract_factories: Vec<&'static str>,
}

/// Describes the services this crate contributes to a container
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigProvider;

impl ConfigProvider {
    /// Create a new provider
    pub fn new() -> Self {
        Self
    }

    /// Factories, aliases and abstract factories to register
    pub fn registrations(&self) -> ServiceRegistrations {
        let factories = BTreeMap::from([
            (CONNECTION_FACTORY_SERVICE, type_name::<ConnectionFactory>()),
            (AUTH_FACTORY_SERVICE, type_name::<AuthFactory>()),
            (CLIENT_FACTORY_SERVICE, type_name::<ClientFactory>()),
        ]);
        let default_client = client_service_name(DEFAULT_CLIENT_NAME);
        let aliases = BTreeMap::from([
            (CLIENT_SERVICE_ALIAS, default_client.clone()),
            (CLIENT_TYPE_ALIAS, default_client),
        ]);

        ServiceRegistrations {
            factories,
            aliases,
            abstract_factories: vec![type_name::<ClientServiceFactory>()],
        }
    }
}
