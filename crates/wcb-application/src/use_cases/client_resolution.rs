//! Named-client resolution
//!
//! A `weaviate` block is either a legacy single-client block or carries a
//! `clients` registry. The shape is decided once, by
//! [`WeaviateConfig::layout`], and every lookup below matches on it.

use std::sync::Arc;

use tracing::debug;
use wcb_domain::constants::DEFAULT_CLIENT_NAME;
use wcb_domain::error::{Error, Result};
use wcb_domain::value_objects::{
    AuthConfig, AuthSettings, ClientConfig, ClientLayout, ClientSettings, ConnectionConfig,
    ConnectionSettings, WeaviateConfig,
};

/// Resolve the raw configuration of a named client
///
/// 1. A registry entry for `name` is used exclusively, with no merge of
///    top-level keys.
/// 2. Without a registry, `default` resolves to the top-level block.
/// 3. Anything else fails with [`Error::ClientNotFound`].
pub fn resolve_client_config<'a>(config: &'a WeaviateConfig, name: &str) -> Result<&'a ClientConfig> {
    match config.layout() {
        ClientLayout::Registry(clients) => clients
            .get(name)
            .ok_or_else(|| Error::client_not_found(name)),
        ClientLayout::Legacy(global) if name == DEFAULT_CLIENT_NAME => Ok(global),
        ClientLayout::Legacy(_) => Err(Error::client_not_found(name)),
    }
}

/// Resolve and validate the settings of a named client
pub fn resolve_client_settings(config: &WeaviateConfig, name: &str) -> Result<ClientSettings> {
    let raw = resolve_client_config(config, name)?;
    debug!(client = %name, registry = config.has_registry(), "Resolving client settings");
    ClientSettings::from_config(raw)
}

/// Whether a client configuration exists for `name`
pub fn has_client(config: &WeaviateConfig, name: &str) -> bool {
    resolve_client_config(config, name).is_ok()
}

/// Names of every resolvable client
pub fn configured_client_names(config: &WeaviateConfig) -> Vec<String> {
    match config.layout() {
        ClientLayout::Registry(clients) => clients.keys().cloned().collect(),
        ClientLayout::Legacy(_) => vec![DEFAULT_CLIENT_NAME.to_string()],
    }
}

/// Registry entry for `name`, if a registry exists and contains it
fn registry_entry<'a>(config: &'a WeaviateConfig, name: &str) -> Option<&'a ClientConfig> {
    config.clients.as_ref()?.get(name)
}

// ============================================================================
// Auth Factory
// ============================================================================

/// Resolves the credential of a named client
///
/// The client's own `auth` section wins; otherwise the top-level `auth`
/// section applies.
#[derive(Debug, Clone)]
pub struct AuthFactory {
    config: Arc<WeaviateConfig>,
}

impl AuthFactory {
    /// Create a factory over a shared configuration block
    pub fn new(config: Arc<WeaviateConfig>) -> Self {
        Self { config }
    }

    fn raw(&self, name: &str) -> Option<&AuthConfig> {
        registry_entry(&self.config, name)
            .and_then(|client| client.auth.as_ref())
            .or(self.config.global.auth.as_ref())
    }

    /// Resolve the credential of `name`, failing when none is configured
    pub fn resolve(&self, name: &str) -> Result<AuthSettings> {
        let raw = self.raw(name).ok_or_else(|| {
            Error::missing(
                "auth",
                format!("client '{name}' or global Weaviate configuration"),
            )
        })?;
        AuthSettings::from_config(raw)
    }

    /// Resolve the credential of `name`, `None` when none is configured
    pub fn resolve_optional(&self, name: &str) -> Result<Option<AuthSettings>> {
        self.raw(name).map(AuthSettings::from_config).transpose()
    }
}

// ============================================================================
// Connection Factory
// ============================================================================

/// Resolves the connection settings of a named client
///
/// The client's own `connection` section wins, then the top-level one, then
/// the defaults.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    config: Arc<WeaviateConfig>,
}

impl ConnectionFactory {
    /// Create a factory over a shared configuration block
    pub fn new(config: Arc<WeaviateConfig>) -> Self {
        Self { config }
    }

    fn raw(&self, name: &str) -> Option<&ConnectionConfig> {
        registry_entry(&self.config, name)
            .and_then(|client| client.connection.as_ref())
            .or(self.config.global.connection.as_ref())
    }

    /// Resolve the connection settings of `name`
    pub fn resolve(&self, name: &str) -> Result<ConnectionSettings> {
        match self.raw(name) {
            Some(raw) => ConnectionSettings::from_config(raw),
            None => Ok(ConnectionSettings::default()),
        }
    }
}
