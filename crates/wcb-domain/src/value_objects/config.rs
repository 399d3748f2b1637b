//! Raw configuration schema
//!
//! Mirrors the `weaviate` configuration block as it appears in TOML files,
//! environment overrides or JSON literals. Every field is optional here;
//! validation happens when the raw values are turned into settings.
//!
//! ```text
//! weaviate:
//!   connection_method, connection{..}, auth{..}, additional_headers{..},
//!   enable_retry, max_retries, client_connector,
//!   clients: { name: <same per-client shape> }
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw `connection` mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Host, optionally with an embedded `:port`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port (validated into `[1, 65535]`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// Use https
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    /// Cloud cluster endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_url: Option<String>,
    /// Timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// Transport headers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

/// Raw `auth` mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication type (`api_key` when absent)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    /// API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// OIDC client id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// OIDC client secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// OIDC scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Free-form additional parameters
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_params: BTreeMap<String, serde_json::Value>,
}

/// Raw per-client configuration
///
/// Used both for entries of the `clients` registry and for the top-level
/// block of single-client configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// `local`, `cloud` or `custom` (`local` when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_method: Option<String>,
    /// Connection mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionConfig>,
    /// Authentication mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
    /// Headers sent with every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_headers: BTreeMap<String, String>,
    /// Retry failed requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_retry: Option<bool>,
    /// Maximum retries (validated into `[0, 10]`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
    /// Name of a registered connector overriding the default one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_connector: Option<String>,
}

/// Raw `weaviate` configuration block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaviateConfig {
    /// Top-level per-client keys (global fallbacks, or the legacy default client)
    #[serde(flatten)]
    pub global: ClientConfig,
    /// Named client registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients: Option<BTreeMap<String, ClientConfig>>,
}

/// The two configuration shapes a `weaviate` block can take
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClientLayout<'a> {
    /// No `clients` registry: the block itself is the `default` client
    Legacy(&'a ClientConfig),
    /// A `clients` registry is present (possibly empty)
    Registry(&'a BTreeMap<String, ClientConfig>),
}

impl WeaviateConfig {
    /// Deserialize a `weaviate` block from a JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Which of the two configuration shapes this block uses
    pub fn layout(&self) -> ClientLayout<'_> {
        match &self.clients {
            Some(clients) => ClientLayout::Registry(clients),
            None => ClientLayout::Legacy(&self.global),
        }
    }

    /// Whether a named client registry is present
    pub fn has_registry(&self) -> bool {
        self.clients.is_some()
    }
}

impl ClientConfig {
    /// Deserialize a per-client mapping from a JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
