//! Per-client settings bundle
//!
//! [`ClientSettings`] ties a connection method to its connection, optional
//! credential and retry policy. Each [`ConnectionMethod`] carries its own
//! checklist of [`RequiredField`]s, checked when the settings are built.

use super::auth::AuthSettings;
use super::config::ClientConfig;
use super::connection::ConnectionSettings;
use crate::constants::{
    AUTHORIZATION_HEADER, BEARER_PREFIX, CONNECTION_METHOD_CLOUD, CONNECTION_METHOD_CUSTOM,
    CONNECTION_METHOD_LOCAL, CONNECTION_METHODS, DEFAULT_MAX_RETRIES, MAX_RETRIES_LIMIT,
};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Connection Method
// ============================================================================

/// Strategy used to reach Weaviate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionMethod {
    /// Loopback instance (default host `localhost`)
    #[default]
    Local,
    /// Hosted cluster reached through its cluster URL
    Cloud,
    /// Arbitrary host and port
    Custom,
}

/// A field a connection method cannot do without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// Non-empty `connection.cluster_url`
    ClusterUrl,
    /// Non-empty `connection.host`
    Host,
    /// An `auth` section
    Auth,
}

impl RequiredField {
    /// Configuration key of the field
    pub fn name(&self) -> &'static str {
        match self {
            RequiredField::ClusterUrl => "cluster_url",
            RequiredField::Host => "host",
            RequiredField::Auth => "auth",
        }
    }

    /// Whether the field is present and non-blank
    pub fn is_satisfied(
        &self,
        connection: &ConnectionSettings,
        auth: Option<&AuthSettings>,
    ) -> bool {
        match self {
            RequiredField::ClusterUrl => non_blank(connection.cluster_url()),
            RequiredField::Host => non_blank(connection.host()),
            RequiredField::Auth => auth.is_some(),
        }
    }
}

impl ConnectionMethod {
    /// Configuration name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionMethod::Local => CONNECTION_METHOD_LOCAL,
            ConnectionMethod::Cloud => CONNECTION_METHOD_CLOUD,
            ConnectionMethod::Custom => CONNECTION_METHOD_CUSTOM,
        }
    }

    /// Context used in error messages
    pub fn context(&self) -> &'static str {
        match self {
            ConnectionMethod::Local => "local connection",
            ConnectionMethod::Cloud => "cloud connection",
            ConnectionMethod::Custom => "custom connection",
        }
    }

    /// Fields this method requires, in checking order
    pub fn required_fields(&self) -> &'static [RequiredField] {
        match self {
            ConnectionMethod::Local => &[],
            ConnectionMethod::Cloud => &[RequiredField::ClusterUrl, RequiredField::Auth],
            ConnectionMethod::Custom => &[RequiredField::Host],
        }
    }

    /// Check the method's required fields, failing on the first missing one
    pub fn validate(
        &self,
        connection: &ConnectionSettings,
        auth: Option<&AuthSettings>,
    ) -> Result<()> {
        match self
            .required_fields()
            .iter()
            .find(|field| !field.is_satisfied(connection, auth))
        {
            Some(field) => Err(Error::missing(field.name(), self.context())),
            None => Ok(()),
        }
    }
}

impl FromStr for ConnectionMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            CONNECTION_METHOD_LOCAL => Ok(ConnectionMethod::Local),
            CONNECTION_METHOD_CLOUD => Ok(ConnectionMethod::Cloud),
            CONNECTION_METHOD_CUSTOM => Ok(ConnectionMethod::Custom),
            other => Err(Error::invalid_connection_method(other, &CONNECTION_METHODS)),
        }
    }
}

impl fmt::Display for ConnectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Retry Policy
// ============================================================================

/// Retry behaviour handed to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retry failed requests
    pub enabled: bool,
    /// Maximum number of retries, within `[0, 10]`
    pub max_retries: u8,
}

impl RetryPolicy {
    /// Build a retry policy, validating `max_retries`
    pub fn from_config(enabled: Option<bool>, max_retries: Option<i64>) -> Result<Self> {
        let max_retries = match max_retries {
            None => DEFAULT_MAX_RETRIES,
            Some(n) if n < 0 => {
                return Err(Error::invalid_retry(format!(
                    "max_retries must be at least 0, got {n}"
                )));
            }
            Some(n) if n > MAX_RETRIES_LIMIT => {
                return Err(Error::invalid_retry(format!(
                    "max_retries must be at most {MAX_RETRIES_LIMIT}, got {n}"
                )));
            }
            Some(n) => {
                u8::try_from(n).map_err(|_| Error::invalid_retry("max_retries out of range"))?
            }
        };

        Ok(Self {
            enabled: enabled.unwrap_or(true),
            max_retries,
        })
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

// ============================================================================
// Client Settings
// ============================================================================

/// Validated per-client settings
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    connection_method: ConnectionMethod,
    connection: ConnectionSettings,
    auth: Option<AuthSettings>,
    additional_headers: BTreeMap<String, String>,
    retry: RetryPolicy,
    client_connector: Option<String>,
}

impl ClientSettings {
    /// Build validated settings from a raw per-client mapping
    ///
    /// Checks, in order: connection method, connection, auth, retry bounds,
    /// then the fields the connection method requires.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let connection_method = match config.connection_method.as_deref() {
            Some(method) => method.parse()?,
            None => ConnectionMethod::default(),
        };

        let connection = match &config.connection {
            Some(connection) => ConnectionSettings::from_config(connection)?,
            None => ConnectionSettings::default(),
        };

        let auth = config
            .auth
            .as_ref()
            .map(AuthSettings::from_config)
            .transpose()?;

        let retry = RetryPolicy::from_config(config.enable_retry, config.max_retries)?;

        connection_method.validate(&connection, auth.as_ref())?;

        Ok(Self {
            connection_method,
            connection,
            auth,
            additional_headers: config.additional_headers.clone(),
            retry,
            client_connector: config.client_connector.clone(),
        })
    }

    /// Selected connection method
    pub fn connection_method(&self) -> ConnectionMethod {
        self.connection_method
    }

    /// Connection settings
    pub fn connection(&self) -> &ConnectionSettings {
        &self.connection
    }

    /// Credential, if configured
    pub fn auth(&self) -> Option<&AuthSettings> {
        self.auth.as_ref()
    }

    /// Headers configured under `additional_headers`
    pub fn additional_headers(&self) -> &BTreeMap<String, String> {
        &self.additional_headers
    }

    /// Retry policy
    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    /// Named connector overriding the default one
    pub fn client_connector(&self) -> Option<&str> {
        self.client_connector.as_deref()
    }

    /// Additional headers overlaid with the `Authorization` header
    ///
    /// API key and bearer token credentials contribute
    /// `Authorization: Bearer {token}`; OIDC contributes nothing here.
    pub fn all_headers(&self) -> BTreeMap<String, String> {
        let mut headers = self.additional_headers.clone();
        if let Some(token) = self.auth.as_ref().and_then(AuthSettings::header_token) {
            headers.insert(
                AUTHORIZATION_HEADER.to_string(),
                format!("{BEARER_PREFIX}{token}"),
            );
        }
        headers
    }
}

fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
