//! Resolved connection requests
//!
//! What a construction strategy hands to a [`ClientConnector`](crate::ports::providers::ClientConnector)
//! once configuration has been validated and host/port/URL values derived.

use super::auth::{AuthSettings, AuthType};
use super::client::RetryPolicy;
use crate::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX, SUPPORTED_CLIENT_AUTH_TYPES};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Credential a client can be constructed with
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Static API key
    ApiKey(String),
    /// Pre-issued bearer token
    BearerToken(String),
}

impl Credentials {
    /// Convert validated auth settings into client credentials
    ///
    /// OIDC is not available for client construction and fails with
    /// [`Error::InvalidAuthType`] listing the supported types.
    pub fn from_auth(auth: &AuthSettings) -> Result<Self> {
        match auth.auth_type() {
            AuthType::ApiKey => Ok(Credentials::ApiKey(
                auth.api_key().unwrap_or_default().to_string(),
            )),
            AuthType::BearerToken => Ok(Credentials::BearerToken(
                auth.bearer_token().unwrap_or_default().to_string(),
            )),
            AuthType::Oidc => Err(Error::invalid_auth_type(
                auth.auth_type().as_str(),
                &SUPPORTED_CLIENT_AUTH_TYPES,
            )),
        }
    }

    /// Secret carried by the credential
    pub fn secret(&self) -> &str {
        match self {
            Credentials::ApiKey(secret) | Credentials::BearerToken(secret) => secret,
        }
    }

    /// `Authorization` header name and value
    pub fn authorization_header(&self) -> (String, String) {
        (
            AUTHORIZATION_HEADER.to_string(),
            format!("{BEARER_PREFIX}{}", self.secret()),
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
            Credentials::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
        }
    }
}

/// Transport options shared by every construction strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Request timeout
    pub timeout: Duration,
    /// Retry behaviour
    pub retry: RetryPolicy,
    /// Headers from `connection.headers`
    pub transport_headers: BTreeMap<String, String>,
}

/// Request to connect to a local instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalConnection {
    /// Host, with the port appended unless implied by the protocol
    pub host: String,
    /// Use https
    pub secure: bool,
    /// Credential, if configured
    pub credentials: Option<Credentials>,
    /// Transport options
    pub options: ClientOptions,
}

/// Request to connect to a hosted cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudConnection {
    /// Cluster endpoint as configured
    pub cluster_url: String,
    /// Cluster URL with its protocol
    pub url: String,
    /// Credential (always present for cloud)
    pub credentials: Credentials,
    /// Transport options
    pub options: ClientOptions,
}

/// Request to connect to an arbitrary host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomConnection {
    /// Host without an embedded port
    pub host: String,
    /// Effective port
    pub port: u16,
    /// Use https
    pub secure: bool,
    /// Credential, if configured
    pub credentials: Option<Credentials>,
    /// Headers from `additional_headers`
    pub headers: BTreeMap<String, String>,
    /// Transport options
    pub options: ClientOptions,
}
