//! Authentication settings

use super::config::AuthConfig;
use crate::constants::{AUTH_TYPE_API_KEY, AUTH_TYPE_BEARER_TOKEN, AUTH_TYPE_OIDC, AUTH_TYPES};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Authentication mechanism
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthType {
    /// Static API key
    ApiKey,
    /// Pre-issued bearer token
    BearerToken,
    /// OIDC client credentials
    Oidc,
}

impl AuthType {
    /// Configuration name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::ApiKey => AUTH_TYPE_API_KEY,
            AuthType::BearerToken => AUTH_TYPE_BEARER_TOKEN,
            AuthType::Oidc => AUTH_TYPE_OIDC,
        }
    }
}

impl FromStr for AuthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            AUTH_TYPE_API_KEY => Ok(AuthType::ApiKey),
            AUTH_TYPE_BEARER_TOKEN => Ok(AuthType::BearerToken),
            AUTH_TYPE_OIDC => Ok(AuthType::Oidc),
            other => Err(Error::invalid_auth_type(other, &AUTH_TYPES)),
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated credential
#[derive(Clone, PartialEq)]
pub struct AuthSettings {
    auth_type: AuthType,
    api_key: Option<String>,
    bearer_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    additional_params: BTreeMap<String, serde_json::Value>,
}

impl AuthSettings {
    /// Build validated settings from a raw `auth` mapping
    ///
    /// The type is checked first, then the fields the type requires.
    /// Whitespace-only values count as missing.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let auth_type: AuthType = config
            .auth_type
            .as_deref()
            .unwrap_or(AUTH_TYPE_API_KEY)
            .parse()?;

        match auth_type {
            AuthType::ApiKey => {
                require(config.api_key.as_deref(), "api_key", "API key authentication")?;
            }
            AuthType::BearerToken => {
                require(
                    config.bearer_token.as_deref(),
                    "bearer_token",
                    "bearer token authentication",
                )?;
            }
            AuthType::Oidc => {
                require(config.client_id.as_deref(), "client_id", "OIDC authentication")?;
                require(
                    config.client_secret.as_deref(),
                    "client_secret",
                    "OIDC authentication",
                )?;
            }
        }

        Ok(Self {
            auth_type,
            api_key: config.api_key.clone(),
            bearer_token: config.bearer_token.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            scope: config.scope.clone(),
            additional_params: config.additional_params.clone(),
        })
    }

    /// Authentication mechanism
    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    /// API key
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Bearer token
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// OIDC client id
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// OIDC client secret
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// OIDC scope
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Additional parameters
    pub fn additional_params(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.additional_params
    }

    pub fn is_api_key(&self) -> bool {
        self.auth_type == AuthType::ApiKey
    }

    pub fn is_bearer_token(&self) -> bool {
        self.auth_type == AuthType::BearerToken
    }

    pub fn is_oidc(&self) -> bool {
        self.auth_type == AuthType::Oidc
    }

    /// Token carried in the `Authorization` header, if this type has one
    pub fn header_token(&self) -> Option<&str> {
        match self.auth_type {
            AuthType::ApiKey => self.api_key(),
            AuthType::BearerToken => self.bearer_token(),
            AuthType::Oidc => None,
        }
    }
}

// Secrets stay out of logs
impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("auth_type", &self.auth_type)
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

fn require(value: Option<&str>, field: &str, context: &str) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(Error::missing(field, context)),
    }
}
