//! Connection settings
//!
//! Validated network target of a Weaviate client. Derived values (URL,
//! host-only, effective port, local/cloud classification) are computed on
//! demand and never re-validate.

use super::config::ConnectionConfig;
use super::resolution::{embedded_port, host_only, url_for};
use crate::constants::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, LOOPBACK_HOSTS};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::time::Duration;

/// Validated network target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    host: Option<String>,
    port: u16,
    secure: bool,
    cluster_url: Option<String>,
    timeout_secs: u64,
    headers: BTreeMap<String, String>,
}

impl ConnectionSettings {
    /// Build validated settings from a raw `connection` mapping
    ///
    /// Fails with [`Error::InvalidPort`] when the port lies outside
    /// `[1, 65535]` and with [`Error::InvalidTimeout`] when the timeout is
    /// not strictly positive.
    pub fn from_config(config: &ConnectionConfig) -> Result<Self> {
        let port = config.port.unwrap_or(i64::from(DEFAULT_PORT));
        let port = u16::try_from(port)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(Error::InvalidPort { port })?;

        let timeout = config
            .timeout
            .unwrap_or(DEFAULT_TIMEOUT_SECS.cast_signed());
        let timeout_secs = u64::try_from(timeout)
            .ok()
            .filter(|t| *t > 0)
            .ok_or(Error::InvalidTimeout { timeout })?;

        Ok(Self {
            host: config.host.clone(),
            port,
            secure: config.secure.unwrap_or(false),
            cluster_url: config.cluster_url.clone(),
            timeout_secs,
            headers: config.headers.clone(),
        })
    }

    /// Configured host, possibly with an embedded port
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Configured port field
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether https is used
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Cloud cluster endpoint
    pub fn cluster_url(&self) -> Option<&str> {
        self.cluster_url.as_deref()
    }

    /// Timeout in seconds
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Transport headers
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Effective URL
    ///
    /// 1. `cluster_url` set: `{protocol}://{cluster_url}`
    /// 2. no host: [`Error::MissingRequiredConfig`] for `host`
    /// 3. host embeds a port: `{protocol}://{host}` verbatim
    /// 4. otherwise: `{protocol}://{host}:{port}`
    pub fn url(&self) -> Result<String> {
        if let Some(cluster_url) = &self.cluster_url {
            return Ok(url_for(self.secure, cluster_url));
        }
        let host = self
            .host
            .as_deref()
            .ok_or_else(|| Error::missing("host", "connection URL"))?;
        if host.contains(':') {
            Ok(url_for(self.secure, host))
        } else {
            Ok(url_for(self.secure, &format!("{host}:{}", self.port)))
        }
    }

    /// Host with any embedded port stripped
    pub fn host_only(&self) -> Option<&str> {
        self.host.as_deref().map(host_only)
    }

    /// Port embedded in the host when present and numeric, else the port field
    pub fn effective_port(&self) -> u16 {
        self.host
            .as_deref()
            .and_then(embedded_port)
            .unwrap_or(self.port)
    }

    /// True iff a cluster URL is configured
    pub fn is_cloud(&self) -> bool {
        self.cluster_url.is_some()
    }

    /// True iff not cloud and the host is a loopback name
    pub fn is_local(&self) -> bool {
        !self.is_cloud()
            && self
                .host_only()
                .is_some_and(|host| LOOPBACK_HOSTS.contains(&host))
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            secure: false,
            cluster_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            headers: BTreeMap::new(),
        }
    }
}
