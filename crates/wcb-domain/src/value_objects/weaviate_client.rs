//! Weaviate client value

use super::client::{ConnectionMethod, RetryPolicy};
use super::request::Credentials;
use std::collections::BTreeMap;
use std::time::Duration;

/// A constructed Weaviate client
///
/// Produced by a connector from a resolved connection request. Carries
/// everything a transport needs to talk to the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaviateClient {
    /// Name of the connector that built the client
    pub connector: String,
    /// Strategy the client was built with
    pub connection_method: ConnectionMethod,
    /// Base URL requests are sent to
    pub base_url: String,
    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
    /// Credential, if any
    pub credentials: Option<Credentials>,
    /// Request timeout
    pub timeout: Duration,
    /// Retry behaviour
    pub retry: RetryPolicy,
}

impl WeaviateClient {
    /// Whether the client authenticates its requests
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Value of a request header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
