//! Error handling types
//!
//! Every failure raised while turning configuration into a Weaviate client is
//! a configuration error of one of the kinds below. Validation is fail-fast:
//! errors are produced at construction time and propagate to the caller.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Weaviate Client Bridge
#[derive(Error, Debug)]
pub enum Error {
    /// Connection method outside of `local`, `cloud`, `custom`
    #[error("Invalid connection method '{method}'. Valid methods are: {valid}")]
    InvalidConnectionMethod {
        /// The rejected connection method
        method: String,
        /// Comma separated list of accepted methods
        valid: String,
    },

    /// A required field is absent or empty after trimming
    #[error("Missing required configuration '{field}' for {context}")]
    MissingRequiredConfig {
        /// Name of the missing field
        field: String,
        /// Human readable context (e.g. "cloud connection")
        context: String,
    },

    /// Authentication type outside of the supported set
    #[error("Invalid authentication type '{auth_type}'. Supported types are: {valid}")]
    InvalidAuthType {
        /// The rejected authentication type
        auth_type: String,
        /// Comma separated list of accepted types
        valid: String,
    },

    /// Port outside of `[1, 65535]`
    #[error("Invalid port {port}. Port must be between 1 and 65535")]
    InvalidPort {
        /// The rejected port
        port: i64,
    },

    /// Timeout that is not strictly positive
    #[error("Invalid timeout {timeout}. Timeout must be greater than 0 seconds")]
    InvalidTimeout {
        /// The rejected timeout in seconds
        timeout: i64,
    },

    /// Retry configuration outside of its bounds
    #[error("Invalid retry configuration: {message}")]
    InvalidRetryConfig {
        /// Which bound was violated
        message: String,
    },

    /// Named client absent from the registry
    #[error("Weaviate client '{name}' is not configured")]
    ClientNotFound {
        /// The requested client name
        name: String,
    },

    /// Configured connector is not a registered client connector
    #[error("Client connector '{name}' is not a registered Weaviate client connector. Available connectors: {available}")]
    InvalidClientConnector {
        /// The rejected connector name
        name: String,
        /// Comma separated list of registered connectors
        available: String,
    },

    /// Configuration-related error (loading, deserialization, container wiring)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failure reported by a client connector
    #[error("Connector error: {message}")]
    Connector {
        /// Description of the connector failure
        message: String,
    },
}

// Validation error creation methods
impl Error {
    /// Create a missing required configuration error
    pub fn missing<F: Into<String>, C: Into<String>>(field: F, context: C) -> Self {
        Self::MissingRequiredConfig {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create an invalid connection method error
    pub fn invalid_connection_method<S: Into<String>>(method: S, valid: &[&str]) -> Self {
        Self::InvalidConnectionMethod {
            method: method.into(),
            valid: valid.join(", "),
        }
    }

    /// Create an invalid authentication type error
    pub fn invalid_auth_type<S: Into<String>>(auth_type: S, valid: &[&str]) -> Self {
        Self::InvalidAuthType {
            auth_type: auth_type.into(),
            valid: valid.join(", "),
        }
    }

    /// Create an invalid retry configuration error
    pub fn invalid_retry<S: Into<String>>(message: S) -> Self {
        Self::InvalidRetryConfig {
            message: message.into(),
        }
    }

    /// Create a client not found error
    pub fn client_not_found<S: Into<String>>(name: S) -> Self {
        Self::ClientNotFound { name: name.into() }
    }
}

// Configuration and connector error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a connector error
    pub fn connector<S: Into<String>>(message: S) -> Self {
        Self::Connector {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::configuration_with_source(format!("Malformed Weaviate configuration: {source}"), source)
    }
}
