//! Main application configuration

use serde::{Deserialize, Serialize};
use wcb_domain::value_objects::WeaviateConfig;

use super::logging::LoggingConfig;

/// Main application configuration
///
/// ```toml
/// [weaviate]
/// connection_method = "custom"
///
/// [weaviate.connection]
/// host = "weaviate.internal"
/// port = 9200
///
/// [weaviate.clients.rag]
/// connection_method = "local"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weaviate client configuration block
    #[serde(default)]
    pub weaviate: WeaviateConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
