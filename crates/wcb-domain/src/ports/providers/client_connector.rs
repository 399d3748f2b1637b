//! Client connector port
//!
//! The seam between configuration resolution and the client library. One
//! method per construction strategy, each receiving a fully resolved
//! request. Implementations are registered in the connector registry or
//! handed to the container when it is built.

use crate::error::Result;
use crate::value_objects::{CloudConnection, CustomConnection, LocalConnection, WeaviateClient};

/// Builds Weaviate clients from resolved connection requests
///
/// # Example
///
/// ```ignore
/// struct MyConnector;
///
/// impl ClientConnector for MyConnector {
///     fn name(&self) -> &str { "mine" }
///     fn connect_local(&self, request: LocalConnection) -> Result<WeaviateClient> { .. }
///     fn connect_cloud(&self, request: CloudConnection) -> Result<WeaviateClient> { .. }
///     fn connect_custom(&self, request: CustomConnection) -> Result<WeaviateClient> { .. }
/// }
/// ```
pub trait ClientConnector: Send + Sync {
    /// Connector name used for diagnostics and registry lookup
    fn name(&self) -> &str;

    /// Connect to a local instance
    fn connect_local(&self, request: LocalConnection) -> Result<WeaviateClient>;

    /// Connect to a hosted cluster
    fn connect_cloud(&self, request: CloudConnection) -> Result<WeaviateClient>;

    /// Connect to an arbitrary host
    fn connect_custom(&self, request: CustomConnection) -> Result<WeaviateClient>;
}
