//! dill Catalog - IoC Container Configuration
//!
//! ## Usage
//!
//! ```rust,ignore
//! let catalog = build_catalog(config, None)?;
//! let clients: Arc<ClientServiceFactory> = catalog.get_one()?;
//! let rag = clients.create("weaviate.client.rag")?;
//! ```

use std::sync::Arc;

use dill::{Catalog, CatalogBuilder};
use tracing::info;
use wcb_application::use_cases::{AuthFactory, ClientFactory, ConnectionFactory};
use wcb_domain::error::{Error, Result};
use wcb_domain::ports::providers::ClientConnector;
use wcb_providers::StandardConnector;

use super::client_service::ClientServiceFactory;
use crate::config::AppConfig;

/// Build the dill Catalog with the Weaviate services
///
/// `connector` becomes the default connector for clients that do not name
/// one; the `standard` connector is used when `None`.
///
/// # Type Bindings
///
/// | Type | Shares |
/// |------|--------|
/// | `AppConfig` | loaded configuration |
/// | `ConnectionFactory` | `weaviate` block |
/// | `AuthFactory` | `weaviate` block |
/// | `ClientFactory` | `weaviate` block, default connector |
/// | `ClientServiceFactory` | `ClientFactory`, client cache |
pub fn build_catalog(
    config: AppConfig,
    connector: Option<Arc<dyn ClientConnector>>,
) -> Result<Catalog> {
    let connector: Arc<dyn ClientConnector> =
        connector.unwrap_or_else(|| Arc::new(StandardConnector::new()));
    info!(connector = connector.name(), "Building dill Catalog");

    let weaviate = Arc::new(config.weaviate.clone());
    let client_factory = ClientFactory::new(Arc::clone(&weaviate), connector);

    let catalog = CatalogBuilder::new()
        .add_value(config)
        .add_value(ConnectionFactory::new(Arc::clone(&weaviate)))
        .add_value(AuthFactory::new(weaviate))
        .add_value(client_factory.clone())
        .add_value(ClientServiceFactory::new(client_factory))
        .build();

    catalog
        .get_one::<ClientServiceFactory>()
        .map_err(|e| Error::configuration(format!("Client service factory: {e}")))?;

    info!("Built dill Catalog");
    Ok(catalog)
}
