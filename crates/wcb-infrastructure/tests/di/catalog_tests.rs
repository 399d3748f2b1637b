//! dill Catalog Tests

use std::sync::Arc;

use serde_json::json;
use wcb_application::use_cases::{AuthFactory, ClientFactory, ConnectionFactory};
use wcb_domain::WeaviateConfig;
use wcb_infrastructure::config::{AppConfig, ConfigBuilder};
use wcb_infrastructure::di::{ClientServiceFactory, build_catalog};
use wcb_providers::NullConnector;

fn app_config(weaviate: serde_json::Value) -> AppConfig {
    ConfigBuilder::new()
        .with_weaviate(WeaviateConfig::from_value(weaviate).unwrap())
        .build()
}

#[test]
fn test_catalog_exposes_factories() {
    let config = app_config(json!({
        "auth": { "api_key": "global" },
        "clients": { "rag": {} }
    }));
    let catalog = build_catalog(config.clone(), None).unwrap();

    let stored: Arc<AppConfig> = catalog.get_one().unwrap();
    assert_eq!(*stored, config);

    let connections: Arc<ConnectionFactory> = catalog.get_one().unwrap();
    assert_eq!(connections.resolve("rag").unwrap().port(), 8080);

    let auth: Arc<AuthFactory> = catalog.get_one().unwrap();
    assert_eq!(auth.resolve("rag").unwrap().api_key(), Some("global"));

    let clients: Arc<ClientFactory> = catalog.get_one().unwrap();
    assert_eq!(clients.default_connector_name(), "standard");
}

#[test]
fn test_standard_connector_by_default() {
    let catalog = build_catalog(app_config(json!({})), None).unwrap();
    let services: Arc<ClientServiceFactory> = catalog.get_one().unwrap();

    let client = services.create("weaviate.client.default").unwrap();
    assert_eq!(client.connector, "standard");
    assert_eq!(client.base_url, "http://localhost:8080");
}

#[test]
fn test_supplied_connector_becomes_default() {
    let catalog = build_catalog(
        app_config(json!({ "clients": { "rag": {} } })),
        Some(Arc::new(NullConnector::new())),
    )
    .unwrap();
    let services: Arc<ClientServiceFactory> = catalog.get_one().unwrap();

    let client = services.client("rag").unwrap();
    assert_eq!(client.connector, "null");
    assert!(client.base_url.is_empty());
}

#[test]
fn test_client_connector_key_overrides_supplied_connector() {
    let catalog = build_catalog(
        app_config(json!({ "clients": { "rag": { "client_connector": "standard" } } })),
        Some(Arc::new(NullConnector::new())),
    )
    .unwrap();
    let services: Arc<ClientServiceFactory> = catalog.get_one().unwrap();

    assert_eq!(services.client("rag").unwrap().connector, "standard");
}
