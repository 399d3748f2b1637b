//! Client service factory tests

use std::sync::Arc;

use serde_json::json;
use wcb_application::use_cases::ClientFactory;
use wcb_domain::error::Error;
use wcb_domain::WeaviateConfig;
use wcb_infrastructure::di::ClientServiceFactory;
use wcb_providers::StandardConnector;

fn services(weaviate: serde_json::Value) -> ClientServiceFactory {
    let config = Arc::new(WeaviateConfig::from_value(weaviate).unwrap());
    ClientServiceFactory::new(ClientFactory::new(config, Arc::new(StandardConnector::new())))
}

#[test]
fn test_can_create_with_registry() {
    let services = services(json!({
        "clients": {
            "rag": {},
            "analytics": { "connection_method": "custom", "connection": { "host": "a.internal" } }
        }
    }));

    assert!(services.can_create("weaviate.client.rag"));
    assert!(services.can_create("weaviate.client.analytics"));
    assert!(!services.can_create("weaviate.client.missing"));
    assert!(!services.can_create("weaviate.client.default"));
    assert!(!services.can_create("WeaviateClient"));
    assert!(!services.can_create("other.client.rag"));
    assert!(!services.can_create("weaviate.client."));
    assert_eq!(services.configured_clients(), ["analytics", "rag"]);
}

#[test]
fn test_can_create_legacy_default() {
    let services = services(json!({ "connection": { "host": "localhost" } }));

    assert!(services.can_create("weaviate.client.default"));
    assert!(services.can_create("weaviate.client"));
    assert!(services.can_create("WeaviateClient"));
    assert!(!services.can_create("weaviate.client.rag"));
    assert_eq!(services.configured_clients(), ["default"]);
}

#[test]
fn test_clients_are_cached_per_name() {
    let services = services(json!({ "connection": { "host": "localhost", "port": 8081 } }));

    let first = services.create("weaviate.client.default").unwrap();
    let by_alias = services.create("WeaviateClient").unwrap();
    let by_short_alias = services.create("weaviate.client").unwrap();

    assert!(Arc::ptr_eq(&first, &by_alias));
    assert!(Arc::ptr_eq(&first, &by_short_alias));
    assert_eq!(first.base_url, "http://localhost:8081");
}

#[test]
fn test_distinct_clients_are_distinct_instances() {
    let services = services(json!({
        "clients": {
            "a": { "connection": { "port": 9001 } },
            "b": { "connection": { "port": 9002 } }
        }
    }));

    let a = services.client("a").unwrap();
    let b = services.client("b").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(a.base_url, "http://localhost:9001");
    assert_eq!(b.base_url, "http://localhost:9002");
}

#[test]
fn test_create_rejects_foreign_services() {
    let services = services(json!({}));
    assert!(matches!(
        services.create("weaviate.auth_factory"),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_create_unknown_client() {
    let services = services(json!({ "clients": {} }));
    assert!(matches!(
        services.create("weaviate.client.rag"),
        Err(Error::ClientNotFound { name }) if name == "rag"
    ));
}
