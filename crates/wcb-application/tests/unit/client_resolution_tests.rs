//! Named-client resolution and fallback chain tests

use std::sync::Arc;

use serde_json::json;
use wcb_application::use_cases::{
    AuthFactory, ConnectionFactory, configured_client_names, has_client, resolve_client_config,
    resolve_client_settings,
};
use wcb_domain::error::Error;
use wcb_domain::{AuthType, ConnectionMethod, WeaviateConfig};

fn config(value: serde_json::Value) -> WeaviateConfig {
    WeaviateConfig::from_value(value).unwrap()
}

fn registry_config() -> WeaviateConfig {
    config(json!({
        "connection_method": "custom",
        "connection": { "host": "global.example.com", "port": 9999 },
        "auth": { "type": "api_key", "api_key": "global-key" },
        "clients": {
            "rag": {
                "connection_method": "local",
                "connection": { "host": "localhost", "port": 8081 }
            },
            "analytics": {
                "connection_method": "custom",
                "connection": { "host": "analytics.internal" },
                "auth": { "type": "bearer_token", "bearer_token": "client-token" }
            }
        }
    }))
}

// ============================================================================
// Client configuration lookup
// ============================================================================

#[test]
fn test_registry_entry_used_verbatim() {
    let config = registry_config();
    let raw = resolve_client_config(&config, "rag").unwrap();

    assert_eq!(raw.connection_method.as_deref(), Some("local"));
    assert!(raw.auth.is_none(), "top-level auth must not be merged in");

    let settings = resolve_client_settings(&config, "rag").unwrap();
    assert_eq!(settings.connection_method(), ConnectionMethod::Local);
    assert_eq!(settings.connection().port(), 8081);
    assert!(settings.auth().is_none());
}

#[test]
fn test_default_without_registry_is_top_level_block() {
    let config = config(json!({
        "connection_method": "custom",
        "connection": { "host": "db.example.com", "port": 9200 }
    }));

    let settings = resolve_client_settings(&config, "default").unwrap();
    assert_eq!(settings.connection_method(), ConnectionMethod::Custom);
    assert_eq!(settings.connection().host(), Some("db.example.com"));
    assert!(has_client(&config, "default"));
}

#[test]
fn test_unregistered_name_fails() {
    let config = registry_config();
    assert!(matches!(
        resolve_client_config(&config, "missing"),
        Err(Error::ClientNotFound { name }) if name == "missing"
    ));
}

#[test]
fn test_default_with_registry_requires_entry() {
    let config = registry_config();
    assert!(!has_client(&config, "default"));
    assert!(matches!(
        resolve_client_settings(&config, "default"),
        Err(Error::ClientNotFound { .. })
    ));
}

#[test]
fn test_named_client_without_registry_fails() {
    let config = config(json!({ "connection_method": "local" }));
    assert!(matches!(
        resolve_client_config(&config, "rag"),
        Err(Error::ClientNotFound { .. })
    ));
}

#[test]
fn test_configured_client_names() {
    assert_eq!(configured_client_names(&registry_config()), ["analytics", "rag"]);
    assert_eq!(configured_client_names(&config(json!({}))), ["default"]);
    assert!(configured_client_names(&config(json!({ "clients": {} }))).is_empty());
}

#[test]
fn test_invalid_entry_surfaces_validation_error() {
    let config = config(json!({
        "clients": { "broken": { "connection_method": "cloud" } }
    }));
    assert!(matches!(
        resolve_client_settings(&config, "broken"),
        Err(Error::MissingRequiredConfig { field, .. }) if field == "cluster_url"
    ));
}

// ============================================================================
// Auth fallback
// ============================================================================

#[test]
fn test_auth_falls_back_to_global() {
    let factory = AuthFactory::new(Arc::new(registry_config()));
    let auth = factory.resolve("rag").unwrap();
    assert_eq!(auth.auth_type(), AuthType::ApiKey);
    assert_eq!(auth.api_key(), Some("global-key"));
}

#[test]
fn test_client_auth_overrides_global() {
    let factory = AuthFactory::new(Arc::new(registry_config()));
    let auth = factory.resolve("analytics").unwrap();
    assert_eq!(auth.auth_type(), AuthType::BearerToken);
    assert_eq!(auth.bearer_token(), Some("client-token"));
    assert_eq!(auth.api_key(), None);
}

#[test]
fn test_missing_auth_strict_and_optional() {
    let factory = AuthFactory::new(Arc::new(config(json!({
        "clients": { "rag": {} }
    }))));

    match factory.resolve("rag") {
        Err(Error::MissingRequiredConfig { field, context }) => {
            assert_eq!(field, "auth");
            assert_eq!(context, "client 'rag' or global Weaviate configuration");
        }
        other => panic!("expected MissingRequiredConfig, got {other:?}"),
    }
    assert!(factory.resolve_optional("rag").unwrap().is_none());
}

#[test]
fn test_invalid_fallback_auth_is_rejected() {
    let factory = AuthFactory::new(Arc::new(config(json!({
        "auth": { "type": "api_key", "api_key": " " },
        "clients": { "rag": {} }
    }))));
    assert!(matches!(
        factory.resolve_optional("rag"),
        Err(Error::MissingRequiredConfig { field, .. }) if field == "api_key"
    ));
}

// ============================================================================
// Connection fallback
// ============================================================================

#[test]
fn test_connection_fallback_chain() {
    let factory = ConnectionFactory::new(Arc::new(registry_config()));

    let own = factory.resolve("rag").unwrap();
    assert_eq!(own.port(), 8081);

    let config = config(json!({
        "connection": { "host": "global.example.com", "port": 9999 },
        "clients": { "bare": {} }
    }));
    let global = ConnectionFactory::new(Arc::new(config)).resolve("bare").unwrap();
    assert_eq!(global.host(), Some("global.example.com"));
    assert_eq!(global.port(), 9999);

    let empty = ConnectionFactory::new(Arc::new(WeaviateConfig::default()))
        .resolve("default")
        .unwrap();
    assert_eq!(empty.host(), None);
    assert_eq!(empty.port(), 8080);
    assert_eq!(empty.timeout_secs(), 30);
}
