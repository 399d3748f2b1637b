//! Configuration Loader Tests

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use wcb_domain::error::Error;
use wcb_domain::{ClientConfig, ClientLayout};
use wcb_infrastructure::config::{ConfigBuilder, ConfigLoader, LoggingConfig};
use wcb_infrastructure::constants::DEFAULT_LOG_LEVEL;

/// Loader that ignores the process environment
fn loader(path: &Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix("WCB_LOADER_TEST_UNSET")
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("wcb.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = loader(&temp_dir.path().join("absent.toml")).load().unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.weaviate.has_registry());
    assert!(config.weaviate.global.connection.is_none());
}

#[test]
fn test_legacy_block_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[weaviate]
connection_method = "custom"
max_retries = 2

[weaviate.connection]
host = "weaviate.internal"
port = 9200

[weaviate.auth]
type = "api_key"
api_key = "secret"

[logging]
level = "debug"
"#,
    );

    let config = loader(&path).load().unwrap();
    assert_eq!(config.logging.level, "debug");

    let ClientLayout::Legacy(client) = config.weaviate.layout() else {
        panic!("expected legacy layout");
    };
    assert_eq!(client.connection_method.as_deref(), Some("custom"));
    assert_eq!(client.max_retries, Some(2));
    let connection = client.connection.as_ref().unwrap();
    assert_eq!(connection.host.as_deref(), Some("weaviate.internal"));
    assert_eq!(connection.port, Some(9200));
    assert_eq!(
        client.auth.as_ref().unwrap().api_key.as_deref(),
        Some("secret")
    );
}

#[test]
fn test_client_registry_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[weaviate.auth]
api_key = "global"

[weaviate.clients.rag]
connection_method = "local"

[weaviate.clients.cloud]
connection_method = "cloud"
connection = { cluster_url = "my-cluster.weaviate.network", secure = true }
auth = { type = "bearer_token", bearer_token = "tok" }
"#,
    );

    let config = loader(&path).load().unwrap();
    let ClientLayout::Registry(clients) = config.weaviate.layout() else {
        panic!("expected registry layout");
    };
    assert_eq!(clients.keys().collect::<Vec<_>>(), ["cloud", "rag"]);
    assert!(clients["rag"].auth.is_none());
    assert!(config.weaviate.global.auth.is_some());
}

#[test]
fn test_invalid_client_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[weaviate.clients.broken]
connection_method = "cloud"
auth = { api_key = "k" }
"#,
    );

    match loader(&path).load() {
        Err(Error::MissingRequiredConfig { field, context }) => {
            assert_eq!(field, "cluster_url");
            assert_eq!(context, "cloud connection");
        }
        other => panic!("Expected MissingRequiredConfig, got {other:?}"),
    }
}

#[test]
fn test_invalid_port_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[weaviate.connection]\nport = 70000\n");

    assert!(matches!(
        loader(&path).load(),
        Err(Error::InvalidPort { port: 70000 })
    ));
}

#[test]
fn test_invalid_log_level_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[logging]\nlevel = \"loud\"\n");

    assert!(matches!(
        loader(&path).load(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_unknown_client_connector_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[weaviate]\nclient_connector = \"grpc-sdk\"\n");

    assert!(matches!(
        loader(&path).load(),
        Err(Error::InvalidClientConnector { name, .. }) if name == "grpc-sdk"
    ));
}

#[test]
fn test_malformed_value_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[weaviate.connection]\nport = \"eighty\"\n");

    assert!(matches!(
        loader(&path).load(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
#[allow(unsafe_code)]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        "[weaviate.connection]\nhost = \"from-file\"\nport = 9000\n",
    );

    // Prefix unique to this test
    // SAFETY: no other test reads or writes these variables
    unsafe {
        std::env::set_var("WCB_ENV_OVERRIDE_TEST__WEAVIATE__CONNECTION__HOST", "from-env");
    }

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("WCB_ENV_OVERRIDE_TEST")
        .load()
        .unwrap();

    let connection = config.weaviate.global.connection.unwrap();
    assert_eq!(connection.host.as_deref(), Some("from-env"));
    assert_eq!(connection.port, Some(9000));
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let rag = ClientConfig::from_value(json!({
        "connection_method": "custom",
        "connection": { "host": "rag.internal", "port": 9100, "timeout": 10 },
        "additional_headers": { "X-Team": "search" }
    }))
    .unwrap();
    let original = ConfigBuilder::new()
        .with_client("rag", rag)
        .with_logging(LoggingConfig {
            level: "warn".to_string(),
            json_format: true,
        })
        .build();

    let loader = loader(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.logging, original.logging);
    assert_eq!(loaded.weaviate, original.weaviate);
}
