//! Infrastructure layer constants
//!
//! Domain defaults live in `wcb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wcb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wcb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "WCB";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WCB_LOG";

// ============================================================================
// SERVICE NAME CONSTANTS
// ============================================================================

macro_rules! service_prefix {
    () => {
        "weaviate"
    };
}

/// Prefix of every registered service
pub const SERVICE_PREFIX: &str = service_prefix!();

/// Prefix of named client services (`weaviate.client.{name}`)
pub const CLIENT_SERVICE_PREFIX: &str = concat!(service_prefix!(), ".client.");

/// Alias for the default client service
pub const CLIENT_SERVICE_ALIAS: &str = concat!(service_prefix!(), ".client");

/// Type-name alias for the default client service
pub const CLIENT_TYPE_ALIAS: &str = "WeaviateClient";

/// Connection factory service
pub const CONNECTION_FACTORY_SERVICE: &str = concat!(service_prefix!(), ".connection_factory");

/// Auth factory service
pub const AUTH_FACTORY_SERVICE: &str = concat!(service_prefix!(), ".auth_factory");

/// Client factory service
pub const CLIENT_FACTORY_SERVICE: &str = concat!(service_prefix!(), ".client_factory");
