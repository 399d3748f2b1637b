//! Domain constants
//!
//! Defaults and closed value sets shared by the settings value objects.

// ============================================================================
// CONNECTION CONSTANTS
// ============================================================================

/// Default Weaviate HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Host used by local connections when none is configured
pub const DEFAULT_LOCAL_HOST: &str = "localhost";

/// Host names classified as loopback
pub const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

/// IPv6 loopback literal
pub const IPV6_LOOPBACK: &str = "::1";

/// Port implied by `http`
pub const HTTP_DEFAULT_PORT: u16 = 80;

/// Port implied by `https`
pub const HTTPS_DEFAULT_PORT: u16 = 443;

// ============================================================================
// CONNECTION METHOD CONSTANTS
// ============================================================================

/// Local connection method name
pub const CONNECTION_METHOD_LOCAL: &str = "local";

/// Cloud connection method name
pub const CONNECTION_METHOD_CLOUD: &str = "cloud";

/// Custom connection method name
pub const CONNECTION_METHOD_CUSTOM: &str = "custom";

/// All valid connection methods
pub const CONNECTION_METHODS: [&str; 3] = [
    CONNECTION_METHOD_LOCAL,
    CONNECTION_METHOD_CLOUD,
    CONNECTION_METHOD_CUSTOM,
];

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// API key authentication type
pub const AUTH_TYPE_API_KEY: &str = "api_key";

/// Bearer token authentication type
pub const AUTH_TYPE_BEARER_TOKEN: &str = "bearer_token";

/// OIDC authentication type
pub const AUTH_TYPE_OIDC: &str = "oidc";

/// All authentication types accepted in configuration
pub const AUTH_TYPES: [&str; 3] = [AUTH_TYPE_API_KEY, AUTH_TYPE_BEARER_TOKEN, AUTH_TYPE_OIDC];

/// Authentication types a client can currently be constructed with
pub const SUPPORTED_CLIENT_AUTH_TYPES: [&str; 2] = [AUTH_TYPE_API_KEY, AUTH_TYPE_BEARER_TOKEN];

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Bearer token prefix
pub const BEARER_PREFIX: &str = "Bearer ";

// ============================================================================
// RETRY CONSTANTS
// ============================================================================

/// Default maximum number of retries
pub const DEFAULT_MAX_RETRIES: u8 = 4;

/// Upper bound for the maximum number of retries
pub const MAX_RETRIES_LIMIT: i64 = 10;

// ============================================================================
// CLIENT REGISTRY CONSTANTS
// ============================================================================

/// Name of the implicit client in single-client configurations
pub const DEFAULT_CLIENT_NAME: &str = "default";
