//! Configuration loader
//!
//! Loads configuration from default values, a TOML file and environment
//! variables, then validates it eagerly.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::debug;
use wcb_application::ports::registry::resolve_client_connector;
use wcb_application::use_cases::{configured_client_names, resolve_client_settings};
use wcb_domain::error::Result;
use wcb_domain::value_objects::{ClientConfig, WeaviateConfig};

use crate::config::{AppConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `WCB__WEAVIATE__CONNECTION__HOST`)
    ///
    /// The log level and every configured client are validated before the
    /// configuration is returned.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            let exists = config_path.exists();
            if exists {
                figment = figment.merge(Toml::file(config_path));
            }
            log_config_loaded(config_path, exists);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (e.g., WCB__WEAVIATE__CONNECTION__PORT)
        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Fails on the first invalid section.
fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_weaviate_config(&config.weaviate)
}

/// Build every configured client's settings and check its connector name
fn validate_weaviate_config(config: &WeaviateConfig) -> Result<()> {
    for name in configured_client_names(config) {
        let settings = resolve_client_settings(config, &name)?;
        if let Some(connector) = settings.client_connector() {
            resolve_client_connector(connector)?;
        }
        debug!(client = %name, method = %settings.connection_method(), "Validated client configuration");
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole `weaviate` block
    #[must_use]
    pub fn with_weaviate(mut self, weaviate: WeaviateConfig) -> Self {
        self.config.weaviate = weaviate;
        self
    }

    /// Set the top-level (legacy default) client configuration
    #[must_use]
    pub fn with_default_client(mut self, client: ClientConfig) -> Self {
        self.config.weaviate.global = client;
        self
    }

    /// Add a named client to the registry
    #[must_use]
    pub fn with_client<S: Into<String>>(mut self, name: S, client: ClientConfig) -> Self {
        self.config
            .weaviate
            .clients
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), client);
        self
    }

    /// Set logging configuration
    #[must_use]
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
