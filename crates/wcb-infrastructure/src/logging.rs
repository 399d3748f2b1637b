//! Structured logging with tracing
//!
//! Installs a `tracing_subscriber` registry with an environment filter and
//! a plain or JSON formatter.

use std::path::Path;

use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wcb_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;

/// Initialize logging with the provided configuration
///
/// `WCB_LOG` overrides the configured level when set. Fails when a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // The layer types differ, hence the separate branches
    let installed = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        Registry::default().with(filter).with(stdout).try_init()
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        Registry::default().with(filter).with(stdout).try_init()
    };
    installed.map_err(|e| Error::configuration(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
