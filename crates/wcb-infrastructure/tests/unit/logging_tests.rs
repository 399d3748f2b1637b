//! Logging Tests

use tracing::Level;
use wcb_domain::error::Error;
use wcb_infrastructure::constants::DEFAULT_LOG_LEVEL;
use wcb_infrastructure::logging::{LoggingConfig, parse_log_level};

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    match parse_log_level("verbose") {
        Err(Error::Configuration { message, source }) => {
            assert!(message.contains("verbose"));
            assert!(source.is_none());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
}
