/// Error type tests
use app_common::error::*;
use std::path::PathBuf;

#[test]
fn test_config_error_not_found() {
    let error = ConfigError::NotFound(PathBuf::from("/nonexistent/config.toml"));
    assert!(format!("{error}").contains("not found"));
}

#[test]
fn test_config_error_invalid_log_level() {
    let error = ConfigError::InvalidLogLevel {
        level: "loud".to_string(),
        valid_levels: vec!["debug".to_string(), "info".to_string()],
    };
    let error_msg = format!("{error}");
    assert!(error_msg.contains("loud"));
    assert!(error_msg.contains("debug, info"));
}

#[test]
fn test_logger_not_initialized_message() {
    let error: Error = LoggerError::NotInitialized.into();
    assert_eq!(
        format!("{error}"),
        "Logger error: logger not initialized: call init_logger() first"
    );
}

#[test]
fn test_config_error_macro() {
    let error = app_common::config_error!(InvalidValue {
        field: "logger.level".to_string(),
        value: String::new(),
        reason: "Log level cannot be empty".to_string(),
    });
    assert!(matches!(error, Error::Config(ConfigError::InvalidValue { .. })));
    assert!(format!("{error}").contains("logger.level"));
}
