//! Configuration Tests
//!
//! Environment variables are set per test with `temp_env`, which also
//! serializes access to the process environment.

use crate::config::{AppConfig, LogFormat, COMPACT_JSON_VAR, LOG_FORMAT_VAR, LOG_VAR};
use crate::error::AppError;

#[test]
fn test_defaults_when_unset() {
    temp_env::with_vars_unset([LOG_VAR, LOG_FORMAT_VAR, COMPACT_JSON_VAR], || {
        let config = AppConfig::from_env().expect("defaults load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "warn");
    });
}

#[test]
fn test_values_from_env() {
    temp_env::with_vars(
        [
            (LOG_VAR, Some("promptsmith=debug")),
            (LOG_FORMAT_VAR, Some("json")),
            (COMPACT_JSON_VAR, Some("true")),
        ],
        || {
            let config = AppConfig::from_env().expect("config loads");
            assert_eq!(config.log_filter, "promptsmith=debug");
            assert_eq!(config.log_format, LogFormat::Json);
            assert!(config.compact_json);
        },
    );
}

#[test]
fn test_blank_log_filter_uses_default() {
    temp_env::with_var(LOG_VAR, Some("  "), || {
        let config = AppConfig::from_env().expect("config loads");
        assert_eq!(config.log_filter, "warn");
    });
}

#[test]
fn test_invalid_log_format() {
    temp_env::with_var(LOG_FORMAT_VAR, Some("xml"), || {
        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(LOG_FORMAT_VAR));
    });
}

#[test]
fn test_invalid_compact_flag() {
    temp_env::with_var(COMPACT_JSON_VAR, Some("sometimes"), || {
        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    });
}
