//! Runtime configuration, read from environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;

use crate::error::AppError;

pub const LOG_VAR: &str = "PROMPTSMITH_LOG";
pub const LOG_FORMAT_VAR: &str = "PROMPTSMITH_LOG_FORMAT";
pub const COMPACT_JSON_VAR: &str = "PROMPTSMITH_COMPACT_JSON";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Layout of log lines written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{LOG_FORMAT_VAR} must be 'pretty' or 'json', got '{other}'"
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `info` or `promptsmith=debug`
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Print results as single-line JSON instead of pretty-printed
    pub compact_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
            compact_json: false,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any), then read the environment.
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from environment variables.
    ///
    /// Optional:
    /// - `PROMPTSMITH_LOG`: log filter directive (default `warn`)
    /// - `PROMPTSMITH_LOG_FORMAT`: `pretty` (default) or `json`
    /// - `PROMPTSMITH_COMPACT_JSON`: `true`/`1` for single-line output
    pub fn from_env() -> Result<Self, AppError> {
        let log_filter = env::var(LOG_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match env::var(LOG_FORMAT_VAR) {
            Ok(value) => LogFormat::parse(&value)?,
            Err(_) => LogFormat::default(),
        };

        let compact_json = match env::var(COMPACT_JSON_VAR) {
            Ok(value) => parse_bool(COMPACT_JSON_VAR, &value)?,
            Err(_) => false,
        };

        Ok(Self {
            log_filter,
            log_format,
            compact_json,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::Config(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
