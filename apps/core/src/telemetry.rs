//! Tracing subscriber setup.
//!
//! Logs go to stderr; stdout carries command results only.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::{AppConfig, LogFormat};
use crate::error::AppError;

/// Install the global subscriber described by `config`.
pub fn init(config: &AppConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Config(format!("invalid log filter '{}': {}", config.log_filter, e))
    })?;

    let result = match config.log_format {
        LogFormat::Pretty => {
            let subscriber = Registry::default().with(filter).with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            );
            set_global_default(subscriber)
        }
        LogFormat::Json => {
            let subscriber = Registry::default()
                .with(filter)
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    env!("CARGO_PKG_NAME").to_string(),
                    std::io::stderr,
                ));
            set_global_default(subscriber)
        }
    };

    result.map_err(|e| AppError::Config(format!("tracing already initialised: {e}")))
}
