//! Logging setup for applications embedding the SDK
//!
//! The library crates only emit `tracing` events. Installing a subscriber is
//! left to the application, and this module offers the usual choices.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No output; for hosts with their own UI on the terminal
    Silent,
    /// Compact stderr output for development
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `MIRRORLINK_LOG_LEVEL`: filter directive (e.g. `debug`, `mirrorlink_api=trace`)
/// - `RUST_LOG`: used when `MIRRORLINK_LOG_LEVEL` is not set
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact())
                .with(create_env_filter("info"));

            subscriber.try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true))
                .with(create_env_filter("debug"));

            subscriber.try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from the `MIRRORLINK_LOG_MODE` environment variable
///
/// - "development" -> LoggingMode::Development
/// - "debug" -> LoggingMode::Debug
/// - anything else -> LoggingMode::Silent
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(mode_from_value(std::env::var("MIRRORLINK_LOG_MODE").ok().as_deref()))
}

fn mode_from_value(value: Option<&str>) -> LoggingMode {
    match value.map(str::trim) {
        Some(mode) if mode.eq_ignore_ascii_case("development") => LoggingMode::Development,
        Some(mode) if mode.eq_ignore_ascii_case("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

/// Filter from `MIRRORLINK_LOG_LEVEL`, then `RUST_LOG`, then `default_level`
fn create_env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("MIRRORLINK_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
