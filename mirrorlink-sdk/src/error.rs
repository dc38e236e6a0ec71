use thiserror::Error;

use crate::logging::LoggingError;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    ApiError(#[from] mirrorlink_api::ApiError),

    #[error("Discovery error: {0}")]
    DiscoveryError(#[from] mirrorlink_discovery::DiscoveryError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}
