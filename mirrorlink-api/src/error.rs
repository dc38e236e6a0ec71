use mirrorlink_discovery::ServiceType;
use thiserror::Error;

/// Outcome of a failed action invocation
///
/// Each variant keeps apart a case that the legacy numeric result code
/// collapses; [`ApiError::result_code`] recovers that code when needed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No server handle; nothing was sent
    #[error("Not connected to a MirrorLink server")]
    NotConnected,

    /// The transport produced no response
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The server answered with a status other than 200
    #[error("Action failed with HTTP status {0}")]
    HttpStatus(u16),

    /// Status 200, but the action's response handler rejected the body
    #[error("Response to {0} rejected")]
    Rejected(String),

    /// The server does not advertise a control URL for the service; nothing was sent
    #[error("No control URL advertised for {}", .0.name())]
    MissingControlUrl(ServiceType),
}

impl ApiError {
    /// Legacy numeric code: the raw HTTP status for `HttpStatus`, 0 otherwise
    pub fn result_code(&self) -> u16 {
        match self {
            ApiError::HttpStatus(status) => *status,
            _ => 0,
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Legacy numeric code for an invocation result: 200 on success
pub fn result_code(result: &Result<()>) -> u16 {
    match result {
        Ok(()) => 200,
        Err(error) => error.result_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_codes() {
        assert_eq!(result_code(&Ok(())), 200);
        assert_eq!(result_code(&Err(ApiError::NotConnected)), 0);
        assert_eq!(result_code(&Err(ApiError::NetworkError("timeout".to_string()))), 0);
        assert_eq!(result_code(&Err(ApiError::Rejected("LaunchApplication".to_string()))), 0);
        assert_eq!(result_code(&Err(ApiError::MissingControlUrl(ServiceType::Notification))), 0);
        assert_eq!(result_code(&Err(ApiError::HttpStatus(404))), 404);
    }

    #[test]
    fn test_error_display() {
        let network_err = ApiError::NetworkError("connection failed".to_string());
        assert_eq!(format!("{}", network_err), "Network error: connection failed");

        let status_err = ApiError::HttpStatus(500);
        assert_eq!(format!("{}", status_err), "Action failed with HTTP status 500");

        let missing = ApiError::MissingControlUrl(ServiceType::ClientProfile);
        assert_eq!(format!("{}", missing), "No control URL advertised for TmClientProfile");
    }
}
