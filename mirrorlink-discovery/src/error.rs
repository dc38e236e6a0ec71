//! Error types for the discovery system.

use std::fmt;

/// Error type for discovery operations.
///
/// Every variant means "no handle"; the variant only records why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Network-related errors (socket creation, no HTTP response, etc.)
    NetworkError(String),
    /// The description fetch answered with a status other than 200
    HttpStatus(u16),
    /// Parsing errors (XML, SSDP response, etc.)
    ParseError(String),
    /// The description document has no `device` element
    MissingDevice,
    /// The device is not a MirrorLink server; holds the advertised type
    DeviceTypeMismatch(String),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DiscoveryError::HttpStatus(status) => write!(f, "Description fetch failed: HTTP {}", status),
            DiscoveryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DiscoveryError::MissingDevice => write!(f, "Description has no device element"),
            DiscoveryError::DeviceTypeMismatch(found) => {
                write!(f, "Not a MirrorLink server device: '{}'", found)
            }
        }
    }
}

impl std::error::Error for DiscoveryError {}

/// Convenience Result type alias for discovery operations.
///
/// Equivalent to `std::result::Result<T, DiscoveryError>`.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
