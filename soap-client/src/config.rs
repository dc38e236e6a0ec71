//! Transport configuration
//!
//! The protocol layer has no timeout or cancellation of its own, so every
//! bound on request duration is configured here and applied by the transport.

use std::time::Duration;

/// Timeouts applied to every HTTP exchange made by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// Maximum time to establish the TCP connection
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Maximum time to wait while reading the response
    /// Default: 10 seconds
    pub read_timeout: Duration,

    /// Maximum time to wait while writing the request
    /// Default: 10 seconds
    pub write_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    /// Create a new TransportConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the write timeout
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Apply the same timeout to connect, read and write
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_connect_timeout(timeout)
            .with_read_timeout(timeout)
            .with_write_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let config = TransportConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.read_timeout, Duration::from_secs(10));
        assert_eq!(config.write_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_overrides() {
        let config = TransportConfig::new()
            .with_timeout(Duration::from_secs(2))
            .with_read_timeout(Duration::from_secs(30));

        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
        assert_eq!(config.write_timeout, Duration::from_secs(2));
    }
}
