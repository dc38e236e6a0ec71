//! HTTP transport abstraction
//!
//! Everything above this module talks to the network through [`HttpTransport`].
//! A non-success status is still a response; only the absence of a response
//! is reported as an error.

use std::fmt;
use std::time::Duration;

use crate::config::TransportConfig;
use crate::error::SoapError;

/// HTTP methods used by the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outgoing request: method, path, extra headers and an optional body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a request without headers or body
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value, ignoring ASCII case of the name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A received response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Blocking HTTP transport used for description fetches and action calls
pub trait HttpTransport: Send + Sync {
    /// Send `request` to `host:port`
    ///
    /// Returns `Err(SoapError::Network)` only when no response was received.
    /// Any status code the peer answers with is returned as an `HttpResponse`.
    fn send(&self, host: &str, port: u16, request: &HttpRequest) -> Result<HttpResponse, SoapError>;
}

/// Build the absolute URL for a request path
///
/// Paths that are already absolute URLs are used unchanged; relative paths are
/// resolved against `http://host:port/`.
pub fn request_url(host: &str, port: u16, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("http://{}:{}{}", host, port, path)
    } else {
        format!("http://{}:{}/{}", host, port, path)
    }
}

/// [`HttpTransport`] backed by a `ureq` agent
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(config.connect_timeout)
                .timeout_read(config.read_timeout)
                .timeout_write(config.write_timeout)
                .build(),
        }
    }

    /// Transport with a single overall timeout for connect, read and write
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(&TransportConfig::default().with_timeout(timeout))
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, host: &str, port: u16, request: &HttpRequest) -> Result<HttpResponse, SoapError> {
        let url = request_url(host, port, &request.path);

        let mut call = self.agent.request(request.method.as_str(), &url);
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        let result = match &request.body {
            Some(body) => call.send_string(body),
            None => call.call(),
        };

        // ureq reports 4xx/5xx as errors; those still carry a response
        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(e) => return Err(SoapError::Network(e.to_string())),
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| SoapError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use recording::{RecordedRequest, RecordingTransport};

#[cfg(any(test, feature = "test-support"))]
mod recording {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{HttpRequest, HttpResponse, HttpTransport};
    use crate::error::SoapError;

    /// A request captured by [`RecordingTransport`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub host: String,
        pub port: u16,
        pub request: HttpRequest,
    }

    /// In-memory transport that records requests and replays queued outcomes
    #[derive(Debug, Default)]
    pub struct RecordingTransport {
        outcomes: Mutex<VecDeque<Result<HttpResponse, SoapError>>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl RecordingTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response with the given status and body
        pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
            self.push(Ok(HttpResponse::new(status, body)))
        }

        /// Queue a transport failure (no response)
        pub fn fail(&self, message: impl Into<String>) -> &Self {
            self.push(Err(SoapError::Network(message.into())))
        }

        fn push(&self, outcome: Result<HttpResponse, SoapError>) -> &Self {
            self.outcomes
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push_back(outcome);
            self
        }

        /// All requests sent so far, in order
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .len()
        }
    }

    impl HttpTransport for RecordingTransport {
        fn send(&self, host: &str, port: u16, request: &HttpRequest) -> Result<HttpResponse, SoapError> {
            self.requests
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(RecordedRequest {
                    host: host.to_string(),
                    port,
                    request: request.clone(),
                });

            self.outcomes
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .pop_front()
                .unwrap_or_else(|| Err(SoapError::Network("no response queued".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_relative_paths() {
        assert_eq!(request_url("10.0.0.5", 7070, "/desc.xml"), "http://10.0.0.5:7070/desc.xml");
        assert_eq!(request_url("10.0.0.5", 7070, "ctrl/app"), "http://10.0.0.5:7070/ctrl/app");
    }

    #[test]
    fn test_request_url_absolute_path_is_kept() {
        assert_eq!(
            request_url("10.0.0.5", 7070, "http://10.0.0.9:8080/ctrl/app"),
            "http://10.0.0.9:8080/ctrl/app"
        );
    }

    #[test]
    fn test_request_builder_and_header_lookup() {
        let request = HttpRequest::new(HttpMethod::Post, "/ctrl")
            .header("SOAPACTION", "\"urn:x#y\"")
            .body("<x/>");

        assert_eq!(request.header_value("soapaction"), Some("\"urn:x#y\""));
        assert_eq!(request.header_value("CONTENT-TYPE"), None);
        assert_eq!(request.body.as_deref(), Some("<x/>"));
        assert_eq!(request.method.to_string(), "POST");
    }

    #[test]
    fn test_recording_transport_replays_in_order() {
        let transport = RecordingTransport::new();
        transport.respond(200, "first").fail("down");

        let request = HttpRequest::new(HttpMethod::Get, "/a");
        let first = transport.send("h", 1, &request).unwrap();
        assert_eq!(first, HttpResponse::new(200, "first"));
        assert!(matches!(transport.send("h", 1, &request), Err(SoapError::Network(_))));
        // Nothing left queued
        assert!(matches!(transport.send("h", 1, &request), Err(SoapError::Network(_))));
        assert_eq!(transport.request_count(), 3);
    }
}
