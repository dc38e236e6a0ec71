//! Private SOAP client for UPnP device communication
//!
//! This crate provides a minimal SOAP client for talking to MirrorLink
//! servers: it fetches description documents and posts SOAP action requests
//! to control URLs. The network sits behind the [`HttpTransport`] trait so the
//! protocol logic can run against any blocking HTTP implementation.

mod config;
mod envelope;
mod error;
pub mod transport;

pub use config::TransportConfig;
pub use envelope::{build_envelope, extract_response, service_uri, soap_action, CONTENT_TYPE, SERVICE_URN_PREFIX};
pub use error::SoapError;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, UreqTransport};

use std::fmt;
use std::sync::Arc;

use tracing::debug;

/// A minimal SOAP client for UPnP device communication
#[derive(Clone)]
pub struct SoapClient {
    transport: Arc<dyn HttpTransport>,
}

impl SoapClient {
    /// Create a new SOAP client with default configuration
    pub fn new() -> Self {
        Self::with_config(TransportConfig::default())
    }

    /// Create a SOAP client backed by `ureq` with the given timeouts
    pub fn with_config(config: TransportConfig) -> Self {
        Self {
            transport: Arc::new(UreqTransport::new(&config)),
        }
    }

    /// Create a SOAP client over a custom transport
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a document with a plain GET
    pub fn get(&self, host: &str, port: u16, path: &str) -> Result<HttpResponse, SoapError> {
        let request = HttpRequest::new(HttpMethod::Get, path);
        self.transport.send(host, port, &request)
    }

    /// Send a SOAP request and return the raw response
    ///
    /// The status code is not interpreted here; callers decide what a
    /// non-200 answer means for them.
    pub fn call(
        &self,
        host: &str,
        port: u16,
        control_url: &str,
        service_uri: &str,
        action: &str,
        payload: &str,
    ) -> Result<HttpResponse, SoapError> {
        let body = build_envelope(service_uri, action, payload);

        let request = HttpRequest::new(HttpMethod::Post, control_url)
            .header("CONTENT-TYPE", CONTENT_TYPE)
            .header("SOAPACTION", soap_action(service_uri, action))
            .body(body);

        debug!(host, port, control_url, action, "sending SOAP request");
        self.transport.send(host, port, &request)
    }
}

impl Default for SoapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SoapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoapClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RecordingTransport;

    #[test]
    fn test_soap_client_creation() {
        let _client = SoapClient::new();
        let _default_client = SoapClient::default();
        let _configured = SoapClient::with_config(TransportConfig::new());
    }

    #[test]
    fn test_call_builds_post_with_headers_and_envelope() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(200, "<ok/>");
        let client = SoapClient::with_transport(transport.clone());

        let response = client
            .call(
                "10.0.0.5",
                7070,
                "/ctrl/app",
                "urn:schemas-upnp-org:service:TmApplicationServer:1",
                "GetApplicationList",
                "<AppListingFilter>*</AppListingFilter><ProfileID>0</ProfileID>",
            )
            .unwrap();
        assert_eq!(response.status, 200);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        let recorded = &sent[0];
        assert_eq!(recorded.host, "10.0.0.5");
        assert_eq!(recorded.port, 7070);
        assert_eq!(recorded.request.method, HttpMethod::Post);
        assert_eq!(recorded.request.path, "/ctrl/app");
        assert_eq!(
            recorded.request.header_value("SOAPACTION"),
            Some("\"urn:schemas-upnp-org:service:TmApplicationServer:1#GetApplicationList\"")
        );
        assert_eq!(recorded.request.header_value("CONTENT-TYPE"), Some("text/xml; charset=\"utf-8\""));

        let body = recorded.request.body.as_deref().unwrap();
        assert!(body.starts_with("<?xml version=\"1.0\"?>"));
        assert!(body.contains(
            "<u:GetApplicationList xmlns:u=\"urn:schemas-upnp-org:service:TmApplicationServer:1\">\
             <AppListingFilter>*</AppListingFilter><ProfileID>0</ProfileID>\
             </u:GetApplicationList>"
        ));
    }

    #[test]
    fn test_get_sends_bodyless_request() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(404, "");
        let client = SoapClient::with_transport(transport.clone());

        let response = client.get("10.0.0.5", 7070, "/desc.xml").unwrap();
        assert_eq!(response.status, 404);

        let sent = transport.requests();
        assert_eq!(sent[0].request.method, HttpMethod::Get);
        assert_eq!(sent[0].request.path, "/desc.xml");
        assert!(sent[0].request.body.is_none());
        assert!(sent[0].request.headers.is_empty());
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail("connection refused");
        let client = SoapClient::with_transport(transport);

        match client.get("10.0.0.5", 7070, "/desc.xml") {
            Err(SoapError::Network(msg)) => assert!(msg.contains("connection refused")),
            other => panic!("Expected SoapError::Network, got {:?}", other),
        }
    }
}
