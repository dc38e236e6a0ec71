//! Round trips through the ureq transport against a local mock server

use mockito::{Matcher, Server};
use soap_client::{HttpTransport, HttpMethod, HttpRequest, SoapClient, SoapError, TransportConfig, UreqTransport};
use std::time::Duration;

fn host_and_port(server: &Server) -> (String, u16) {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mock server address has a port");
    (host.to_string(), port.parse().expect("numeric port"))
}

#[test]
fn test_get_returns_status_and_body() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/desc.xml")
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body("<root/>")
        .create();

    let (host, port) = host_and_port(&server);
    let client = SoapClient::new();
    let response = client.get(&host, port, "/desc.xml").unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "<root/>");
    mock.assert();
}

#[test]
fn test_error_status_is_a_response_not_an_error() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/ctrl/app")
        .with_status(500)
        .with_body("fault")
        .create();

    let (host, port) = host_and_port(&server);
    let transport = UreqTransport::default();
    let request = HttpRequest::new(HttpMethod::Post, "/ctrl/app").body("<x/>");
    let response = transport.send(&host, port, &request).unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(response.body, "fault");
    mock.assert();
}

#[test]
fn test_call_sends_soap_headers_and_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/ctrl/app")
        .match_header(
            "soapaction",
            "\"urn:schemas-upnp-org:service:TmApplicationServer:1#LaunchApplication\"",
        )
        .match_header("content-type", "text/xml; charset=\"utf-8\"")
        .match_body(Matcher::Regex(
            "<AppID>0x0000001a</AppID><ProfileID>0</ProfileID>".to_string(),
        ))
        .with_status(200)
        .with_body("<ok/>")
        .create();

    let (host, port) = host_and_port(&server);
    let client = SoapClient::with_config(TransportConfig::new().with_timeout(Duration::from_secs(2)));
    let response = client
        .call(
            &host,
            port,
            "/ctrl/app",
            "urn:schemas-upnp-org:service:TmApplicationServer:1",
            "LaunchApplication",
            "<AppID>0x0000001a</AppID><ProfileID>0</ProfileID>",
        )
        .unwrap();

    assert!(response.is_ok());
    mock.assert();
}

#[test]
fn test_unreachable_host_is_network_error() {
    let transport = UreqTransport::with_timeout(Duration::from_millis(500));
    let request = HttpRequest::new(HttpMethod::Get, "/desc.xml");

    // Port 1 on loopback is not expected to accept connections
    let result = transport.send("127.0.0.1", 1, &request);
    assert!(matches!(result, Err(SoapError::Network(_))));
}
