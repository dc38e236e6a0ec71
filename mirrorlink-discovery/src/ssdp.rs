//! SSDP (Simple Service Discovery Protocol) search for MirrorLink servers
//!
//! Sends one M-SEARCH for the TmServerDevice type and turns the `LOCATION`
//! headers of the answers into description locations.

use std::collections::HashSet;
use std::net::UdpSocket;
use std::time::Duration;

use tracing::{debug, warn};

use crate::device::TM_SERVER_DEVICE_TYPE;
use crate::error::{DiscoveryError, Result};

const SSDP_MULTICAST_ADDR: &str = "239.255.255.250:1900";

/// Where a server's description document can be fetched
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptionLocation {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl DescriptionLocation {
    /// Split an `http://host[:port]/path` URL
    ///
    /// The port defaults to 80 and the path to `/`. Returns `None` for
    /// anything that is not a plain http URL.
    pub fn parse(url: &str) -> Option<Self> {
        let rest = url.trim().strip_prefix("http://")?;
        let (authority, path) = match rest.find('/') {
            Some(index) => (&rest[..index], &rest[index..]),
            None => (rest, "/"),
        };

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (host, port.parse::<u16>().ok()?),
            None => (authority, 80),
        };

        if host.is_empty() {
            return None;
        }

        Some(Self {
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }
}

/// SSDP response containing device information
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SsdpResponse {
    pub location: String,
    pub urn: String,
    pub usn: String,
    pub server: Option<String>,
}

/// SSDP client for device discovery
pub(crate) struct SsdpClient {
    socket: UdpSocket,
}

impl SsdpClient {
    /// Create a new SSDP client with the specified timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to bind UDP socket: {}", e)))?;

        socket.set_read_timeout(Some(timeout))
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set read timeout: {}", e)))?;

        socket.set_multicast_loop_v4(true)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set multicast loop: {}", e)))?;

        Ok(Self { socket })
    }

    /// Send an M-SEARCH request and return an iterator of responses
    pub fn search(&self, search_target: &str) -> Result<SsdpResponseIterator<'_>> {
        let request = format!(
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: 239.255.255.250:1900\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: 2\r\n\
             ST: {}\r\n\
             USER-AGENT: mirrorlink-rs/1.0 UPnP/1.0\r\n\
             \r\n",
            search_target
        );

        self.socket.send_to(request.as_bytes(), SSDP_MULTICAST_ADDR)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to send M-SEARCH: {}", e)))?;

        Ok(SsdpResponseIterator::new(&self.socket))
    }
}

/// Iterator for SSDP responses; ends when the read timeout expires
pub(crate) struct SsdpResponseIterator<'a> {
    socket: &'a UdpSocket,
    buffer: [u8; 2048],
    finished: bool,
}

impl<'a> SsdpResponseIterator<'a> {
    fn new(socket: &'a UdpSocket) -> Self {
        Self {
            socket,
            buffer: [0; 2048],
            finished: false,
        }
    }
}

impl<'a> Iterator for SsdpResponseIterator<'a> {
    type Item = Result<SsdpResponse>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.socket.recv_from(&mut self.buffer) {
                Ok((size, _)) => {
                    // Skip datagrams that are not UTF-8 or not SSDP answers
                    if let Some(response) = std::str::from_utf8(&self.buffer[..size])
                        .ok()
                        .and_then(parse_ssdp_response)
                    {
                        return Some(Ok(response));
                    }
                }
                Err(e) => {
                    self.finished = true;
                    if e.kind() == std::io::ErrorKind::WouldBlock || e.kind() == std::io::ErrorKind::TimedOut {
                        return None;
                    }
                    return Some(Err(DiscoveryError::NetworkError(format!("Socket error: {}", e))));
                }
            }
        }
        None
    }
}

/// Search the local network for MirrorLink servers.
///
/// Waits up to `timeout` for answers and returns each distinct description
/// location once, in the order the answers arrived. A socket error after the
/// request went out ends the search with the locations collected so far.
pub fn search(timeout: Duration) -> Result<Vec<DescriptionLocation>> {
    let client = SsdpClient::new(timeout)?;
    Ok(collect_locations(client.search(TM_SERVER_DEVICE_TYPE)?))
}

fn collect_locations(responses: impl IntoIterator<Item = Result<SsdpResponse>>) -> Vec<DescriptionLocation> {
    let mut seen = HashSet::new();
    let mut locations = Vec::new();

    for response in responses {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, found = locations.len(), "SSDP search interrupted");
                break;
            }
        };
        if !response.urn.contains("TmServerDevice") {
            continue;
        }

        let Some(location) = DescriptionLocation::parse(&response.location) else {
            debug!(location = %response.location, "skipping unusable SSDP location");
            continue;
        };

        if seen.insert(location.clone()) {
            debug!(usn = %response.usn, server = ?response.server, location = %response.location, "SSDP answer");
            locations.push(location);
        }
    }

    locations
}

/// Parse an SSDP response from HTTP text
fn parse_ssdp_response(response: &str) -> Option<SsdpResponse> {
    let mut location = None;
    let mut urn = None;
    let mut usn = None;
    let mut server = None;

    for line in response.lines() {
        let line = line.trim();

        if let Some(value) = extract_header_value(line, "LOCATION:") {
            location = Some(value);
        } else if let Some(value) = extract_header_value(line, "ST:") {
            urn = Some(value);
        } else if let Some(value) = extract_header_value(line, "USN:") {
            usn = Some(value);
        } else if let Some(value) = extract_header_value(line, "SERVER:") {
            server = Some(value);
        }
    }

    match (location, urn, usn) {
        (Some(location), Some(urn), Some(usn)) => Some(SsdpResponse {
            location,
            urn,
            usn,
            server,
        }),
        _ => None,
    }
}

/// Extract header value from a line like "HEADER: value"
fn extract_header_value(line: &str, header: &str) -> Option<String> {
    if line.len() > header.len() && line.is_char_boundary(header.len()) && line[..header.len()].eq_ignore_ascii_case(header) {
        Some(line[header.len()..].trim().to_string())
    } else {
        None
    }
}
