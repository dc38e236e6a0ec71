//! MirrorLink server discovery library
//!
//! This crate turns a device description document into a [`RemoteServer`]
//! handle holding the server's identity and the endpoints of its
//! TmApplicationServer, TmClientProfile and TmNotificationServer services.
//!
//! # Quick Start
//!
//! ```no_run
//! use mirrorlink_discovery::{RemoteServer, ServiceType};
//! use soap_client::SoapClient;
//!
//! let client = SoapClient::new();
//! if let Some(server) = RemoteServer::create(&client, "192.168.1.20", 9000, "/description.xml") {
//!     println!("Found {} at {}:{}", server.uuid(), server.ip(), server.port());
//!     println!("Applications at {:?}", server.control_url(ServiceType::Application));
//! }
//! ```
//!
//! # Network Search
//!
//! When the description location is not known, search for it over SSDP:
//!
//! ```no_run
//! use mirrorlink_discovery::discover;
//! use soap_client::SoapClient;
//! use std::time::Duration;
//!
//! for server in discover(&SoapClient::new(), Duration::from_secs(3)) {
//!     println!("Found {}", server.uuid());
//! }
//! ```

pub mod device;
mod error;
mod server;
mod service;
pub mod ssdp;

pub use device::TM_SERVER_DEVICE_TYPE;
pub use error::{DiscoveryError, Result};
pub use server::RemoteServer;
pub use service::{ServiceDirectory, ServiceEndpoints, ServiceInfo, ServiceType};
pub use ssdp::DescriptionLocation;

use soap_client::SoapClient;
use std::time::Duration;
use tracing::warn;

/// Search the network and describe every MirrorLink server that answers.
///
/// Locations whose description cannot be fetched or is not a MirrorLink
/// server are skipped. A failed search yields an empty list.
pub fn discover(client: &SoapClient, timeout: Duration) -> Vec<RemoteServer> {
    let locations = match ssdp::search(timeout) {
        Ok(locations) => locations,
        Err(e) => {
            warn!(error = %e, "SSDP search failed");
            return Vec::new();
        }
    };

    locations
        .iter()
        .filter_map(|location| RemoteServer::create(client, &location.host, location.port, &location.path))
        .collect()
}
