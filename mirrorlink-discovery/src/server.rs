//! The remote server handle produced by discovery.

use soap_client::SoapClient;
use tracing::{info, warn};

use crate::device::DeviceDescription;
use crate::error::{DiscoveryError, Result};
use crate::service::{ServiceDirectory, ServiceEndpoints, ServiceType};

/// A discovered MirrorLink server.
///
/// Built once from a single description document and never modified
/// afterwards. Dropping the handle releases everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteServer {
    ip: String,
    port: u16,
    uuid: String,
    friendly_name: Option<String>,
    manufacturer: Option<String>,
    model_name: Option<String>,
    services: ServiceDirectory,
}

impl RemoteServer {
    /// Fetch the description at `path` and build a handle from it.
    ///
    /// # Errors
    ///
    /// Fails when no response arrives, the status is not 200, the body is not
    /// a description document, or the device is not a MirrorLink server.
    pub fn describe(client: &SoapClient, ip: &str, port: u16, path: &str) -> Result<Self> {
        let response = client
            .get(ip, port, path)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to fetch device description: {}", e)))?;

        if !response.is_ok() {
            return Err(DiscoveryError::HttpStatus(response.status));
        }
        info!(ip, port, path, "fetched device description");

        Self::from_description(ip, port, &response.body)
    }

    /// Like [`RemoteServer::describe`], but only reports whether a server was found.
    pub fn create(client: &SoapClient, ip: &str, port: u16, path: &str) -> Option<Self> {
        match Self::describe(client, ip, port, path) {
            Ok(server) => Some(server),
            Err(e) => {
                warn!(ip, port, path, error = %e, "no MirrorLink server");
                None
            }
        }
    }

    /// Build a handle from an already fetched description document.
    pub fn from_description(ip: &str, port: u16, xml: &str) -> Result<Self> {
        let description = DeviceDescription::from_xml(xml)?;

        if !description.is_mirrorlink_server() {
            let found = description.device_type.unwrap_or_default();
            return Err(DiscoveryError::DeviceTypeMismatch(found));
        }
        info!(ip, port, "this is a MirrorLink server device");

        let services = description.service_directory();
        let uuid = description.udn.unwrap_or_default();
        info!(uuid = %uuid, services = services.advertised().count(), "parsed device description");

        Ok(Self {
            ip: ip.to_string(),
            port,
            uuid,
            friendly_name: description.friendly_name,
            manufacturer: description.manufacturer,
            model_name: description.model_name,
            services,
        })
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Unique device name (`UDN`), empty if the document had none
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model_name.as_deref()
    }

    pub fn services(&self) -> &ServiceDirectory {
        &self.services
    }

    pub fn service(&self, service: ServiceType) -> &ServiceEndpoints {
        self.services.get(service)
    }

    /// Control URL for `service`, `None` if not advertised or empty
    pub fn control_url(&self, service: ServiceType) -> Option<&str> {
        self.services.control_url(service)
    }
}
