//! Device description parsing.
//!
//! The description document is parsed into an `xmltree` and walked by element
//! name. Elements that are not recognised are skipped wherever they appear,
//! and when a recognised element repeats inside `device` or inside a
//! `service` entry, its first occurrence is used. Every `serviceList` child
//! of `device` is walked.
//!
//! Text is kept as written; only `deviceType` and `serviceType` are compared
//! with surrounding whitespace ignored.

use std::borrow::Cow;

use xmltree::{Element, XMLNode};

use crate::error::{DiscoveryError, Result};
use crate::service::{ServiceDirectory, ServiceEndpoints, ServiceType};
use tracing::debug;

/// Device type advertised by MirrorLink servers
pub const TM_SERVER_DEVICE_TYPE: &str = "urn:schemas-upnp-org:device:TmServerDevice:1";

/// Top-level `device` element of a description document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceDescription {
    pub device_type: Option<String>,
    pub friendly_name: Option<String>,
    pub manufacturer: Option<String>,
    pub model_name: Option<String>,
    pub udn: Option<String>,
    /// `service` entries of every `serviceList`, in document order
    pub services: Vec<ServiceEntry>,
}

/// One `service` entry inside `serviceList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEntry {
    pub service_type: Option<String>,
    pub scpd_url: Option<String>,
    pub control_url: Option<String>,
    pub event_sub_url: Option<String>,
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> + '_ {
    element.children.iter().filter_map(XMLNode::as_element)
}

fn child_text(element: &Element, name: &str) -> Option<String> {
    child_elements(element)
        .find(|child| child.name == name)
        .and_then(|child| child.get_text())
        .map(Cow::into_owned)
}

impl ServiceEntry {
    fn from_element(service: &Element) -> Self {
        Self {
            service_type: child_text(service, "serviceType"),
            scpd_url: child_text(service, "SCPDURL"),
            control_url: child_text(service, "controlURL"),
            event_sub_url: child_text(service, "eventSubURL"),
        }
    }
}

impl DeviceDescription {
    /// Parse device description from XML.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::ParseError` if the XML is malformed and
    /// `DiscoveryError::MissingDevice` if the root has no `device` child.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root = Element::parse(xml.as_bytes())
            .map_err(|e| DiscoveryError::ParseError(format!("Failed to parse device XML: {}", e)))?;

        let device = root.get_child("device").ok_or(DiscoveryError::MissingDevice)?;
        Ok(Self::from_element(device))
    }

    fn from_element(device: &Element) -> Self {
        let services = child_elements(device)
            .filter(|child| child.name == "serviceList")
            .flat_map(child_elements)
            .filter(|child| child.name == "service")
            .map(ServiceEntry::from_element)
            .collect();

        Self {
            device_type: child_text(device, "deviceType"),
            friendly_name: child_text(device, "friendlyName"),
            manufacturer: child_text(device, "manufacturer"),
            model_name: child_text(device, "modelName"),
            udn: child_text(device, "UDN"),
            services,
        }
    }

    /// Check if this device is a MirrorLink server.
    pub fn is_mirrorlink_server(&self) -> bool {
        self.device_type.as_deref().map(str::trim) == Some(TM_SERVER_DEVICE_TYPE)
    }

    /// Service entries in document order
    pub fn services(&self) -> &[ServiceEntry] {
        &self.services
    }

    /// Collect the endpoints of every known service type.
    ///
    /// Entries without a `serviceType`, or with an unknown one, are dropped.
    /// A later entry of the same type replaces an earlier one.
    pub fn service_directory(&self) -> ServiceDirectory {
        let mut directory = ServiceDirectory::new();

        for entry in self.services() {
            let Some(service) = entry.service_type.as_deref().and_then(ServiceType::from_urn) else {
                debug!(service_type = ?entry.service_type, "ignoring unknown service");
                continue;
            };

            debug!(
                service = service.name(),
                scpd_url = ?entry.scpd_url,
                control_url = ?entry.control_url,
                event_sub_url = ?entry.event_sub_url,
                "service endpoints"
            );

            directory.set(
                service,
                ServiceEndpoints {
                    scpd_url: entry.scpd_url.clone(),
                    control_url: entry.control_url.clone(),
                    event_sub_url: entry.event_sub_url.clone(),
                },
            );
        }

        directory
    }
}
