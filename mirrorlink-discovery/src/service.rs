//! Service types and the per-device service directory.

use soap_client::service_uri;

/// The MirrorLink services a server can advertise.
///
/// Anything else found in a description document maps to `None` through
/// [`ServiceType::from_urn`] and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    /// TmApplicationServer - lists and launches applications
    Application,

    /// TmClientProfile - negotiates the client profile
    ClientProfile,

    /// TmNotificationServer - delivers notifications
    Notification,
}

/// Static identification of a service type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Suffix used in SOAP namespaces, e.g. `TmApplicationServer:1`
    pub urn_suffix: &'static str,
}

impl ServiceInfo {
    /// Full service URN as advertised in `serviceType`
    pub fn service_uri(&self) -> String {
        service_uri(self.urn_suffix)
    }
}

impl ServiceType {
    /// All service types, in directory order
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Application,
        ServiceType::ClientProfile,
        ServiceType::Notification,
    ];

    /// Get the name of this service as a string
    pub fn name(&self) -> &'static str {
        match self {
            ServiceType::Application => "TmApplicationServer",
            ServiceType::ClientProfile => "TmClientProfile",
            ServiceType::Notification => "TmNotificationServer",
        }
    }

    /// Get the URN information for this service
    pub fn info(&self) -> ServiceInfo {
        match self {
            ServiceType::Application => ServiceInfo {
                urn_suffix: "TmApplicationServer:1",
            },
            ServiceType::ClientProfile => ServiceInfo {
                urn_suffix: "TmClientProfile:1",
            },
            ServiceType::Notification => ServiceInfo {
                urn_suffix: "TmNotificationServer:1",
            },
        }
    }

    /// Map an advertised `serviceType` URN to a known service
    pub fn from_urn(urn: &str) -> Option<Self> {
        let urn = urn.trim();
        Self::ALL
            .into_iter()
            .find(|service| service.info().service_uri() == urn)
    }

    fn index(self) -> usize {
        match self {
            ServiceType::Application => 0,
            ServiceType::ClientProfile => 1,
            ServiceType::Notification => 2,
        }
    }
}

/// Endpoint paths advertised for one service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEndpoints {
    /// `SCPDURL` - service description document
    pub scpd_url: Option<String>,

    /// `controlURL` - where actions are POSTed
    pub control_url: Option<String>,

    /// `eventSubURL` - event subscription endpoint
    pub event_sub_url: Option<String>,
}

impl ServiceEndpoints {
    /// The control URL, treating an empty value as absent
    pub fn control_url(&self) -> Option<&str> {
        self.control_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// True when no endpoint was recorded
    pub fn is_empty(&self) -> bool {
        self.scpd_url.is_none() && self.control_url.is_none() && self.event_sub_url.is_none()
    }
}

/// One [`ServiceEndpoints`] slot per [`ServiceType`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDirectory {
    slots: [ServiceEndpoints; 3],
}

impl ServiceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, service: ServiceType) -> &ServiceEndpoints {
        &self.slots[service.index()]
    }

    pub fn control_url(&self, service: ServiceType) -> Option<&str> {
        self.get(service).control_url()
    }

    /// Services that have at least one endpoint recorded
    pub fn advertised(&self) -> impl Iterator<Item = (ServiceType, &ServiceEndpoints)> + '_ {
        ServiceType::ALL
            .into_iter()
            .map(move |service| (service, self.get(service)))
            .filter(|(_, endpoints)| !endpoints.is_empty())
    }

    pub(crate) fn set(&mut self, service: ServiceType, endpoints: ServiceEndpoints) {
        self.slots[service.index()] = endpoints;
    }
}
