use mirrorlink_discovery::{RemoteServer, ServiceType};
use soap_client::{SoapClient, TransportConfig};
use tracing::{debug, info, warn};

use crate::action::ResponseHandler;
use crate::error::{ApiError, Result};
use crate::operation::MirrorLinkOperation;
use crate::operations::{
    GetApplicationListOperation, GetApplicationListRequest, LaunchApplicationOperation,
    LaunchApplicationRequest, SetClientProfileOperation, SetClientProfileRequest,
};

/// A client for invoking MirrorLink actions against discovered servers
///
/// Every method takes the server as `Option<&RemoteServer>`: passing `None`
/// ("not connected") returns [`ApiError::NotConnected`] without touching the
/// network.
///
/// # Example
/// ```rust,no_run
/// use mirrorlink_api::ControlClient;
///
/// let client = ControlClient::new();
/// let server = client.connect("192.168.1.20", 9000, "/description.xml");
///
/// client.set_client_profile(server.as_ref(), 0)?;
/// client.launch_application(server.as_ref(), 0x1a, 0)?;
/// # Ok::<(), mirrorlink_api::ApiError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ControlClient {
    soap_client: SoapClient,
}

impl ControlClient {
    /// Create a client with the default transport configuration
    pub fn new() -> Self {
        Self::with_soap_client(SoapClient::new())
    }

    /// Create a client whose transport uses the given timeouts
    pub fn with_config(config: TransportConfig) -> Self {
        Self::with_soap_client(SoapClient::with_config(config))
    }

    /// Create a client with a custom SOAP client (custom transports, tests)
    pub fn with_soap_client(soap_client: SoapClient) -> Self {
        Self { soap_client }
    }

    pub fn soap_client(&self) -> &SoapClient {
        &self.soap_client
    }

    /// Fetch a description document and build a server handle from it
    pub fn connect(&self, ip: &str, port: u16, path: &str) -> Option<RemoteServer> {
        RemoteServer::create(&self.soap_client, ip, port, path)
    }

    /// Invoke `action` on `service` with an already serialized argument fragment
    ///
    /// A 200 status is a success unless `handler` rejects the body. Any other
    /// status is returned as [`ApiError::HttpStatus`].
    pub fn invoke(
        &self,
        server: Option<&RemoteServer>,
        service: ServiceType,
        action: &str,
        arguments: &str,
        handler: Option<ResponseHandler>,
    ) -> Result<()> {
        let server = server.ok_or(ApiError::NotConnected)?;
        let control_url = server
            .control_url(service)
            .ok_or(ApiError::MissingControlUrl(service))?;
        let service_uri = service.info().service_uri();

        let response = self
            .soap_client
            .call(
                server.ip(),
                server.port(),
                control_url,
                &service_uri,
                action,
                arguments,
            )
            .map_err(|e| {
                warn!(action, error = %e, "action invoke got no response");
                ApiError::NetworkError(e.to_string())
            })?;

        if response.status != 200 {
            warn!(action, status = response.status, "action invoke error");
            return Err(ApiError::HttpStatus(response.status));
        }

        info!(action, "action invoke successfully");
        debug!(action, body = %response.body, "response body");

        match handler {
            Some(handler) if !handler(server, &response.body) => Err(ApiError::Rejected(action.to_string())),
            _ => Ok(()),
        }
    }

    /// Execute a typed operation through its registry entry
    pub fn execute<Op: MirrorLinkOperation>(
        &self,
        server: Option<&RemoteServer>,
        request: &Op::Request,
    ) -> Result<()> {
        let server = server.ok_or(ApiError::NotConnected)?;
        let descriptor = Op::ACTION.descriptor();
        let payload = Op::build_payload(request);

        self.invoke(
            Some(server),
            descriptor.service,
            descriptor.name,
            &payload,
            Some(descriptor.handler),
        )
    }

    /// List the applications the server offers for `profile_id`
    pub fn list_applications(&self, server: Option<&RemoteServer>, profile_id: u32, filter: &str) -> Result<()> {
        self.execute::<GetApplicationListOperation>(
            server,
            &GetApplicationListRequest {
                profile_id,
                filter: filter.to_string(),
            },
        )
    }

    /// Launch application `app_id` on the server
    pub fn launch_application(&self, server: Option<&RemoteServer>, app_id: u32, profile_id: u32) -> Result<()> {
        self.execute::<LaunchApplicationOperation>(server, &LaunchApplicationRequest { app_id, profile_id })
    }

    /// Send this client's capability profile under `profile_id`
    pub fn set_client_profile(&self, server: Option<&RemoteServer>, profile_id: u32) -> Result<()> {
        self.execute::<SetClientProfileOperation>(server, &SetClientProfileRequest { profile_id })
    }
}
