use mirrorlink_api::{ControlClient, Result as ApiResult};
use mirrorlink_discovery::{RemoteServer, ServiceType};
use soap_client::SoapClient;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::SdkError;

/// High-level MirrorLink client holding at most one server connection
///
/// # Example
/// ```rust,no_run
/// use mirrorlink_sdk::{ClientConfig, MirrorLinkClient};
///
/// let mut client = MirrorLinkClient::with_config(ClientConfig::load()?);
/// client.start("192.168.1.20", 9000, "/description.xml")?;
/// client.set_client_profile()?;
/// client.launch(0x1a)?;
/// client.stop();
/// # Ok::<(), mirrorlink_sdk::SdkError>(())
/// ```
#[derive(Debug)]
pub struct MirrorLinkClient {
    control: ControlClient,
    config: ClientConfig,
    server: Option<RemoteServer>,
}

impl MirrorLinkClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let control = ControlClient::with_config(config.transport());
        Self::with_control_client(control, config)
    }

    /// Use an existing control client; the config's timeouts are ignored
    pub fn with_control_client(control: ControlClient, config: ClientConfig) -> Self {
        Self {
            control,
            config,
            server: None,
        }
    }

    /// Build a client over a specific SOAP client (custom transports, tests)
    pub fn with_soap_client(soap_client: SoapClient, config: ClientConfig) -> Self {
        Self::with_control_client(ControlClient::with_soap_client(soap_client), config)
    }

    /// Describe the server at `ip:port` and make it the current connection
    ///
    /// Any previous connection is released first, so a failed start leaves
    /// the client disconnected.
    pub fn start(&mut self, ip: &str, port: u16, path: &str) -> Result<&RemoteServer, SdkError> {
        self.stop();

        let server = RemoteServer::describe(self.control.soap_client(), ip, port, path).map_err(|e| {
            warn!(ip, port, path, error = %e, "failed to start MirrorLink connection");
            e
        })?;

        info!(
            uuid = server.uuid(),
            friendly_name = ?server.friendly_name(),
            "connected to MirrorLink server"
        );
        for service in ServiceType::ALL {
            if server.control_url(service).is_none() {
                warn!(service = service.name(), "server does not advertise a control URL");
            }
        }

        Ok(self.server.insert(server))
    }

    /// Release the current connection, if any
    pub fn stop(&mut self) {
        if let Some(server) = self.server.take() {
            info!(uuid = server.uuid(), "released MirrorLink connection");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.server.is_some()
    }

    pub fn server(&self) -> Option<&RemoteServer> {
        self.server.as_ref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Launch application `app_id` under the configured profile
    pub fn launch(&self, app_id: u32) -> ApiResult<()> {
        self.control
            .launch_application(self.server.as_ref(), app_id, self.config.profile_id)
    }

    /// Request the application list with the configured filter
    pub fn list_applications(&self) -> ApiResult<()> {
        self.control.list_applications(
            self.server.as_ref(),
            self.config.profile_id,
            &self.config.app_list_filter,
        )
    }

    /// Send this client's capability profile under the configured profile id
    pub fn set_client_profile(&self) -> ApiResult<()> {
        self.control
            .set_client_profile(self.server.as_ref(), self.config.profile_id)
    }
}

impl Default for MirrorLinkClient {
    fn default() -> Self {
        Self::new()
    }
}
