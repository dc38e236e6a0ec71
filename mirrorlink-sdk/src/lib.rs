//! # MirrorLink SDK
//!
//! A synchronous client for MirrorLink servers. It ties together the
//! description fetch from `mirrorlink-discovery`, the action invoker from
//! `mirrorlink-api` and a small configuration layer:
//!
//! ```rust,no_run
//! use mirrorlink_sdk::{logging, result_code, ClientConfig, MirrorLinkClient};
//!
//! fn main() -> Result<(), mirrorlink_sdk::SdkError> {
//!     logging::init_logging_from_env()?;
//!
//!     let mut client = MirrorLinkClient::with_config(ClientConfig::load()?);
//!     let server = client.start("192.168.1.20", 9000, "/description.xml")?;
//!     println!("Connected to {}", server.uuid());
//!
//!     client.set_client_profile()?;
//!     let result = client.launch(0x1a);
//!     println!("LaunchApplication -> {}", result_code(&result));
//!
//!     client.stop();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! mirrorlink-sdk (connection + config)
//!     ↓
//! mirrorlink-api (action registry, invoker, handlers)
//!     ↓
//! mirrorlink-discovery (description documents, service directory)
//!     ↓
//! soap-client (HTTP transport, SOAP envelopes)
//! ```

pub mod config;
pub mod logging;

mod client;
mod error;

pub use client::MirrorLinkClient;
pub use config::ClientConfig;
pub use error::SdkError;

pub use mirrorlink_api::{result_code, Action, ApiError, ControlClient};
pub use mirrorlink_discovery::{discover, ssdp, DiscoveryError, RemoteServer, ServiceType};
