//! High-level MirrorLink API for server control
//!
//! This crate invokes actions on MirrorLink servers discovered with
//! `mirrorlink-discovery`. It uses the private `soap-client` crate for the
//! SOAP exchange itself.
//!
//! Three actions are available, each listed in a fixed registry ([`Action`])
//! that names its owning service, its wire name and the response handler
//! that decides whether a 200 answer counts as success:
//!
//! ```rust,no_run
//! use mirrorlink_api::{result_code, ControlClient};
//!
//! let client = ControlClient::new();
//! let server = client.connect("192.168.1.20", 9000, "/description.xml");
//!
//! let result = client.list_applications(server.as_ref(), 0, "*");
//! println!("GetApplicationList -> {}", result_code(&result));
//! ```

pub mod action;
pub mod client;
pub mod error;
pub mod handlers;
pub mod operation;
pub mod operations;

pub use action::{Action, ActionDescriptor, ResponseHandler};
pub use client::ControlClient;
pub use error::{result_code, ApiError, Result};
pub use mirrorlink_discovery::{RemoteServer, ServiceType};
pub use operation::MirrorLinkOperation;
