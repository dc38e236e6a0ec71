//! MirrorLink operations, grouped by the service that owns them

pub mod application_server;
pub mod client_profile;

pub use application_server::*;
pub use client_profile::*;
