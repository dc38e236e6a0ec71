//! TmClientProfile operations

mod set_client_profile;

pub use set_client_profile::*;
