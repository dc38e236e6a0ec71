//! TmApplicationServer operations

mod get_application_list;
mod launch_application;

pub use get_application_list::*;
pub use launch_application::*;
