//! Action registry
//!
//! A fixed table mapping each known action to the service that owns it, its
//! wire name and the handler that judges its response. Extending the
//! protocol means adding a variant, a table entry and a handler.

use std::fmt;

use mirrorlink_discovery::{RemoteServer, ServiceType};

use crate::handlers;

/// Judges a 200 response body; `false` turns the invocation into a rejection
pub type ResponseHandler = fn(&RemoteServer, &str) -> bool;

/// The actions this client knows how to invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GetApplicationList,
    LaunchApplication,
    SetClientProfile,
}

/// Registry entry for one action
#[derive(Clone, Copy)]
pub struct ActionDescriptor {
    pub service: ServiceType,
    pub name: &'static str,
    pub handler: ResponseHandler,
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("service", &self.service)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// Indexed by `Action as usize`
static ACTIONS: [ActionDescriptor; 3] = [
    ActionDescriptor {
        service: ServiceType::Application,
        name: "GetApplicationList",
        handler: handlers::get_application_list,
    },
    ActionDescriptor {
        service: ServiceType::Application,
        name: "LaunchApplication",
        handler: handlers::launch_application,
    },
    ActionDescriptor {
        service: ServiceType::ClientProfile,
        name: "SetClientProfile",
        handler: handlers::set_client_profile,
    },
];

impl Action {
    pub const ALL: [Action; 3] = [
        Action::GetApplicationList,
        Action::LaunchApplication,
        Action::SetClientProfile,
    ];

    pub fn descriptor(self) -> &'static ActionDescriptor {
        &ACTIONS[self as usize]
    }

    /// The service whose control URL receives this action
    pub fn service(self) -> ServiceType {
        self.descriptor().service
    }

    /// SOAP action name on the wire
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn handler(self) -> ResponseHandler {
        self.descriptor().handler
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_entries() {
        assert_eq!(Action::GetApplicationList.service(), ServiceType::Application);
        assert_eq!(Action::GetApplicationList.name(), "GetApplicationList");

        assert_eq!(Action::LaunchApplication.service(), ServiceType::Application);
        assert_eq!(Action::LaunchApplication.name(), "LaunchApplication");

        assert_eq!(Action::SetClientProfile.service(), ServiceType::ClientProfile);
        assert_eq!(Action::SetClientProfile.name(), "SetClientProfile");
    }

    #[test]
    fn test_table_order_matches_variants() {
        for action in Action::ALL {
            assert_eq!(action.to_string(), format!("{:?}", action));
        }
    }

    #[test]
    fn test_descriptor_debug_omits_handler() {
        let debug = format!("{:?}", Action::SetClientProfile.descriptor());
        assert!(debug.contains("SetClientProfile"));
        assert!(debug.contains("ClientProfile"));
    }
}
