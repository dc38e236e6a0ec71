//! Response handlers for the predefined actions
//!
//! A handler runs only after a 200 status. It accepts the body unless the
//! body is a SOAP envelope carrying a `Fault`; bodies that are empty or not
//! XML at all are accepted.

use mirrorlink_discovery::RemoteServer;
use soap_client::{extract_response, SoapError};
use tracing::{debug, warn};
use xmltree::Element;

pub fn get_application_list(server: &RemoteServer, body: &str) -> bool {
    match extract_response(body, "GetApplicationList") {
        Ok(response) => {
            // AppListing carries an escaped XML document of <app> entries
            let listing = response
                .get_child("AppListing")
                .and_then(|listing| listing.get_text())
                .unwrap_or_default();
            debug!(uuid = server.uuid(), applications = count_applications(&listing), "application list received");
            true
        }
        Err(error) => accept_unless_fault(server, "GetApplicationList", error),
    }
}

pub fn launch_application(server: &RemoteServer, body: &str) -> bool {
    match extract_response(body, "LaunchApplication") {
        Ok(response) => {
            let app_uri = response.get_child("AppURI").and_then(|uri| uri.get_text());
            debug!(uuid = server.uuid(), app_uri = ?app_uri, "application launched");
            true
        }
        Err(error) => accept_unless_fault(server, "LaunchApplication", error),
    }
}

pub fn set_client_profile(server: &RemoteServer, body: &str) -> bool {
    match extract_response(body, "SetClientProfile") {
        Ok(_) => true,
        Err(error) => accept_unless_fault(server, "SetClientProfile", error),
    }
}

fn accept_unless_fault(server: &RemoteServer, action: &str, error: SoapError) -> bool {
    match error {
        SoapError::Fault(code) => {
            warn!(uuid = server.uuid(), action, code, "SOAP fault in 200 response");
            false
        }
        other => {
            debug!(uuid = server.uuid(), action, error = %other, "response body not interpreted");
            true
        }
    }
}

/// Number of `<app>` entries in an application listing, 0 if unparseable
fn count_applications(listing: &str) -> usize {
    Element::parse(listing.as_bytes())
        .map(|root| {
            root.children
                .iter()
                .filter_map(|node| node.as_element())
                .filter(|element| element.name == "app")
                .count()
        })
        .unwrap_or(0)
}
