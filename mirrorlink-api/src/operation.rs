//! Typed operation definitions

use crate::action::Action;

/// Base trait for all MirrorLink operations
///
/// An operation pairs a registry [`Action`] with the typed request it takes
/// and knows how to marshal that request into the argument fragment placed
/// inside the SOAP action element.
pub trait MirrorLinkOperation {
    /// The request type for this operation
    type Request;

    /// Registry entry supplying service, wire name and response handler
    const ACTION: Action;

    /// Build the argument fragment from the request data
    ///
    /// The fragment is inserted into the envelope verbatim, so it must already
    /// be well-formed XML.
    fn build_payload(request: &Self::Request) -> String;
}
