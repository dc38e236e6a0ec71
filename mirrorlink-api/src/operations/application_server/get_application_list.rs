//! GetApplicationList operation for the TmApplicationServer service

use crate::action::Action;
use crate::operation::MirrorLinkOperation;

/// Filter value that matches every application
pub const LIST_ALL_FILTER: &str = "*";

/// GetApplicationList operation
pub struct GetApplicationListOperation;

/// Request for GetApplicationList operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetApplicationListRequest {
    pub profile_id: u32,
    /// `AppListingFilter` expression, sent as-is
    pub filter: String,
}

impl MirrorLinkOperation for GetApplicationListOperation {
    type Request = GetApplicationListRequest;

    const ACTION: Action = Action::GetApplicationList;

    fn build_payload(request: &Self::Request) -> String {
        format!(
            "<AppListingFilter>{}</AppListingFilter><ProfileID>{}</ProfileID>",
            request.filter, request.profile_id
        )
    }
}
