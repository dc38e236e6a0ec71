//! SetClientProfile operation for the TmClientProfile service

use crate::action::Action;
use crate::operation::MirrorLinkOperation;

/// Client capability profile sent after the profile id.
///
/// Static: it describes this client, not anything negotiated at runtime.
pub const CLIENT_PROFILE: &str = concat!(
    "<ClientProfile>",
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
    "<clientProfile>",
    "<clientID>Cl_1</clientID>",
    "<friendlyName>Client One</friendlyName>",
    "<manufacturer>man_2</manufacturer>",
    "<modelName>CL_Model2</modelName>",
    "<modelNumber>2009</modelNumber>",
    "<iconPreference>",
    "<mimetype>image/png</mimetype>",
    "<width>240</width>",
    "<height>240</height>",
    "<depth>24</depth>",
    "</iconPreference>",
    "<connectivity>",
    "<bluetooth>",
    "<bdAddr>1A2B3C4D5E6F</bdAddr>",
    "<startConnection>false</startConnection>",
    "</bluetooth>",
    "</connectivity>",
    "<rtpStreaming>",
    "<payloadType>0,99</payloadType>",
    "<audioIPL>4800</audioIPL>",
    "<audioMPL>9600</audioMPL>",
    "</rtpStreaming>",
    "<services>",
    "<notification>",
    "<notiUiSupport>true</notiUiSupport>",
    "<maxActions>3</maxActions>",
    "<actionNameMaxLength>15</actionNameMaxLength>",
    "<notiTitleMaxLength>25</notiTitleMaxLength>",
    "<notiBodyMaxLength>100</notiBodyMaxLength>",
    "</notification>",
    "</services>",
    "<mirrorLinkVersion>",
    "<majorVersion>1</majorVersion>",
    "<minorVersion>1</minorVersion>",
    "</mirrorLinkVersion>",
    "<misc>",
    "<driverDistractionSupport>true</driverDistractionSupport>",
    "</misc>",
    "</clientProfile>",
    "</ClientProfile>",
);

/// SetClientProfile operation
pub struct SetClientProfileOperation;

/// Request for SetClientProfile operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetClientProfileRequest {
    pub profile_id: u32,
}

impl MirrorLinkOperation for SetClientProfileOperation {
    type Request = SetClientProfileRequest;

    const ACTION: Action = Action::SetClientProfile;

    fn build_payload(request: &Self::Request) -> String {
        format!("<ProfileID>{}</ProfileID>{}", request.profile_id, CLIENT_PROFILE)
    }
}
