//! LaunchApplication operation for the TmApplicationServer service

use crate::action::Action;
use crate::operation::MirrorLinkOperation;

/// LaunchApplication operation
pub struct LaunchApplicationOperation;

/// Request for LaunchApplication operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchApplicationRequest {
    pub app_id: u32,
    pub profile_id: u32,
}

impl MirrorLinkOperation for LaunchApplicationOperation {
    type Request = LaunchApplicationRequest;

    const ACTION: Action = Action::LaunchApplication;

    fn build_payload(request: &Self::Request) -> String {
        // AppID goes on the wire as 0x-prefixed, zero-padded lowercase hex
        format!(
            "<AppID>0x{:08x}</AppID><ProfileID>{}</ProfileID>",
            request.app_id, request.profile_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0x1a, 0, "<AppID>0x0000001a</AppID><ProfileID>0</ProfileID>")]
    #[case(0x1a, 42, "<AppID>0x0000001a</AppID><ProfileID>42</ProfileID>")]
    #[case(0, 1, "<AppID>0x00000000</AppID><ProfileID>1</ProfileID>")]
    #[case(u32::MAX, 3, "<AppID>0xffffffff</AppID><ProfileID>3</ProfileID>")]
    fn test_launch_application_payload(#[case] app_id: u32, #[case] profile_id: u32, #[case] expected: &str) {
        let request = LaunchApplicationRequest { app_id, profile_id };
        assert_eq!(LaunchApplicationOperation::build_payload(&request), expected);
    }

    #[test]
    fn test_payload_is_deterministic() {
        let request = LaunchApplicationRequest { app_id: 0x1a, profile_id: 9 };
        assert_eq!(
            LaunchApplicationOperation::build_payload(&request),
            LaunchApplicationOperation::build_payload(&request)
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            /// AppID is always eight lowercase hex digits that decode to the id
            #[test]
            fn prop_app_id_round_trips(app_id in any::<u32>(), profile_id in any::<u32>()) {
                let payload = LaunchApplicationOperation::build_payload(&LaunchApplicationRequest { app_id, profile_id });

                let hex = payload
                    .strip_prefix("<AppID>0x")
                    .and_then(|rest| rest.split_once("</AppID>"))
                    .map(|(hex, _)| hex)
                    .expect("payload starts with AppID");

                prop_assert_eq!(hex.len(), 8);
                prop_assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
                prop_assert_eq!(u32::from_str_radix(hex, 16).ok(), Some(app_id));

                let profile_element = format!("<ProfileID>{}</ProfileID>", profile_id);
                prop_assert!(payload.ends_with(&profile_element));
            }
        }
    }
}
