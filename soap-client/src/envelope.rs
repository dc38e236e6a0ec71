//! SOAP envelope construction and response extraction

use xmltree::Element;

use crate::error::SoapError;

/// Prefix shared by every UPnP service URN
pub const SERVICE_URN_PREFIX: &str = "urn:schemas-upnp-org:service:";

/// Content type sent with every action request
pub const CONTENT_TYPE: &str = "text/xml; charset=\"utf-8\"";

/// Full service URN for a suffix such as `TmApplicationServer:1`
pub fn service_uri(urn_suffix: &str) -> String {
    format!("{}{}", SERVICE_URN_PREFIX, urn_suffix)
}

/// Value of the `SOAPACTION` header, quotes included
pub fn soap_action(service_uri: &str, action: &str) -> String {
    format!("\"{}#{}\"", service_uri, action)
}

/// Wrap an already-serialized argument fragment in a SOAP 1.1 envelope
///
/// `payload` is inserted verbatim; it is neither escaped nor validated.
pub fn build_envelope(service_uri: &str, action: &str, payload: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0"?>"#,
            r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/" s:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">"#,
            r#"<s:Body>"#,
            r#"<u:{action} xmlns:u="{service_uri}">"#,
            "{payload}",
            r#"</u:{action}>"#,
            r#"</s:Body>"#,
            r#"</s:Envelope>"#,
        ),
        action = action,
        service_uri = service_uri,
        payload = payload
    )
}

/// Parse a SOAP response body and return the `<action>Response` element
///
/// A `Fault` in the body is reported as `SoapError::Fault` carrying the UPnP
/// error code, or 500 when the fault has no code.
pub fn extract_response(body: &str, action: &str) -> Result<Element, SoapError> {
    let xml = Element::parse(body.as_bytes())
        .map_err(|e| SoapError::Parse(e.to_string()))?;

    let body = xml.get_child("Body")
        .ok_or_else(|| SoapError::Parse("Missing SOAP Body".to_string()))?;

    if let Some(fault) = body.get_child("Fault") {
        let error_code = fault
            .get_child("detail")
            .and_then(|d| d.get_child("UPnPError").or_else(|| d.get_child("UpnPError")))
            .and_then(|e| e.get_child("errorCode"))
            .and_then(|c| c.get_text())
            .and_then(|t| t.trim().parse::<u16>().ok())
            .unwrap_or(500);
        return Err(SoapError::Fault(error_code));
    }

    let response_name = format!("{}Response", action);
    body.get_child(response_name.as_str())
        .cloned()
        .ok_or_else(|| SoapError::Parse(format!("Missing {} element", response_name)))
}
