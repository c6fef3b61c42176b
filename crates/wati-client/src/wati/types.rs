//! Shared types for the WATI API integration.
//!
//! Models cover client configuration, the raw response envelope, and the
//! JSON request bodies accepted by the `/api/v1/*` endpoints. Field names
//! follow the wire format exactly (`customParams`, `template_name`, ...).

use crate::wati::error::{WatiError, WatiResult};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
//  Configuration
// ═══════════════════════════════════════════════════════════════════════

/// Environment variable holding the tenant API endpoint.
pub const ENV_API_ENDPOINT: &str = "WATI_API_ENDPOINT";
/// Environment variable holding the bearer token.
pub const ENV_ACCESS_TOKEN: &str = "WATI_ACCESS_TOKEN";
/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT_SEC: &str = "WATI_TIMEOUT_SEC";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SEC: u64 = 10;

/// Connection settings for a WATI tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatiConfig {
    /// Tenant API endpoint, e.g. `https://live-server-1234.wati.io`.
    pub base_url: String,
    /// Bearer token issued in the WATI dashboard.
    pub access_token: String,
    /// Timeout in seconds applied to every request.
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SEC
}

impl WatiConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout_sec: DEFAULT_TIMEOUT_SEC,
        }
    }

    /// Read `WATI_API_ENDPOINT`, `WATI_ACCESS_TOKEN` and the optional
    /// `WATI_TIMEOUT_SEC` from the process environment.
    pub fn from_env() -> WatiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> WatiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_ENDPOINT)
            .ok_or_else(|| WatiError::config(format!("{} is not set", ENV_API_ENDPOINT)))?;
        let access_token = lookup(ENV_ACCESS_TOKEN)
            .ok_or_else(|| WatiError::config(format!("{} is not set", ENV_ACCESS_TOKEN)))?;
        let timeout_sec = match lookup(ENV_TIMEOUT_SEC) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                WatiError::config(format!("{} must be a number of seconds: {}", ENV_TIMEOUT_SEC, e))
            })?,
            None => DEFAULT_TIMEOUT_SEC,
        };
        Ok(Self {
            base_url,
            access_token,
            timeout_sec,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Request parameters
// ═══════════════════════════════════════════════════════════════════════

/// Optional paging for list endpoints (`pageSize` / `pageNumber`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOptions {
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl PageOptions {
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size: Some(page_size),
            page_number: Some(page_number),
        }
    }

    /// Query pairs for the fields that are set, in wire order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Some(size) = self.page_size {
            out.push(("pageSize".to_string(), size.to_string()));
        }
        if let Some(number) = self.page_number {
            out.push(("pageNumber".to_string(), number.to_string()));
        }
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Response envelope
// ═══════════════════════════════════════════════════════════════════════

/// Raw reply from WATI. The body is passed through byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatiResponse {
    pub status: u16,
    pub body: Bytes,
}

impl WatiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Lossy UTF-8 view of the body, handy for logging.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON. The client never calls this itself.
    pub fn json<T: DeserializeOwned>(&self) -> WatiResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Contacts
// ═══════════════════════════════════════════════════════════════════════

/// Name/value attribute pair (contact attributes, template parameters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomParam {
    pub name: String,
    pub value: String,
}

impl CustomParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Body of `POST /api/v1/addContact/{number}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddContactRequest {
    pub name: String,
    pub custom_params: Vec<CustomParam>,
}

/// Body of `POST /api/v1/updateContactAttributes/{number}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactAttributesRequest {
    pub custom_params: Vec<CustomParam>,
}

// ═══════════════════════════════════════════════════════════════════════
//  Templates
// ═══════════════════════════════════════════════════════════════════════

/// Body of `POST /api/v1/sendTemplateMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTemplateMessageRequest {
    pub template_name: String,
    pub broadcast_name: String,
    #[serde(default)]
    pub parameters: Vec<CustomParam>,
}

/// One recipient of a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateReceiver {
    pub whatsapp_number: String,
    #[serde(default)]
    pub custom_params: Vec<CustomParam>,
}

impl TemplateReceiver {
    pub fn new(whatsapp_number: impl Into<String>, custom_params: Vec<CustomParam>) -> Self {
        Self {
            whatsapp_number: whatsapp_number.into(),
            custom_params,
        }
    }
}

/// Body of `POST /api/v1/sendTemplateMessages` (broadcast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTemplateMessagesRequest {
    pub template_name: String,
    pub broadcast_name: String,
    pub receivers: Vec<TemplateReceiver>,
}

/// Body of `POST /api/v1/sendTemplateMessageCSV`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTemplateMessageCsvRequest {
    pub whatsapp_numbers_csv: String,
}

// ═══════════════════════════════════════════════════════════════════════
//  Interactive messages
// ═══════════════════════════════════════════════════════════════════════

/// Media attached to an interactive header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveMedia {
    pub url: String,
    pub file_name: String,
}

/// Header of an interactive buttons message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveHeader {
    /// `Text`, `Image`, `Video` or `Document`.
    #[serde(rename = "type")]
    pub header_type: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<InteractiveMedia>,
}

impl InteractiveHeader {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            header_type: "Text".to_string(),
            text: text.into(),
            media: None,
        }
    }

    pub fn media(header_type: impl Into<String>, media: InteractiveMedia) -> Self {
        Self {
            header_type: header_type.into(),
            text: String::new(),
            media: Some(media),
        }
    }
}

/// Quick-reply button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveButton {
    pub text: String,
}

impl InteractiveButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Body of `POST /api/v1/sendInteractiveButtonsMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveButtonsMessage {
    pub header: InteractiveHeader,
    pub body: String,
    pub footer: String,
    pub buttons: Vec<InteractiveButton>,
}

/// A selectable row inside a list section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ListRow {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

/// Body of `POST /api/v1/sendInteractiveListMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveListMessage {
    pub header: String,
    pub body: String,
    pub footer: String,
    pub button_text: String,
    pub sections: Vec<ListSection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_add_contact_wire_shape() {
        let req = AddContactRequest {
            name: "Jane".into(),
            custom_params: vec![CustomParam::new("city", "NYC")],
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"Jane","customParams":[{"name":"city","value":"NYC"}]}"#
        );
    }

    #[test]
    fn test_template_message_field_names() {
        let req = SendTemplateMessageRequest {
            template_name: "welcome_template".into(),
            broadcast_name: "bcast1".into(),
            parameters: vec![],
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["template_name"], "welcome_template");
        assert_eq!(v["broadcast_name"], "bcast1");
        assert_eq!(v["parameters"], json!([]));

        let back: SendTemplateMessageRequest = serde_json::from_value(v).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_receiver_camel_case() {
        let r = TemplateReceiver::new("91999999999", vec![CustomParam::new("name", "Jane")]);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["whatsappNumber"], "91999999999");
        assert_eq!(v["customParams"][0]["value"], "Jane");
    }

    #[test]
    fn test_text_header_omits_media() {
        let h = InteractiveHeader::text("Pick one");
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v, json!({"type": "Text", "text": "Pick one"}));
    }

    #[test]
    fn test_media_header() {
        let h = InteractiveHeader::media(
            "Image",
            InteractiveMedia {
                url: "https://cdn.example.com/a.png".into(),
                file_name: "a.png".into(),
            },
        );
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["media"]["fileName"], "a.png");
        assert_eq!(v["type"], "Image");
    }

    #[test]
    fn test_list_message_button_text() {
        let msg = InteractiveListMessage {
            header: "Menu".into(),
            body: "Choose".into(),
            footer: "".into(),
            button_text: "Open".into(),
            sections: vec![ListSection {
                title: "Drinks".into(),
                rows: vec![ListRow::new("Tea", "hot"), ListRow::new("Juice", "cold")],
            }],
        };
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["buttonText"], "Open");
        assert_eq!(v["sections"][0]["rows"][1]["title"], "Juice");
    }

    #[test]
    fn test_page_options_query() {
        assert!(PageOptions::default().to_query().is_empty());
        let q = PageOptions::new(50, 2).to_query();
        assert_eq!(
            q,
            vec![
                ("pageSize".to_string(), "50".to_string()),
                ("pageNumber".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_config_default_timeout() {
        let cfg: WatiConfig = serde_json::from_value(json!({
            "baseUrl": "https://live.wati.io",
            "accessToken": "tok",
        }))
        .unwrap();
        assert_eq!(cfg.timeout_sec, DEFAULT_TIMEOUT_SEC);
    }

    #[test]
    fn test_config_from_lookup() {
        let mut env = HashMap::new();
        env.insert(ENV_API_ENDPOINT, "https://live.wati.io");
        env.insert(ENV_ACCESS_TOKEN, "tok");
        env.insert(ENV_TIMEOUT_SEC, "25");
        let cfg = WatiConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.base_url, "https://live.wati.io");
        assert_eq!(cfg.timeout_sec, 25);
    }

    #[test]
    fn test_config_from_lookup_missing_token() {
        let err = WatiConfig::from_lookup(|k| {
            (k == ENV_API_ENDPOINT).then(|| "https://live.wati.io".to_string())
        })
        .unwrap_err();
        assert_eq!(err.code, crate::wati::error::WatiErrorCode::Config);
        assert!(err.message.contains(ENV_ACCESS_TOKEN));
    }

    #[test]
    fn test_response_passthrough() {
        let resp = WatiResponse {
            status: 401,
            body: Bytes::from_static(br#"{"error":"invalid token"}"#),
        };
        assert!(!resp.is_success());
        assert_eq!(resp.as_bytes(), br#"{"error":"invalid token"}"#);
        let v: serde_json::Value = resp.json().unwrap();
        assert_eq!(v["error"], "invalid token");
    }
}
