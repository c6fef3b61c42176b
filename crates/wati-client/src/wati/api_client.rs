//! HTTP client for the WATI REST API.
//!
//! One generic executor handles every endpoint: it builds the URL from the
//! base endpoint, a relative path and query pairs, attaches the bearer
//! token, sends the body, and drains the reply. HTTP status codes are
//! reported but never turned into errors.

use crate::wati::error::{WatiError, WatiResult};
use crate::wati::types::{WatiConfig, WatiResponse, DEFAULT_TIMEOUT_SEC};
use log::{debug, info};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart;
use reqwest::Method;
use std::time::Duration;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Body of an outgoing request.
#[derive(Debug)]
pub enum RequestBody {
    /// No body. Still sent as `application/json`.
    Empty,
    /// Pre-encoded JSON bytes.
    Json(Vec<u8>),
    /// A complete multipart form; reqwest adds the boundary.
    Multipart(multipart::Form),
}

impl RequestBody {
    /// Encode a payload as JSON.
    pub fn json<T: serde::Serialize + ?Sized>(payload: &T) -> WatiResult<Self> {
        Ok(Self::Json(serde_json::to_vec(payload)?))
    }
}

/// Method, path, query and body of a single call.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Appended to `path` one segment each, percent-encoded.
    pub segments: Vec<String>,
    pub params: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            segments: Vec::new(),
            params: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Add a path parameter such as a phone number. `/`, `?` and `#`
    /// inside it are encoded, never treated as URL structure.
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.params.extend(pairs);
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

/// Low-level HTTP client for the WATI API.
#[derive(Debug, Clone)]
pub struct WatiApiClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl WatiApiClient {
    /// Create a client with the default 10 second timeout.
    pub fn new(base_url: &str, token: &str) -> WatiResult<Self> {
        Self::with_timeout(base_url, token, Duration::from_secs(DEFAULT_TIMEOUT_SEC))
    }

    pub fn from_config(config: &WatiConfig) -> WatiResult<Self> {
        Self::with_timeout(
            &config.base_url,
            &config.access_token,
            Duration::from_secs(config.timeout_sec),
        )
    }

    fn with_timeout(base_url: &str, token: &str, timeout: Duration) -> WatiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WatiError::config(format!("HTTP client init failed: {}", e)))?;

        info!("WATI client ready for {} (timeout {:?})", base_url, timeout);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Replace the bearer token (e.g. after a rotation).
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.token
    }

    // ─── URL helpers ─────────────────────────────────────────────────

    /// Build `{base}{path}/{segments..}?{params}`. Segments are
    /// percent-encoded, query values form-encoded.
    pub fn url(
        &self,
        path: &str,
        segments: &[String],
        params: &[(String, String)],
    ) -> WatiResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| WatiError::invalid_request("Base URL cannot take path segments"))?
                .extend(segments);
        }
        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn bearer(&self) -> WatiResult<HeaderValue> {
        HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|e| {
            WatiError::invalid_request(format!("Token is not a valid header value: {}", e))
        })
    }

    // ─── Executor ────────────────────────────────────────────────────

    /// Send a request and return the reply verbatim, whatever its status.
    pub async fn execute(&self, request: ApiRequest) -> WatiResult<WatiResponse> {
        let ApiRequest {
            method,
            path,
            segments,
            params,
            body,
        } = request;

        let url = self.url(&path, &segments, &params)?;
        debug!("{} {}", method, url.path());

        let builder = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.bearer()?);

        let builder = match body {
            RequestBody::Empty => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
            RequestBody::Json(bytes) => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(bytes),
            // `multipart` sets `multipart/form-data; boundary=...` itself.
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        debug!("{} {} -> {} ({} bytes)", method, path, status, body.len());
        Ok(WatiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wati::error::WatiErrorCode;

    fn client() -> WatiApiClient {
        WatiApiClient::new("https://live-server-1234.wati.io/", "test_token").unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client().base_url(), "https://live-server-1234.wati.io");
    }

    #[test]
    fn test_url_with_phone_number() {
        let url = client()
            .url("/api/v1/getMessages", &["91999999999".to_string()], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://live-server-1234.wati.io/api/v1/getMessages/91999999999"
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_url_query_encoding() {
        let params = vec![
            ("messageText".to_string(), "hi there & bye".to_string()),
            ("whatsappNumber".to_string(), "91999999999".to_string()),
        ];
        let url = client()
            .url("/api/v1/sendSessionMessage/1", &[], &params)
            .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, params);
    }

    #[test]
    fn test_malformed_base_url_surfaces_on_use() {
        let c = WatiApiClient::new("not a url", "tok").unwrap();
        let err = c.url("/api/v1/getContacts", &[], &[]).unwrap_err();
        assert_eq!(err.code, WatiErrorCode::InvalidRequest);
    }

    #[test]
    fn test_segment_is_encoded_as_one_path_segment() {
        let url = client()
            .url("/api/v1/addContact", &["12/34?x#y".to_string()], &[])
            .unwrap();
        assert_eq!(url.path(), "/api/v1/addContact/12%2F34%3Fx%23y");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_segment_under_base_path_prefix() {
        let c = WatiApiClient::new("https://live.wati.io/tenant-7/", "tok").unwrap();
        let url = c
            .url("/api/v1/getMessages", &["91999999999".to_string()], &[])
            .unwrap();
        assert_eq!(url.path(), "/tenant-7/api/v1/getMessages/91999999999");
    }

    #[test]
    fn test_bearer_header() {
        let v = client().bearer().unwrap();
        assert_eq!(v.to_str().unwrap(), "Bearer test_token");
    }

    #[test]
    fn test_set_access_token() {
        let mut c = client();
        c.set_access_token("rotated");
        assert_eq!(c.access_token(), "rotated");
        assert_eq!(c.bearer().unwrap().to_str().unwrap(), "Bearer rotated");
    }

    #[test]
    fn test_request_builder() {
        let req = ApiRequest::post("/api/v1/rotateToken").param("token", "abc");
        assert_eq!(req.method, Method::POST);
        assert!(req.segments.is_empty());
        assert_eq!(req.params, vec![("token".to_string(), "abc".to_string())]);
        assert!(matches!(req.body, RequestBody::Empty));
    }

    #[test]
    fn test_json_body_encoding() {
        let body = RequestBody::json(&serde_json::json!({"a": 1})).unwrap();
        match body {
            RequestBody::Json(bytes) => assert_eq!(bytes, br#"{"a":1}"#.to_vec()),
            other => panic!("unexpected body {:?}", other),
        }
    }
}
