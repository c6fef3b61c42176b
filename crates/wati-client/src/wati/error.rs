//! Crate-level error types for the WATI client.
//!
//! Only transport-side failures are errors. An HTTP 4xx/5xx reply from
//! WATI is a successful call whose body the caller has to inspect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alias for `Result<T, WatiError>`.
pub type WatiResult<T> = Result<T, WatiError>;

/// Uniform error type used across the WATI crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatiError {
    pub code: WatiErrorCode,
    pub message: String,
}

impl fmt::Display for WatiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for WatiError {}

/// Categorised error codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatiErrorCode {
    // ── Request construction ─────────────────────────────
    InvalidRequest,
    SerializationError,
    FileError,
    // ── Transport ────────────────────────────────────────
    NetworkError,
    Timeout,
    BodyReadError,
    // ── Setup ────────────────────────────────────────────
    Config,
}

impl WatiError {
    pub fn new(code: WatiErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            message: msg.into(),
        }
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(WatiErrorCode::InvalidRequest, msg)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(WatiErrorCode::NetworkError, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(WatiErrorCode::Timeout, msg)
    }

    pub fn body_read(msg: impl Into<String>) -> Self {
        Self::new(WatiErrorCode::BodyReadError, msg)
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::new(WatiErrorCode::SerializationError, msg)
    }

    pub fn file(msg: impl Into<String>) -> Self {
        Self::new(WatiErrorCode::FileError, msg)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::new(WatiErrorCode::Config, msg)
    }

    /// True for failures that happened on the wire rather than while
    /// building the request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.code,
            WatiErrorCode::NetworkError | WatiErrorCode::Timeout | WatiErrorCode::BodyReadError
        )
    }
}

impl From<reqwest::Error> for WatiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::timeout(format!("Request timed out: {}", e))
        } else if e.is_builder() {
            Self::invalid_request(format!("Invalid request: {}", e))
        } else if e.is_body() || e.is_decode() {
            Self::body_read(format!("Failed to read response body: {}", e))
        } else if e.is_connect() {
            Self::network(format!("Connection failed: {}", e))
        } else {
            Self::network(format!("HTTP error: {}", e))
        }
    }
}

impl From<serde_json::Error> for WatiError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", e))
    }
}

impl From<std::io::Error> for WatiError {
    fn from(e: std::io::Error) -> Self {
        Self::file(format!("Read file error: {}", e))
    }
}

impl From<url::ParseError> for WatiError {
    fn from(e: url::ParseError) -> Self {
        Self::invalid_request(format!("Invalid URL: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WatiError::invalid_request("relative URL without a base");
        assert_eq!(
            err.to_string(),
            "[InvalidRequest] relative URL without a base"
        );
    }

    #[test]
    fn test_from_url_parse_error() {
        let err: WatiError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.code, WatiErrorCode::InvalidRequest);
        assert!(!err.is_transport());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.pdf");
        let err: WatiError = io.into();
        assert_eq!(err.code, WatiErrorCode::FileError);
        assert!(err.message.contains("missing.pdf"));
    }

    #[test]
    fn test_transport_codes() {
        assert!(WatiError::network("refused").is_transport());
        assert!(WatiError::timeout("10s").is_transport());
        assert!(WatiError::body_read("eof").is_transport());
        assert!(!WatiError::serialization("bad").is_transport());
    }

    #[test]
    fn test_code_wire_name() {
        let json = serde_json::to_string(&WatiErrorCode::BodyReadError).unwrap();
        assert_eq!(json, "\"BODY_READ_ERROR\"");
    }
}
