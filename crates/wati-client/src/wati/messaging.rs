//! Session messaging via the WATI API.
//!
//! Session messages are freeform and only deliverable inside an open
//! customer-initiated conversation window. Covers message history, plain
//! text, and file uploads.

use crate::wati::api_client::{ApiRequest, RequestBody, WatiApiClient};
use crate::wati::error::WatiResult;
use crate::wati::types::*;
use log::{debug, info};
use reqwest::multipart;
use std::path::Path;

const GET_MESSAGES: &str = "/api/v1/getMessages";
const SEND_SESSION_MESSAGE: &str = "/api/v1/sendSessionMessage";
const SEND_SESSION_FILE: &str = "/api/v1/sendSessionFile";

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Filename used when a path has no final component (e.g. `/` or `..`).
pub const FALLBACK_FILE_NAME: &str = "upload";

/// Session message sender backed by the WATI HTTP client.
pub struct WatiMessaging<'a> {
    client: &'a WatiApiClient,
}

impl<'a> WatiMessaging<'a> {
    pub fn new(client: &'a WatiApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/getMessages/{number}`.
    pub async fn get_messages(
        &self,
        whatsapp_number: &str,
        page: PageOptions,
    ) -> WatiResult<WatiResponse> {
        self.client
            .execute(
                ApiRequest::get(GET_MESSAGES)
                    .segment(whatsapp_number)
                    .params(page.to_query()),
            )
            .await
    }

    /// `POST /api/v1/sendSessionMessage/{number}?messageText=...`.
    pub async fn send_session_message(
        &self,
        whatsapp_number: &str,
        message_text: &str,
    ) -> WatiResult<WatiResponse> {
        debug!("Sending session text to {}", whatsapp_number);
        self.client
            .execute(
                ApiRequest::post(SEND_SESSION_MESSAGE)
                    .segment(whatsapp_number)
                    .param("messageText", message_text),
            )
            .await
    }

    /// Upload a local file as a session message.
    ///
    /// The multipart filename is the base name of `file_path`.
    pub async fn send_session_file(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_path: impl AsRef<Path>,
    ) -> WatiResult<WatiResponse> {
        let file_path = file_path.as_ref();
        let data = tokio::fs::read(file_path).await?;
        let file_name = upload_file_name(file_path);

        self.send_session_file_bytes(whatsapp_number, caption, &file_name, data)
            .await
    }

    /// Upload in-memory bytes as a session message.
    pub async fn send_session_file_bytes(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_name: &str,
        data: Vec<u8>,
    ) -> WatiResult<WatiResponse> {
        info!(
            "Uploading {} ({} bytes) to {}",
            file_name,
            data.len(),
            whatsapp_number
        );
        let part = multipart::Part::bytes(data).file_name(file_name.to_string());
        self.send_file_part(whatsapp_number, caption, part).await
    }

    /// Upload from a file the caller already opened.
    ///
    /// The file is streamed from its current position rather than read
    /// into memory; `file_name` is what the server sees.
    pub async fn send_session_file_handle(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_name: &str,
        file: tokio::fs::File,
    ) -> WatiResult<WatiResponse> {
        let len = file.metadata().await?.len();
        info!(
            "Streaming {} ({} bytes) to {}",
            file_name, len, whatsapp_number
        );
        let part = multipart::Part::stream(reqwest::Body::from(file))
            .file_name(file_name.to_string());
        self.send_file_part(whatsapp_number, caption, part).await
    }

    async fn send_file_part(
        &self,
        whatsapp_number: &str,
        caption: &str,
        part: multipart::Part,
    ) -> WatiResult<WatiResponse> {
        let form = multipart::Form::new().part(FILE_FIELD, part);
        self.client
            .execute(
                ApiRequest::post(SEND_SESSION_FILE)
                    .segment(whatsapp_number)
                    .param("caption", caption)
                    .body(RequestBody::Multipart(form)),
            )
            .await
    }
}

/// Base name of `path` for the multipart filename. Non-UTF-8 bytes are
/// replaced with U+FFFD rather than dropping the whole name.
pub fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_file_name_is_base_name() {
        assert_eq!(upload_file_name(Path::new("/tmp/dir/report.pdf")), "report.pdf");
        assert_eq!(upload_file_name(Path::new("photo.jpg")), "photo.jpg");
    }

    #[test]
    fn test_upload_file_name_without_final_component() {
        assert_eq!(upload_file_name(Path::new("/")), FALLBACK_FILE_NAME);
        assert_eq!(upload_file_name(Path::new("dir/..")), FALLBACK_FILE_NAME);
    }

    #[cfg(unix)]
    #[test]
    fn test_upload_file_name_keeps_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("/tmp").join(OsStr::from_bytes(b"rep\xffort.txt"));
        let name = upload_file_name(&path);
        assert_eq!(name, "rep\u{FFFD}ort.txt");
        assert_ne!(name, FALLBACK_FILE_NAME);
    }
}
