//! Media retrieval.
//!
//! WATI serves media previously exchanged in a conversation by file name.
//! The bytes come back exactly as the server sent them.

use crate::wati::api_client::{ApiRequest, WatiApiClient};
use crate::wati::error::WatiResult;
use crate::wati::types::WatiResponse;
use log::debug;

const GET_MEDIA: &str = "/api/v1/getMedia";

/// Media downloads by file name.
pub struct WatiMedia<'a> {
    client: &'a WatiApiClient,
}

impl<'a> WatiMedia<'a> {
    pub fn new(client: &'a WatiApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/getMedia?fileName=...`.
    ///
    /// The body is the raw file content on success, or the server's
    /// error payload otherwise; check `status`.
    pub async fn get_media(&self, file_name: &str) -> WatiResult<WatiResponse> {
        let resp = self
            .client
            .execute(ApiRequest::get(GET_MEDIA).param("fileName", file_name))
            .await?;
        debug!("Fetched media {} ({} bytes)", file_name, resp.body.len());
        Ok(resp)
    }
}
