//! API token rotation.
//!
//! Rotation happens on the WATI side only. The reply is returned as-is and
//! the client keeps using its current token until the caller installs the
//! new one with `set_access_token`.

use crate::wati::api_client::{ApiRequest, WatiApiClient};
use crate::wati::error::WatiResult;
use crate::wati::types::WatiResponse;
use log::info;

const ROTATE_TOKEN: &str = "/api/v1/rotateToken";

/// Token management against the WATI tenant.
pub struct WatiAuth<'a> {
    client: &'a WatiApiClient,
}

impl<'a> WatiAuth<'a> {
    pub fn new(client: &'a WatiApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/v1/rotateToken?token=...`.
    ///
    /// Does not change the token this client sends.
    pub async fn rotate_token(&self, token: &str) -> WatiResult<WatiResponse> {
        info!("Requesting token rotation");
        self.client
            .execute(ApiRequest::post(ROTATE_TOKEN).param("token", token))
            .await
    }
}
