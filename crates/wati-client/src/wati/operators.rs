//! Hand a conversation over to a human operator.

use crate::wati::api_client::{ApiRequest, WatiApiClient};
use crate::wati::error::WatiResult;
use crate::wati::types::WatiResponse;
use log::info;

const ASSIGN_OPERATOR: &str = "/api/v1/assignOperator";

/// Operator assignment.
pub struct WatiOperators<'a> {
    client: &'a WatiApiClient,
}

impl<'a> WatiOperators<'a> {
    pub fn new(client: &'a WatiApiClient) -> Self {
        Self { client }
    }

    /// Assign the operator identified by `email` to the conversation with
    /// `whatsapp_number`.
    ///
    /// `POST /api/v1/assignOperator?email=...&whatsappNumber=...`.
    pub async fn assign_operator(
        &self,
        email: &str,
        whatsapp_number: &str,
    ) -> WatiResult<WatiResponse> {
        info!("Assigning {} to {}", email, whatsapp_number);
        self.client
            .execute(
                ApiRequest::post(ASSIGN_OPERATOR)
                    .param("email", email)
                    .param("whatsappNumber", whatsapp_number),
            )
            .await
    }
}
