//! Message template listing and template sends.
//!
//! Templates are the only way to start an outbound conversation. A send
//! goes to one number, to a list of receivers (a broadcast), or to the
//! numbers referenced by a CSV value.

use crate::wati::api_client::{ApiRequest, RequestBody, WatiApiClient};
use crate::wati::error::WatiResult;
use crate::wati::types::*;
use log::debug;

const GET_MESSAGE_TEMPLATES: &str = "/api/v1/getMessageTemplates";
const SEND_TEMPLATE_MESSAGE: &str = "/api/v1/sendTemplateMessage";
const SEND_TEMPLATE_MESSAGES: &str = "/api/v1/sendTemplateMessages";
const SEND_TEMPLATE_MESSAGE_CSV: &str = "/api/v1/sendTemplateMessageCSV";

/// Template operations.
pub struct WatiTemplates<'a> {
    client: &'a WatiApiClient,
}

impl<'a> WatiTemplates<'a> {
    pub fn new(client: &'a WatiApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/getMessageTemplates`.
    pub async fn get_message_templates(&self, page: PageOptions) -> WatiResult<WatiResponse> {
        self.client
            .execute(ApiRequest::get(GET_MESSAGE_TEMPLATES).params(page.to_query()))
            .await
    }

    /// Send one template message; the recipient goes in the query string.
    pub async fn send_template_message(
        &self,
        whatsapp_number: &str,
        template_name: &str,
        broadcast_name: &str,
        parameters: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse> {
        let payload = SendTemplateMessageRequest {
            template_name: template_name.to_string(),
            broadcast_name: broadcast_name.to_string(),
            parameters,
        };
        debug!("Sending template {} to {}", template_name, whatsapp_number);
        self.client
            .execute(
                ApiRequest::post(SEND_TEMPLATE_MESSAGE)
                    .param("whatsappNumber", whatsapp_number)
                    .body(RequestBody::json(&payload)?),
            )
            .await
    }

    /// Broadcast a template to several receivers, each with its own params.
    pub async fn send_template_messages(
        &self,
        template_name: &str,
        broadcast_name: &str,
        receivers: Vec<TemplateReceiver>,
    ) -> WatiResult<WatiResponse> {
        let payload = SendTemplateMessagesRequest {
            template_name: template_name.to_string(),
            broadcast_name: broadcast_name.to_string(),
            receivers,
        };
        debug!(
            "Broadcasting template {} as {} to {} receiver(s)",
            template_name,
            broadcast_name,
            payload.receivers.len()
        );
        self.client
            .execute(ApiRequest::post(SEND_TEMPLATE_MESSAGES).body(RequestBody::json(&payload)?))
            .await
    }

    /// Broadcast a template to the numbers referenced by `whatsapp_numbers_csv`.
    pub async fn send_template_message_csv(
        &self,
        template_name: &str,
        broadcast_name: &str,
        whatsapp_numbers_csv: &str,
    ) -> WatiResult<WatiResponse> {
        let payload = SendTemplateMessageCsvRequest {
            whatsapp_numbers_csv: whatsapp_numbers_csv.to_string(),
        };
        self.client
            .execute(
                ApiRequest::post(SEND_TEMPLATE_MESSAGE_CSV)
                    .param("template_name", template_name)
                    .param("broadcast_name", broadcast_name)
                    .body(RequestBody::json(&payload)?),
            )
            .await
    }
}
