//! Interactive messages: quick-reply buttons and selectable lists.

use crate::wati::api_client::{ApiRequest, RequestBody, WatiApiClient};
use crate::wati::error::WatiResult;
use crate::wati::types::*;
use log::debug;

const SEND_INTERACTIVE_BUTTONS: &str = "/api/v1/sendInteractiveButtonsMessage";
const SEND_INTERACTIVE_LIST: &str = "/api/v1/sendInteractiveListMessage";

/// Buttons and list messages sent into an open session.
pub struct WatiInteractive<'a> {
    client: &'a WatiApiClient,
}

impl<'a> WatiInteractive<'a> {
    pub fn new(client: &'a WatiApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/v1/sendInteractiveButtonsMessage?whatsappNumber=...`.
    ///
    /// The message content goes in the JSON body.
    pub async fn send_buttons_message(
        &self,
        whatsapp_number: &str,
        header: InteractiveHeader,
        body: &str,
        footer: &str,
        buttons: Vec<InteractiveButton>,
    ) -> WatiResult<WatiResponse> {
        let payload = InteractiveButtonsMessage {
            header,
            body: body.to_string(),
            footer: footer.to_string(),
            buttons,
        };
        debug!("Sending {} button(s) to {}", payload.buttons.len(), whatsapp_number);
        self.client
            .execute(
                ApiRequest::post(SEND_INTERACTIVE_BUTTONS)
                    .param("whatsappNumber", whatsapp_number)
                    .body(RequestBody::json(&payload)?),
            )
            .await
    }

    /// `POST /api/v1/sendInteractiveListMessage?whatsappNumber=...`.
    ///
    /// `button_text` labels the button that opens the list.
    pub async fn send_list_message(
        &self,
        whatsapp_number: &str,
        header: &str,
        body: &str,
        footer: &str,
        button_text: &str,
        sections: Vec<ListSection>,
    ) -> WatiResult<WatiResponse> {
        let payload = InteractiveListMessage {
            header: header.to_string(),
            body: body.to_string(),
            footer: footer.to_string(),
            button_text: button_text.to_string(),
            sections,
        };
        debug!("Sending list with {} section(s) to {}", payload.sections.len(), whatsapp_number);
        self.client
            .execute(
                ApiRequest::post(SEND_INTERACTIVE_LIST)
                    .param("whatsappNumber", whatsapp_number)
                    .body(RequestBody::json(&payload)?),
            )
            .await
    }
}
