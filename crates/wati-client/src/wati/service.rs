//! High-level WATI client facade.
//!
//! `WatiClient` owns one [`WatiApiClient`] and exposes every endpoint
//! through the [`WatiApi`] trait, so application code can depend on the
//! trait and swap in a fake for its own tests.

use crate::wati::api_client::WatiApiClient;
use crate::wati::auth::WatiAuth;
use crate::wati::contacts::WatiContacts;
use crate::wati::error::WatiResult;
use crate::wati::interactive::WatiInteractive;
use crate::wati::media::WatiMedia;
use crate::wati::messaging::WatiMessaging;
use crate::wati::operators::WatiOperators;
use crate::wati::templates::WatiTemplates;
use crate::wati::types::*;
use async_trait::async_trait;
use std::path::Path;

/// One method per WATI endpoint. Every call returns the raw reply.
#[async_trait]
pub trait WatiApi: Send + Sync {
    async fn get_messages(&self, whatsapp_number: &str, page: PageOptions)
        -> WatiResult<WatiResponse>;

    async fn get_message_templates(&self, page: PageOptions) -> WatiResult<WatiResponse>;

    async fn get_contacts(&self, page: PageOptions) -> WatiResult<WatiResponse>;

    async fn get_media(&self, file_name: &str) -> WatiResult<WatiResponse>;

    async fn update_contact_attributes(
        &self,
        whatsapp_number: &str,
        params: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse>;

    async fn rotate_token(&self, token: &str) -> WatiResult<WatiResponse>;

    async fn add_contact(
        &self,
        whatsapp_number: &str,
        name: &str,
        params: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse>;

    async fn send_session_file(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_path: &Path,
    ) -> WatiResult<WatiResponse>;

    async fn send_session_file_bytes(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_name: &str,
        data: Vec<u8>,
    ) -> WatiResult<WatiResponse>;

    /// Stream an already-open file; the caller keeps control of how it
    /// was opened.
    async fn send_session_file_handle(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_name: &str,
        file: tokio::fs::File,
    ) -> WatiResult<WatiResponse>;

    async fn send_session_message(
        &self,
        whatsapp_number: &str,
        message_text: &str,
    ) -> WatiResult<WatiResponse>;

    async fn send_template_message(
        &self,
        whatsapp_number: &str,
        template_name: &str,
        broadcast_name: &str,
        parameters: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse>;

    async fn send_template_messages(
        &self,
        template_name: &str,
        broadcast_name: &str,
        receivers: Vec<TemplateReceiver>,
    ) -> WatiResult<WatiResponse>;

    async fn send_template_message_csv(
        &self,
        template_name: &str,
        broadcast_name: &str,
        whatsapp_numbers_csv: &str,
    ) -> WatiResult<WatiResponse>;

    async fn send_interactive_buttons_message(
        &self,
        whatsapp_number: &str,
        header: InteractiveHeader,
        body: &str,
        footer: &str,
        buttons: Vec<InteractiveButton>,
    ) -> WatiResult<WatiResponse>;

    async fn send_interactive_list_message(
        &self,
        whatsapp_number: &str,
        header: &str,
        body: &str,
        footer: &str,
        button_text: &str,
        sections: Vec<ListSection>,
    ) -> WatiResult<WatiResponse>;

    async fn assign_operator(&self, email: &str, whatsapp_number: &str)
        -> WatiResult<WatiResponse>;
}

/// Client for a single WATI tenant.
#[derive(Debug, Clone)]
pub struct WatiClient {
    api: WatiApiClient,
}

impl WatiClient {
    /// Client with the default 10 second timeout. The base URL is not
    /// checked here; a malformed one fails on the first request.
    pub fn new(base_url: &str, token: &str) -> WatiResult<Self> {
        Ok(Self {
            api: WatiApiClient::new(base_url, token)?,
        })
    }

    pub fn from_config(config: &WatiConfig) -> WatiResult<Self> {
        Ok(Self {
            api: WatiApiClient::from_config(config)?,
        })
    }

    /// Build from `WATI_API_ENDPOINT` / `WATI_ACCESS_TOKEN`.
    pub fn from_env() -> WatiResult<Self> {
        Self::from_config(&WatiConfig::from_env()?)
    }

    /// Install a new bearer token, typically after [`WatiApi::rotate_token`].
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.api.set_access_token(token);
    }

    pub fn api_client(&self) -> &WatiApiClient {
        &self.api
    }

    // ─── Domain accessors ────────────────────────────────────────────

    pub fn contacts(&self) -> WatiContacts<'_> {
        WatiContacts::new(&self.api)
    }

    pub fn messaging(&self) -> WatiMessaging<'_> {
        WatiMessaging::new(&self.api)
    }

    pub fn templates(&self) -> WatiTemplates<'_> {
        WatiTemplates::new(&self.api)
    }

    pub fn interactive(&self) -> WatiInteractive<'_> {
        WatiInteractive::new(&self.api)
    }

    pub fn media(&self) -> WatiMedia<'_> {
        WatiMedia::new(&self.api)
    }

    pub fn operators(&self) -> WatiOperators<'_> {
        WatiOperators::new(&self.api)
    }

    pub fn auth(&self) -> WatiAuth<'_> {
        WatiAuth::new(&self.api)
    }
}

#[async_trait]
impl WatiApi for WatiClient {
    async fn get_messages(
        &self,
        whatsapp_number: &str,
        page: PageOptions,
    ) -> WatiResult<WatiResponse> {
        self.messaging().get_messages(whatsapp_number, page).await
    }

    async fn get_message_templates(&self, page: PageOptions) -> WatiResult<WatiResponse> {
        self.templates().get_message_templates(page).await
    }

    async fn get_contacts(&self, page: PageOptions) -> WatiResult<WatiResponse> {
        self.contacts().get_contacts(page).await
    }

    async fn get_media(&self, file_name: &str) -> WatiResult<WatiResponse> {
        self.media().get_media(file_name).await
    }

    async fn update_contact_attributes(
        &self,
        whatsapp_number: &str,
        params: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse> {
        self.contacts()
            .update_contact_attributes(whatsapp_number, params)
            .await
    }

    async fn rotate_token(&self, token: &str) -> WatiResult<WatiResponse> {
        self.auth().rotate_token(token).await
    }

    async fn add_contact(
        &self,
        whatsapp_number: &str,
        name: &str,
        params: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse> {
        self.contacts().add_contact(whatsapp_number, name, params).await
    }

    async fn send_session_file(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_path: &Path,
    ) -> WatiResult<WatiResponse> {
        self.messaging()
            .send_session_file(whatsapp_number, caption, file_path)
            .await
    }

    async fn send_session_file_bytes(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_name: &str,
        data: Vec<u8>,
    ) -> WatiResult<WatiResponse> {
        self.messaging()
            .send_session_file_bytes(whatsapp_number, caption, file_name, data)
            .await
    }

    async fn send_session_file_handle(
        &self,
        whatsapp_number: &str,
        caption: &str,
        file_name: &str,
        file: tokio::fs::File,
    ) -> WatiResult<WatiResponse> {
        self.messaging()
            .send_session_file_handle(whatsapp_number, caption, file_name, file)
            .await
    }

    async fn send_session_message(
        &self,
        whatsapp_number: &str,
        message_text: &str,
    ) -> WatiResult<WatiResponse> {
        self.messaging()
            .send_session_message(whatsapp_number, message_text)
            .await
    }

    async fn send_template_message(
        &self,
        whatsapp_number: &str,
        template_name: &str,
        broadcast_name: &str,
        parameters: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse> {
        self.templates()
            .send_template_message(whatsapp_number, template_name, broadcast_name, parameters)
            .await
    }

    async fn send_template_messages(
        &self,
        template_name: &str,
        broadcast_name: &str,
        receivers: Vec<TemplateReceiver>,
    ) -> WatiResult<WatiResponse> {
        self.templates()
            .send_template_messages(template_name, broadcast_name, receivers)
            .await
    }

    async fn send_template_message_csv(
        &self,
        template_name: &str,
        broadcast_name: &str,
        whatsapp_numbers_csv: &str,
    ) -> WatiResult<WatiResponse> {
        self.templates()
            .send_template_message_csv(template_name, broadcast_name, whatsapp_numbers_csv)
            .await
    }

    async fn send_interactive_buttons_message(
        &self,
        whatsapp_number: &str,
        header: InteractiveHeader,
        body: &str,
        footer: &str,
        buttons: Vec<InteractiveButton>,
    ) -> WatiResult<WatiResponse> {
        self.interactive()
            .send_buttons_message(whatsapp_number, header, body, footer, buttons)
            .await
    }

    async fn send_interactive_list_message(
        &self,
        whatsapp_number: &str,
        header: &str,
        body: &str,
        footer: &str,
        button_text: &str,
        sections: Vec<ListSection>,
    ) -> WatiResult<WatiResponse> {
        self.interactive()
            .send_list_message(whatsapp_number, header, body, footer, button_text, sections)
            .await
    }

    async fn assign_operator(
        &self,
        email: &str,
        whatsapp_number: &str,
    ) -> WatiResult<WatiResponse> {
        self.operators().assign_operator(email, whatsapp_number).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + Clone>() {}

    #[test]
    fn test_client_is_shareable() {
        assert_send_sync::<WatiClient>();
    }

    #[test]
    fn test_usable_as_trait_object() {
        let client = WatiClient::new("https://live.wati.io", "tok").unwrap();
        let api: std::sync::Arc<dyn WatiApi> = std::sync::Arc::new(client);
        drop(api);
    }

    #[test]
    fn test_set_access_token() {
        let mut client = WatiClient::new("https://live.wati.io", "old").unwrap();
        client.set_access_token("new");
        assert_eq!(client.api_client().access_token(), "new");
    }

    #[test]
    fn test_from_config_timeout() {
        let mut cfg = WatiConfig::new("https://live.wati.io/", "tok");
        cfg.timeout_sec = 3;
        let client = WatiClient::from_config(&cfg).unwrap();
        assert_eq!(client.api_client().base_url(), "https://live.wati.io");
    }
}
