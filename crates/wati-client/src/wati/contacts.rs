//! WATI contact management.
//!
//! List contacts, add a contact with custom attributes, and update the
//! attributes of an existing contact.

use crate::wati::api_client::{ApiRequest, RequestBody, WatiApiClient};
use crate::wati::error::WatiResult;
use crate::wati::types::*;
use log::debug;

const GET_CONTACTS: &str = "/api/v1/getContacts";
const ADD_CONTACT: &str = "/api/v1/addContact";
const UPDATE_CONTACT_ATTRIBUTES: &str = "/api/v1/updateContactAttributes";

/// Contacts-related API operations.
pub struct WatiContacts<'a> {
    client: &'a WatiApiClient,
}

impl<'a> WatiContacts<'a> {
    pub fn new(client: &'a WatiApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/getContacts`.
    pub async fn get_contacts(&self, page: PageOptions) -> WatiResult<WatiResponse> {
        self.client
            .execute(ApiRequest::get(GET_CONTACTS).params(page.to_query()))
            .await
    }

    /// `POST /api/v1/addContact/{number}` with name and custom attributes.
    pub async fn add_contact(
        &self,
        whatsapp_number: &str,
        name: &str,
        params: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse> {
        let payload = AddContactRequest {
            name: name.to_string(),
            custom_params: params,
        };
        debug!("Adding contact {}", whatsapp_number);
        self.client
            .execute(
                ApiRequest::post(ADD_CONTACT)
                    .segment(whatsapp_number)
                    .body(RequestBody::json(&payload)?),
            )
            .await
    }

    /// `POST /api/v1/updateContactAttributes/{number}`.
    pub async fn update_contact_attributes(
        &self,
        whatsapp_number: &str,
        params: Vec<CustomParam>,
    ) -> WatiResult<WatiResponse> {
        let payload = UpdateContactAttributesRequest {
            custom_params: params,
        };
        debug!("Updating {} attribute(s) of {}", payload.custom_params.len(), whatsapp_number);
        self.client
            .execute(
                ApiRequest::post(UPDATE_CONTACT_ATTRIBUTES)
                    .segment(whatsapp_number)
                    .body(RequestBody::json(&payload)?),
            )
            .await
    }
}
