//! # wati-client: WATI WhatsApp API integration
//!
//! Thin async client for the WATI REST API (`/api/v1/*`). Every call maps
//! typed parameters onto one fixed endpoint, sends it with bearer
//! authentication, and hands the raw response back untouched.
//!
//! ## Capabilities
//!
//! - **Contacts** – list contacts, add a contact, update custom attributes.
//! - **Messaging** – message history, session text and session files.
//! - **Templates** – list templates, send single, broadcast, and CSV sends.
//! - **Interactive** – buttons and list messages.
//! - **Media** – fetch a media file by name.
//! - **Operators** – assign a human operator to a conversation.
//! - **Auth** – rotate the API token.
//!
//! Responses are never interpreted: a 4xx/5xx reply is returned as a
//! normal [`WatiResponse`] and the caller decides what it means.

pub mod types;
pub mod error;
pub mod api_client;
pub mod auth;
pub mod contacts;
pub mod messaging;
pub mod templates;
pub mod interactive;
pub mod media;
pub mod operators;
pub mod service;

// Re-exports
pub use api_client::WatiApiClient;
pub use error::{WatiError, WatiErrorCode, WatiResult};
pub use service::{WatiApi, WatiClient};
pub use types::*;
