//
//  alfresco-client
//  api/auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication API: ticket creation, validation and deletion.
//!
//! A ticket is a session token issued for a username and password. Once
//! issued it is attached to requests as an
//! [`AuthCredential::Ticket`](crate::auth::AuthCredential::Ticket).
//!
//! # Example
//!
//! ```rust,no_run
//! use alfresco_client::api::auth::{AuthApi, TicketBody};
//! use alfresco_client::api::client::ClientConfig;
//! use alfresco_client::api::{AlfrescoClient, ApiKind};
//!
//! # fn example() -> Result<(), alfresco_client::api::ApiError> {
//! let base = format!("http://localhost:8080{}", ApiKind::Auth.default_base_path());
//! let auth = AuthApi::new(AlfrescoClient::new(ClientConfig::new(base))?);
//!
//! let ticket = auth.create_ticket(TicketBody::new("admin", "admin")?).send_blocking()?;
//! if let Some(ticket) = ticket {
//!     println!("ticket: {}", ticket.entry.id);
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::AlfrescoClient;
use super::common::{ApiError, Entry};
use super::operation::{decode_empty, decode_json, Call, Endpoint, Outcome};
use super::request::RequestSpec;

/// Credentials posted to `/tickets`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketBody {
    pub user_id: String,

    pub password: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl TicketBody {
    /// Creates a ticket request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the user id is blank.
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Result<Self, ApiError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(ApiError::Validation("userId must not be empty".to_string()));
        }
        Ok(Self {
            user_id,
            password: password.into(),
            additional_fields: Map::new(),
        })
    }
}

/// An issued ticket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// The ticket string (e.g. `TICKET_8c4a...`).
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Result of validating the current ticket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidTicket {
    /// The user the ticket belongs to.
    pub id: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type TicketEntry = Entry<Ticket>;
pub type ValidTicketEntry = Entry<ValidTicket>;

/// `POST /tickets`
#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub body: TicketBody,
}

impl Endpoint for CreateTicket {
    type Output = TicketEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (403, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/tickets").json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /tickets/-me-`
#[derive(Debug, Clone, Default)]
pub struct ValidateTicket;

impl Endpoint for ValidateTicket {
    type Output = ValidTicketEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/tickets/-me-"))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `DELETE /tickets/-me-`
#[derive(Debug, Clone, Default)]
pub struct DeleteTicket;

impl Endpoint for DeleteTicket {
    type Output = ();
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (204, Outcome::Parsed),
        (400, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::DELETE, "/tickets/-me-"))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_empty(content)
    }
}

/// Façade over the authentication API.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: AlfrescoClient,
}

impl AuthApi {
    pub fn new(client: AlfrescoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AlfrescoClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut AlfrescoClient {
        &mut self.client
    }

    /// Issues a ticket for the given credentials.
    pub fn create_ticket(&self, body: TicketBody) -> Call<'_, CreateTicket> {
        Call::new(&self.client, CreateTicket { body })
    }

    /// Checks that the ticket this client sends is still valid.
    pub fn validate_ticket(&self) -> Call<'_, ValidateTicket> {
        Call::new(&self.client, ValidateTicket)
    }

    /// Invalidates the ticket this client sends.
    pub fn delete_ticket(&self) -> Call<'_, DeleteTicket> {
        Call::new(&self.client, DeleteTicket)
    }
}
