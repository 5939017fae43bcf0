//
//  alfresco-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials understood by Alfresco Content Services and the way each one is
//! attached to an outgoing request.
//!
//! ## Supported Authentication Methods
//!
//! - **Basic**: username and password on every request.
//! - **Ticket**: a server-issued ticket obtained from the authentication API
//!   (`POST /tickets`), sent as a Basic header, a custom header or the
//!   `alf_ticket` query parameter.
//! - **Bearer**: an access token from an identity provider.
//!
//! ## Example
//!
//! ```rust
//! use alfresco_client::auth::{AuthCredential, TicketTransport};
//!
//! let basic = AuthCredential::basic("admin", "admin");
//! assert_eq!(basic.header_value().as_deref(), Some("Basic YWRtaW46YWRtaW4="));
//!
//! let ticket = AuthCredential::ticket("TICKET_abc123");
//! assert!(matches!(ticket, AuthCredential::Ticket { transport: TicketTransport::BasicHeader, .. }));
//! ```
//!
//! Tickets are never refreshed or tracked for expiry; a rejected ticket shows
//! up as a 401 on the next call.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderName, HeaderValue};

use crate::api::client::PreparedRequest;
use crate::api::common::ApiError;

/// Name of the query parameter Alfresco reads tickets from.
pub const TICKET_QUERY_PARAMETER: &str = "alf_ticket";

/// How a ticket travels with each request.
///
/// # Variants
///
/// - `BasicHeader`: `Authorization: Basic base64(ticket)`, the form the
///   public REST API documents.
/// - `Header(name)`: the raw ticket in a custom header, for proxies that
///   translate it.
/// - `QueryParameter`: `?alf_ticket=<ticket>` appended to the URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TicketTransport {
    #[default]
    BasicHeader,
    Header(String),
    QueryParameter,
}

/// Credentials attached to requests by an [`AlfrescoClient`](crate::api::AlfrescoClient).
///
/// # Example
///
/// ```rust
/// use alfresco_client::auth::{AuthCredential, TicketTransport};
///
/// let credential = AuthCredential::Ticket {
///     ticket: "TICKET_abc123".to_string(),
///     transport: TicketTransport::Header("X-Alfresco-Ticket".to_string()),
/// };
/// assert_eq!(credential.header_value().as_deref(), Some("TICKET_abc123"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// Basic HTTP authentication with username and password.
    Basic {
        /// The username for authentication.
        username: String,
        /// The password for authentication.
        password: String,
    },
    /// A ticket issued by the authentication API.
    Ticket {
        /// The ticket string (e.g. `TICKET_8c4a...`).
        ticket: String,
        /// Where the ticket is placed on each request.
        transport: TicketTransport,
    },
    /// Bearer token authentication.
    Bearer {
        /// The access token.
        token: String,
    },
}

impl AuthCredential {
    /// Creates Basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a ticket credential sent as a Basic header.
    pub fn ticket(ticket: impl Into<String>) -> Self {
        Self::Ticket {
            ticket: ticket.into(),
            transport: TicketTransport::BasicHeader,
        }
    }

    /// Creates a bearer token credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer { token: token.into() }
    }

    /// Returns the ticket, if this is a ticket credential.
    pub fn ticket_id(&self) -> Option<&str> {
        match self {
            Self::Ticket { ticket, .. } => Some(ticket.as_str()),
            _ => None,
        }
    }

    /// Returns the header name this credential writes, if it uses a header.
    pub fn header_name(&self) -> Option<&str> {
        match self {
            Self::Ticket {
                transport: TicketTransport::Header(name),
                ..
            } => Some(name.as_str()),
            Self::Ticket {
                transport: TicketTransport::QueryParameter,
                ..
            } => None,
            _ => Some("authorization"),
        }
    }

    /// Returns the header value this credential writes, if it uses a header.
    ///
    /// # Returns
    ///
    /// - Basic: `Basic base64(username:password)`
    /// - Ticket (Basic header): `Basic base64(ticket)`
    /// - Ticket (custom header): the raw ticket
    /// - Ticket (query parameter): `None`
    /// - Bearer: `Bearer <token>`
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Basic { username, password } => {
                Some(format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password))))
            }
            Self::Ticket {
                ticket,
                transport: TicketTransport::BasicHeader,
            } => Some(format!("Basic {}", STANDARD.encode(ticket))),
            Self::Ticket {
                ticket,
                transport: TicketTransport::Header(_),
            } => Some(ticket.clone()),
            Self::Ticket {
                transport: TicketTransport::QueryParameter,
                ..
            } => None,
            Self::Bearer { token } => Some(format!("Bearer {}", token)),
        }
    }

    /// Applies the credential to a prepared request.
    ///
    /// Header credentials replace any existing header of the same name;
    /// query-parameter tickets are appended to the URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHeader`] if the credential contains bytes
    /// that are not valid in a header.
    pub fn apply(&self, request: &mut PreparedRequest) -> Result<(), ApiError> {
        if let Self::Ticket {
            ticket,
            transport: TicketTransport::QueryParameter,
        } = self
        {
            request
                .url
                .query_pairs_mut()
                .append_pair(TICKET_QUERY_PARAMETER, ticket);
            return Ok(());
        }

        if let (Some(name), Some(value)) = (self.header_name(), self.header_value()) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            let mut value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            value.set_sensitive(true);
            request.headers.insert(name, value);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, AUTHORIZATION};
    use reqwest::Method;
    use url::Url;

    fn prepared() -> PreparedRequest {
        PreparedRequest {
            method: Method::GET,
            url: Url::parse("http://localhost:8080/alfresco/api/discovery").unwrap(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[test]
    fn test_basic_header() {
        let mut request = prepared();
        AuthCredential::basic("admin", "admin").apply(&mut request).unwrap();
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Basic YWRtaW46YWRtaW4=");
    }

    #[test]
    fn test_ticket_basic_header() {
        let mut request = prepared();
        AuthCredential::ticket("TICKET_abc123").apply(&mut request).unwrap();
        let expected = format!("Basic {}", STANDARD.encode("TICKET_abc123"));
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), expected.as_str());
    }

    #[test]
    fn test_ticket_custom_header() {
        let mut request = prepared();
        let credential = AuthCredential::Ticket {
            ticket: "TICKET_abc123".into(),
            transport: TicketTransport::Header("X-Alfresco-Ticket".into()),
        };
        credential.apply(&mut request).unwrap();
        assert_eq!(request.headers.get("x-alfresco-ticket").unwrap(), "TICKET_abc123");
        assert!(request.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_ticket_query_parameter() {
        let mut request = prepared();
        let credential = AuthCredential::Ticket {
            ticket: "TICKET_abc123".into(),
            transport: TicketTransport::QueryParameter,
        };
        credential.apply(&mut request).unwrap();
        assert_eq!(request.url.query(), Some("alf_ticket=TICKET_abc123"));
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_bearer_header() {
        let mut request = prepared();
        AuthCredential::bearer("tok").apply(&mut request).unwrap();
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer tok");
    }

    #[test]
    fn test_invalid_header_value() {
        let mut request = prepared();
        let err = AuthCredential::bearer("bad\ntoken").apply(&mut request).unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader(_)));
    }
}
