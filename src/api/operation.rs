//
//  alfresco-client
//  api/operation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Operations
//!
//! Every REST operation is a small struct implementing [`Endpoint`]: a pure
//! `build_request` and a pure `parse_response` driven by a status table.
//! [`Call`] runs one endpoint in any of four shapes:
//!
//! | Method | Transport | Returns |
//! |--------|-----------|---------|
//! | [`Call::send`] | async | `Option<Output>` |
//! | [`Call::send_detailed`] | async | [`ApiResponse<Output>`] |
//! | [`Call::send_blocking`] | blocking | `Option<Output>` |
//! | [`Call::send_blocking_detailed`] | blocking | [`ApiResponse<Output>`] |
//!
//! All four run the same `build_request` and `parse_response`.
//!
//! ## Status mapping
//!
//! - Statuses listed as [`Outcome::Parsed`] decode the body into `Output`.
//! - Statuses listed as [`Outcome::Known`] are declared errors: `None`.
//! - Any other status follows the client's [`UnexpectedStatusPolicy`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::client::{AlfrescoClient, RawResponse, UnexpectedStatusPolicy};
use super::common::{ApiError, ApiResponse};
use super::request::RequestSpec;

/// What a declared status means for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Decode the body with [`Endpoint::decode`].
    Parsed,
    /// A declared error; the basic variants return `None`.
    Known,
}

/// One REST operation.
///
/// # Example
///
/// ```rust
/// use alfresco_client::api::operation::{decode_json, Endpoint, Outcome};
/// use alfresco_client::api::request::RequestSpec;
/// use alfresco_client::api::ApiError;
/// use reqwest::Method;
///
/// struct Ping;
///
/// impl Endpoint for Ping {
///     type Output = serde_json::Value;
///     const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (503, Outcome::Known)];
///
///     fn build_request(&self) -> Result<RequestSpec, ApiError> {
///         Ok(RequestSpec::new(Method::GET, "/probes/-live-"))
///     }
///
///     fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
///         decode_json(content)
///     }
/// }
/// ```
pub trait Endpoint {
    /// Payload produced by `Parsed` statuses.
    type Output;

    /// Declared statuses of this endpoint.
    const RESPONSES: &'static [(u16, Outcome)];

    /// Builds the request. Pure: no I/O.
    fn build_request(&self) -> Result<RequestSpec, ApiError>;

    /// Decodes the body of a `Parsed` status.
    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error>;

    /// Maps a status and body to the operation result. Pure: no I/O.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Decode`] if a `Parsed` body does not decode
    /// - [`ApiError::UnexpectedStatus`] for undeclared statuses under
    ///   [`UnexpectedStatusPolicy::Raise`]
    fn parse_response(
        status: StatusCode,
        content: &[u8],
        policy: UnexpectedStatusPolicy,
    ) -> Result<Option<Self::Output>, ApiError> {
        let declared = Self::RESPONSES
            .iter()
            .find(|(code, _)| *code == status.as_u16())
            .map(|(_, outcome)| *outcome);

        match declared {
            Some(Outcome::Parsed) => Self::decode(content)
                .map(Some)
                .map_err(|source| ApiError::Decode { status, source }),
            Some(Outcome::Known) => Ok(None),
            None => match policy {
                UnexpectedStatusPolicy::Raise => Err(ApiError::UnexpectedStatus {
                    status,
                    content: content.to_vec(),
                }),
                UnexpectedStatusPolicy::Ignore => {
                    warn!(%status, "Ignoring undeclared response status");
                    Ok(None)
                }
            },
        }
    }
}

/// Decodes a JSON body.
pub fn decode_json<T: DeserializeOwned>(content: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(content)
}

/// Decodes an empty body (204, 202) to unit, ignoring any content.
pub fn decode_empty(_content: &[u8]) -> Result<(), serde_json::Error> {
    Ok(())
}

/// Passes the body through as raw bytes (content streams).
pub fn decode_raw(content: &[u8]) -> Result<Vec<u8>, serde_json::Error> {
    Ok(content.to_vec())
}

/// An endpoint bound to a client, ready to run in one of four shapes.
///
/// Façade methods return a `Call`; nothing is sent until one of the `send*`
/// methods runs.
///
/// # Example
///
/// ```rust,no_run
/// use alfresco_client::Alfresco;
/// use alfresco_client::api::core::GetNodeParams;
///
/// # async fn example() -> Result<(), alfresco_client::api::ApiError> {
/// let alfresco = Alfresco::builder("http://localhost:8080").basic_auth("admin", "admin").build()?;
///
/// // Parsed payload only
/// let node = alfresco.core().get_node("-root-", GetNodeParams::default()).send().await?;
///
/// // Full response
/// let response = alfresco.core().get_node("missing", GetNodeParams::default()).send_detailed().await?;
/// if response.parsed.is_none() {
///     println!("status {}", response.status);
/// }
/// # Ok(())
/// # }
/// ```
#[must_use = "a Call does nothing until one of its send methods runs"]
pub struct Call<'c, E> {
    client: &'c AlfrescoClient,
    endpoint: E,
}

impl<'c, E: Endpoint> Call<'c, E> {
    pub fn new(client: &'c AlfrescoClient, endpoint: E) -> Self {
        Self { client, endpoint }
    }

    /// Returns the bound endpoint.
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Builds the request without sending it.
    pub fn request(&self) -> Result<RequestSpec, ApiError> {
        self.endpoint.build_request()
    }

    /// Sends the request asynchronously and returns the full response.
    pub async fn send_detailed(self) -> Result<ApiResponse<E::Output>, ApiError> {
        let spec = self.endpoint.build_request()?;
        let raw = self.client.execute(&spec).await?;
        build_response::<E>(raw, self.client.unexpected_status())
    }

    /// Sends the request asynchronously and returns the parsed payload.
    pub async fn send(self) -> Result<Option<E::Output>, ApiError> {
        Ok(self.send_detailed().await?.parsed)
    }

    /// Sends the request on the blocking transport and returns the full response.
    pub fn send_blocking_detailed(self) -> Result<ApiResponse<E::Output>, ApiError> {
        let spec = self.endpoint.build_request()?;
        let raw = self.client.execute_blocking(&spec)?;
        build_response::<E>(raw, self.client.unexpected_status())
    }

    /// Sends the request on the blocking transport and returns the parsed payload.
    pub fn send_blocking(self) -> Result<Option<E::Output>, ApiError> {
        Ok(self.send_blocking_detailed()?.parsed)
    }
}

fn build_response<E: Endpoint>(
    raw: RawResponse,
    policy: UnexpectedStatusPolicy,
) -> Result<ApiResponse<E::Output>, ApiError> {
    let parsed = E::parse_response(raw.status, &raw.content, policy)?;
    Ok(ApiResponse {
        status: raw.status,
        headers: raw.headers,
        content: raw.content,
        parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::{json, Value};

    struct Probe;

    impl Endpoint for Probe {
        type Output = Value;
        const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (404, Outcome::Known)];

        fn build_request(&self) -> Result<RequestSpec, ApiError> {
            Ok(RequestSpec::new(Method::GET, "/probes/-ready-"))
        }

        fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
            decode_json(content)
        }
    }

    #[test]
    fn test_parsed_status() {
        let parsed = Probe::parse_response(StatusCode::OK, br#"{"entry":{"message":"readyProbe: Success"}}"#, UnexpectedStatusPolicy::Raise).unwrap();
        assert_eq!(parsed, Some(json!({"entry": {"message": "readyProbe: Success"}})));
    }

    #[test]
    fn test_known_status_is_none() {
        let parsed = Probe::parse_response(StatusCode::NOT_FOUND, b"{}", UnexpectedStatusPolicy::Raise).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_unexpected_status_raise() {
        let err = Probe::parse_response(StatusCode::IM_A_TEAPOT, b"teapot", UnexpectedStatusPolicy::Raise).unwrap_err();
        match err {
            ApiError::UnexpectedStatus { status, content } => {
                assert_eq!(status, StatusCode::IM_A_TEAPOT);
                assert_eq!(content, b"teapot");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unexpected_status_ignore() {
        let parsed = Probe::parse_response(StatusCode::IM_A_TEAPOT, b"teapot", UnexpectedStatusPolicy::Ignore).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_decode_failure() {
        let err = Probe::parse_response(StatusCode::OK, b"not json", UnexpectedStatusPolicy::Ignore).unwrap_err();
        assert!(matches!(err, ApiError::Decode { status, .. } if status == StatusCode::OK));
    }

    #[test]
    fn test_empty_and_raw_decoders() {
        assert!(decode_empty(b"").is_ok());
        assert_eq!(decode_raw(b"%PDF-1.4").unwrap(), b"%PDF-1.4".to_vec());
    }
}
