//
//  alfresco-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for every Alfresco REST API
//!
//! This module provides the types shared by the authentication, core, search,
//! search-SQL, discovery, workflow and model APIs: the error type, the detailed
//! response wrapper, the `entry`/`list` envelopes Alfresco wraps every payload
//! in, and the [`Model`] trait used for dictionary-style conversion.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ApiResponse`] - Full response (status, headers, raw content, parsed payload)
//! - [`Entry`] - The `{"entry": ...}` envelope around single resources
//! - [`ErrorResponse`] - Alfresco's `{"error": {...}}` body
//! - [`Model`] - `to_value` / `from_value` conversion for every record
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use alfresco_client::api::common::{ApiError, Entry, Model};
//! use alfresco_client::api::auth::Ticket;
//!
//! let json = serde_json::json!({"entry": {"id": "TICKET_abc123", "userId": "admin"}});
//! let entry = Entry::<Ticket>::from_value(json).unwrap();
//! assert_eq!(entry.entry.id, "TICKET_abc123");
//! ```
//!
//! # Notes
//!
//! - Every record keeps unknown JSON keys in an `additional_fields` map so
//!   payloads from newer repositories survive a round trip
//! - Field names follow Rust conventions; serde renames them to Alfresco's camelCase

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Alfresco API operations.
///
/// Statuses an endpoint declares as known errors (400, 401, 404, ...) are not
/// errors at this level: they surface as `None` from the basic call variants.
/// `ApiError` covers everything else.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Network` | Connection, timeout or TLS failure from the transport |
/// | `UnexpectedStatus` | Status not declared by the endpoint, under the raise policy |
/// | `Decode` | A declared success body did not match its model |
/// | `Serialization` | A request body could not be encoded |
/// | `Validation` | Caller data rejected while building a model |
/// | `InvalidUrl` | Base URL or path could not be rendered |
/// | `InvalidHeader` | A credential or default header is not a valid header value |
/// | `AuthRequired` | No credentials available for an auth flow |
/// | `AuthFailed` | The repository refused to issue a ticket |
///
/// # Example
///
/// ```rust
/// use alfresco_client::api::common::ApiError;
/// use reqwest::StatusCode;
///
/// let err = ApiError::UnexpectedStatus {
///     status: StatusCode::IM_A_TEAPOT,
///     content: b"short and stout".to_vec(),
/// };
/// assert_eq!(err.status(), Some(StatusCode::IM_A_TEAPOT));
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts, DNS resolution and TLS errors.
    /// These are never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status the endpoint does not declare.
    ///
    /// Only produced when the client runs with
    /// [`UnexpectedStatusPolicy::Raise`](crate::api::client::UnexpectedStatusPolicy::Raise).
    #[error("Unexpected status code: {status}\n\nResponse content:\n{}", String::from_utf8_lossy(.content))]
    UnexpectedStatus {
        /// The HTTP status returned by the server
        status: StatusCode,
        /// The raw response body
        content: Vec<u8>,
    },

    /// A response body for a declared status could not be parsed.
    #[error("Failed to decode {status} response: {source}")]
    Decode {
        /// The HTTP status whose body failed to parse
        status: StatusCode,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Caller-supplied data was rejected while constructing a model.
    ///
    /// Raised before any network traffic takes place.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The base URL or request path could not be turned into a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Authentication credentials are required but not provided.
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed.
    ///
    /// # Parameters
    ///
    /// - `0` - Detailed reason for the authentication failure
    #[error("Authentication failed: {0}")]
    AuthFailed(String),
}

impl ApiError {
    /// Returns the HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }
}

/// Full response returned by the detailed call variants.
///
/// Basic variants return only `parsed`; the detailed variants keep the status,
/// headers and raw body so callers can inspect declared error responses that
/// were mapped to `None`.
///
/// # Type Parameters
///
/// - `T` - The parsed payload type of the operation
///
/// # Example
///
/// ```rust
/// use alfresco_client::api::common::ApiResponse;
/// use reqwest::header::HeaderMap;
/// use reqwest::StatusCode;
///
/// let response: ApiResponse<()> = ApiResponse {
///     status: StatusCode::NOT_FOUND,
///     headers: HeaderMap::new(),
///     content: br#"{"error":{"statusCode":404}}"#.to_vec(),
///     parsed: None,
/// };
/// assert!(response.parsed.is_none());
/// assert!(!response.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// The HTTP status code.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body.
    pub content: Vec<u8>,

    /// The parsed payload, `None` for declared errors and ignored statuses.
    pub parsed: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the raw body as Alfresco's error envelope.
    ///
    /// Returns `None` when the body is empty or not an error document.
    pub fn error(&self) -> Option<ErrorResponse> {
        serde_json::from_slice(&self.content).ok()
    }
}

/// Dictionary-style conversion shared by every record.
///
/// `to_value` mirrors a generated client's `to_dict` and `from_value` its
/// `from_dict`. The trait is implemented for every serde record, so
/// `T::from_value(x.to_value()?)? == x` holds for all models, extra keys
/// included.
pub trait Model: Serialize + DeserializeOwned {
    /// Converts the record into a JSON value.
    fn to_value(&self) -> Result<Value, ApiError> {
        serde_json::to_value(self).map_err(ApiError::Serialization)
    }

    /// Builds the record from a JSON value.
    ///
    /// Missing required fields and mistyped values are reported as
    /// [`ApiError::Validation`].
    fn from_value(value: Value) -> Result<Self, ApiError> {
        serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))
    }
}

impl<T: Serialize + DeserializeOwned> Model for T {}

/// The `{"entry": ...}` envelope Alfresco wraps single resources in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entry<T> {
    /// The wrapped resource.
    pub entry: T,

    /// Unrecognized keys, preserved for forward compatibility.
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl<T> Entry<T> {
    /// Wraps a resource without extra keys.
    pub fn new(entry: T) -> Self {
        Self {
            entry,
            additional_fields: Map::new(),
        }
    }

    /// Unwraps the resource.
    pub fn into_inner(self) -> T {
        self.entry
    }
}

/// Error document returned by Alfresco for failed requests.
///
/// ```json
/// {"error": {"errorKey": "...", "statusCode": 404, "briefSummary": "..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Body of an [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,

    pub status_code: u16,

    #[serde(default)]
    pub brief_summary: String,

    #[serde(default)]
    pub stack_trace: String,

    #[serde(default, rename = "descriptionURL")]
    pub description_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_id: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// A user reference embedded in nodes, comments and sites.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub display_name: String,

    pub id: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}
