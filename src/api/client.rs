//
//  alfresco-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Alfresco REST APIs
//!
//! This module provides the low-level client every façade shares. It turns a
//! [`RequestSpec`] into an HTTP call and hands back the raw status, headers and
//! body; mapping those to typed results is the job of
//! [`Endpoint::parse_response`](super::operation::Endpoint::parse_response).
//!
//! ## Features
//!
//! - One `prepare` step (URL, default headers, credentials, JSON body) shared
//!   by the async and blocking transports
//! - Async transport on `reqwest::Client`
//! - Blocking transport on `reqwest::blocking::Client`, created on first use
//! - Configurable policy for statuses an endpoint does not declare
//! - Custom User-Agent header
//!
//! ## Blocking calls
//!
//! The blocking transport owns its own runtime. Do not call the blocking
//! variants from inside an async runtime; use the async variants there.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use tracing::debug;
use url::Url;

use super::common::ApiError;
use super::request::RequestSpec;
use crate::auth::AuthCredential;

/// Parses an Alfresco error response and extracts a user-friendly message.
///
/// Alfresco returns errors in the format:
/// ```json
/// {"error": {"errorKey": "...", "statusCode": 404, "briefSummary": "Human readable message"}}
/// ```
///
/// Falls back to the raw body when the document has another shape.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
///
/// # Returns
///
/// Returns an `anyhow::Error` with a clean, user-friendly message.
pub fn format_api_error(status: StatusCode, body: &[u8]) -> anyhow::Error {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) {
        if let Some(summary) = json
            .get("error")
            .and_then(|e| e.get("briefSummary"))
            .and_then(|m| m.as_str())
        {
            return anyhow::anyhow!("{} ({})", summary, status);
        }

        // Some proxies answer with {"message": "..."}
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return anyhow::anyhow!("{} ({})", message, status);
        }
    }

    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        anyhow::anyhow!("API error ({})", status)
    } else {
        anyhow::anyhow!("API error ({}): {}", status, text)
    }
}

/// What to do with a status an endpoint does not declare.
///
/// Declared error statuses (e.g. 404 on `get_node`) always map to `None`.
/// This policy only covers the rest.
///
/// # Variants
///
/// * `Ignore` - Return `None`, like a declared error (default)
/// * `Raise` - Fail with [`ApiError::UnexpectedStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnexpectedStatusPolicy {
    #[default]
    Ignore,
    Raise,
}

/// Configuration of one [`AlfrescoClient`].
///
/// Every façade owns its own configuration so base URLs can differ per API.
/// Credentials are plain values: [`share_credentials_into`](Self::share_credentials_into)
/// copies them from one configuration to another.
///
/// # Example
///
/// ```rust
/// use alfresco_client::api::client::{ClientConfig, UnexpectedStatusPolicy};
/// use alfresco_client::auth::AuthCredential;
///
/// let auth = ClientConfig::new("http://localhost:8080/alfresco/api/-default-/public/authentication/versions/1")
///     .with_auth(AuthCredential::ticket("TICKET_abc123"))
///     .with_header("X-Request-Source", "batch");
///
/// let mut core = ClientConfig::new("http://localhost:8080/alfresco/api/-default-/public/alfresco/versions/1")
///     .with_unexpected_status(UnexpectedStatusPolicy::Raise);
///
/// auth.share_credentials_into(&mut core);
/// assert_eq!(core.auth, auth.auth);
/// assert_eq!(core.headers.get("X-Request-Source").map(String::as_str), Some("batch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every request path is appended to.
    pub base_url: String,

    /// Credentials applied to every request.
    pub auth: Option<AuthCredential>,

    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,

    /// Per-request timeout; `None` leaves reqwest's default.
    pub timeout: Option<Duration>,

    /// Verify TLS certificates. Read when the client is constructed.
    pub verify_ssl: bool,

    /// User-Agent header. Read when the client is constructed.
    pub user_agent: String,

    /// Handling of undeclared statuses.
    pub unexpected_status: UnexpectedStatusPolicy,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with no credentials.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            headers: BTreeMap::new(),
            timeout: None,
            verify_ssl: true,
            user_agent: format!("alfresco-client/{}", crate::VERSION),
            unexpected_status: UnexpectedStatusPolicy::default(),
        }
    }

    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    pub fn with_unexpected_status(mut self, policy: UnexpectedStatusPolicy) -> Self {
        self.unexpected_status = policy;
        self
    }

    /// Returns `true` if credentials are configured.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Copies this configuration's credentials and default headers into `other`.
    ///
    /// The base URL, timeout, TLS and status policy of `other` are left alone.
    /// Headers already present on `other` are overwritten when the names match.
    pub fn share_credentials_into(&self, other: &mut ClientConfig) {
        other.auth = self.auth.clone();
        for (name, value) in &self.headers {
            other.headers.insert(name.clone(), value.clone());
        }
    }
}

/// A request ready for either transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status, headers and body of a completed call, before parsing.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content: Vec<u8>,
}

/// The low-level HTTP client for one Alfresco API.
///
/// Cloning is cheap: clones share the underlying connection pools.
///
/// # Example
///
/// ```rust,no_run
/// use alfresco_client::api::client::{AlfrescoClient, ClientConfig};
/// use alfresco_client::api::request::RequestSpec;
/// use alfresco_client::auth::AuthCredential;
/// use reqwest::Method;
///
/// # async fn example() -> Result<(), alfresco_client::api::ApiError> {
/// let client = AlfrescoClient::new(
///     ClientConfig::new("http://localhost:8080/alfresco/api")
///         .with_auth(AuthCredential::basic("admin", "admin")),
/// )?;
///
/// let raw = client.execute(&RequestSpec::new(Method::GET, "/discovery")).await?;
/// println!("{}", raw.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AlfrescoClient {
    /// Configuration read on every request
    config: ClientConfig,
    /// The async HTTP client
    http: Client,
    /// The blocking HTTP client, built on first blocking call
    blocking: Arc<OnceCell<reqwest::blocking::Client>>,
}

impl AlfrescoClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()?;

        Ok(Self {
            config,
            http,
            blocking: Arc::new(OnceCell::new()),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the configuration for in-place changes (credentials, headers,
    /// timeout, status policy).
    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// Replaces the credentials.
    pub fn set_auth(&mut self, auth: Option<AuthCredential>) {
        self.config.auth = auth;
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the policy for undeclared statuses.
    pub fn unexpected_status(&self) -> UnexpectedStatusPolicy {
        self.config.unexpected_status
    }

    /// Renders the URL, default headers, credentials and body of a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be rendered, a header is invalid or
    /// the body cannot be encoded.
    pub fn prepare(&self, spec: &RequestSpec) -> Result<PreparedRequest, ApiError> {
        let url = spec.url(&self.config.base_url)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let body = match &spec.body {
            Some(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_vec(value).map_err(ApiError::Serialization)?)
            }
            None => None,
        };

        let mut prepared = PreparedRequest {
            method: spec.method.clone(),
            url,
            headers,
            body,
        };

        if let Some(auth) = &self.config.auth {
            auth.apply(&mut prepared)?;
        }

        Ok(prepared)
    }

    /// Sends a request over the async transport.
    ///
    /// # Errors
    ///
    /// Transport failures propagate as [`ApiError::Network`]. Any HTTP status,
    /// error statuses included, is a successful `RawResponse` here.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<RawResponse, ApiError> {
        let prepared = self.prepare(spec)?;
        debug!(method = %prepared.method, path = spec.template, "Sending request");

        let mut request = self
            .http
            .request(prepared.method, prepared.url)
            .headers(prepared.headers);

        if let Some(body) = prepared.body {
            request = request.body(body);
        }
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes().await?.to_vec();

        debug!(%status, bytes = content.len(), path = spec.template, "Received response");

        Ok(RawResponse {
            status,
            headers,
            content,
        })
    }

    /// Sends a request over the blocking transport.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn execute_blocking(&self, spec: &RequestSpec) -> Result<RawResponse, ApiError> {
        let prepared = self.prepare(spec)?;
        debug!(method = %prepared.method, path = spec.template, "Sending blocking request");

        let mut request = self
            .blocking_client()?
            .request(prepared.method, prepared.url)
            .headers(prepared.headers);

        if let Some(body) = prepared.body {
            request = request.body(body);
        }
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes()?.to_vec();

        debug!(%status, bytes = content.len(), path = spec.template, "Received response");

        Ok(RawResponse {
            status,
            headers,
            content,
        })
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client, ApiError> {
        let client = self.blocking.get_or_try_init(|| {
            reqwest::blocking::Client::builder()
                .user_agent(self.config.user_agent.clone())
                .danger_accept_invalid_certs(!self.config.verify_ssl)
                .build()
        })?;
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;

    const BASE: &str = "http://localhost:8080/alfresco/api/-default-/public/alfresco/versions/1";

    #[test]
    fn test_prepare_applies_headers_auth_and_body() {
        let client = AlfrescoClient::new(
            ClientConfig::new(BASE)
                .with_auth(AuthCredential::basic("admin", "admin"))
                .with_header("X-Trace", "t-1"),
        )
        .unwrap();

        let spec = RequestSpec::new(Method::POST, "/nodes/{nodeId}/children")
            .path("nodeId", "-my-")
            .json(&json!({"name": "folder", "nodeType": "cm:folder"}))
            .unwrap();

        let prepared = client.prepare(&spec).unwrap();
        assert_eq!(prepared.url.path(), "/alfresco/api/-default-/public/alfresco/versions/1/nodes/-my-/children");
        assert_eq!(prepared.headers.get("x-trace").unwrap(), "t-1");
        assert_eq!(prepared.headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(prepared.headers.get(AUTHORIZATION).unwrap(), "Basic YWRtaW46YWRtaW4=");

        let body: serde_json::Value = serde_json::from_slice(prepared.body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "folder", "nodeType": "cm:folder"}));
    }

    #[test]
    fn test_prepare_without_body_has_no_content_type() {
        let client = AlfrescoClient::new(ClientConfig::new(BASE)).unwrap();
        let prepared = client.prepare(&RequestSpec::new(Method::GET, "/sites")).unwrap();
        assert!(prepared.headers.get(CONTENT_TYPE).is_none());
        assert!(prepared.body.is_none());
    }

    #[test]
    fn test_prepare_rejects_bad_header() {
        let client = AlfrescoClient::new(ClientConfig::new(BASE).with_header("bad header", "x")).unwrap();
        let err = client.prepare(&RequestSpec::new(Method::GET, "/sites")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader(_)));
    }

    #[test]
    fn test_share_credentials_into() {
        let source = ClientConfig::new("http://a")
            .with_auth(AuthCredential::ticket("TICKET_1"))
            .with_header("X-A", "1");
        let mut target = ClientConfig::new("http://b")
            .with_header("X-B", "2")
            .with_unexpected_status(UnexpectedStatusPolicy::Raise);

        source.share_credentials_into(&mut target);

        assert_eq!(target.base_url, "http://b");
        assert_eq!(target.auth, Some(AuthCredential::ticket("TICKET_1")));
        assert_eq!(target.headers.len(), 2);
        assert_eq!(target.unexpected_status, UnexpectedStatusPolicy::Raise);
    }

    #[test]
    fn test_default_policy_ignores() {
        assert_eq!(ClientConfig::new(BASE).unexpected_status, UnexpectedStatusPolicy::Ignore);
    }

    #[test]
    fn test_format_api_error() {
        let body = br#"{"error":{"statusCode":404,"briefSummary":"10180001 The entity with id: abc was not found"}}"#;
        let err = format_api_error(StatusCode::NOT_FOUND, body);
        assert_eq!(err.to_string(), "10180001 The entity with id: abc was not found (404 Not Found)");

        let err = format_api_error(StatusCode::BAD_GATEWAY, b"");
        assert_eq!(err.to_string(), "API error (502 Bad Gateway)");
    }
}
