//
//  alfresco-client
//  alfresco.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Aggregate Client
//!
//! [`Alfresco`] owns one façade per REST API, each with its own base URL
//! derived from a single host, and coordinates authentication between them.
//!
//! ## Authentication flow
//!
//! 1. [`AlfrescoBuilder::basic_auth`] configures username and password; every
//!    façade starts out sending them as Basic credentials.
//! 2. [`Alfresco::authenticate`] exchanges them for a ticket, stored on the
//!    authentication façade only.
//! 3. [`Alfresco::share_authentication`] copies that credential (and the
//!    default headers) to every other façade.
//!
//! Steps 2 and 3 are separate so callers decide when the ticket replaces
//! Basic credentials elsewhere.
//!
//! ## Example
//!
//! ```rust,no_run
//! use alfresco_client::Alfresco;
//!
//! # async fn example() -> Result<(), alfresco_client::api::ApiError> {
//! let mut alfresco = Alfresco::builder("localhost:8080/")
//!     .basic_auth("admin", "admin")
//!     .build()?;
//!
//! alfresco.authenticate().await?;
//! alfresco.share_authentication()?;
//!
//! for probe in alfresco.check_connectivity().await.iter() {
//!     println!("{:<10} {}", probe.api, probe.outcome);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::api::auth::{TicketBody, TicketEntry};
use crate::api::client::{format_api_error, ClientConfig, UnexpectedStatusPolicy};
use crate::api::core::READY_PROBE;
use crate::api::model::ListAspectsParams;
use crate::api::request::Param;
use crate::api::search::{Paging, RequestQuery, SearchRequest};
use crate::api::search_sql::SqlRequest;
use crate::api::workflow::ListProcessDefinitionsParams;
use crate::api::{
    AlfrescoClient, ApiError, ApiKind, ApiResponse, AuthApi, CoreApi, DiscoveryApi, ModelApi, SearchApi, SearchSqlApi,
    WorkflowApi,
};
use crate::auth::{AuthCredential, TicketTransport};

/// Statement used to probe the SQL endpoint.
const SQL_PROBE_STATEMENT: &str = "select cm_name from alfresco limit 1";

/// Normalizes a host for base URL templating.
///
/// Trims whitespace and trailing slashes and adds `http://` when no scheme
/// is given.
///
/// # Example
///
/// ```rust
/// use alfresco_client::alfresco::normalize_host;
///
/// assert_eq!(normalize_host(" localhost:8080/ "), "http://localhost:8080");
/// assert_eq!(normalize_host("https://acs.example.com//"), "https://acs.example.com");
/// ```
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

/// Builder for [`Alfresco`].
#[derive(Debug, Clone)]
pub struct AlfrescoBuilder {
    host: String,
    username: Option<String>,
    password: Option<String>,
    credential: Option<AuthCredential>,
    ticket_transport: TicketTransport,
    headers: BTreeMap<String, String>,
    verify_ssl: bool,
    timeout: Option<Duration>,
    unexpected_status: UnexpectedStatusPolicy,
    user_agent: Option<String>,
    base_paths: BTreeMap<ApiKind, String>,
}

impl AlfrescoBuilder {
    fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            username: None,
            password: None,
            credential: None,
            ticket_transport: TicketTransport::default(),
            headers: BTreeMap::new(),
            verify_ssl: true,
            timeout: None,
            unexpected_status: UnexpectedStatusPolicy::default(),
            user_agent: None,
            base_paths: BTreeMap::new(),
        }
    }

    /// Username and password for Basic authentication and for
    /// [`Alfresco::authenticate`].
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        let (username, password) = (username.into(), password.into());
        self.credential = Some(AuthCredential::basic(username.clone(), password.clone()));
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    /// Starts every façade with this credential (e.g. an existing ticket or
    /// a bearer token). Replaces the credential set by `basic_auth`.
    pub fn credential(mut self, credential: AuthCredential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// How tickets from [`Alfresco::authenticate`] are sent.
    pub fn ticket_transport(mut self, transport: TicketTransport) -> Self {
        self.ticket_transport = transport;
        self
    }

    /// Adds a header sent by every façade.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn unexpected_status(mut self, policy: UnexpectedStatusPolicy) -> Self {
        self.unexpected_status = policy;
        self
    }

    /// Overrides the path appended to the host for one API.
    pub fn base_path(mut self, api: ApiKind, path: impl Into<String>) -> Self {
        self.base_paths.insert(api, path.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds one client per API.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] if the host is empty or a base URL does not parse
    /// - [`ApiError::Network`] if an HTTP client cannot be constructed
    pub fn build(self) -> Result<Alfresco, ApiError> {
        if self.host.trim().is_empty() {
            return Err(ApiError::InvalidUrl("host must not be empty".to_string()));
        }
        let host = normalize_host(&self.host);

        let client_for = |api: ApiKind| -> Result<AlfrescoClient, ApiError> {
            let path = self
                .base_paths
                .get(&api)
                .map(String::as_str)
                .unwrap_or_else(|| api.default_base_path());
            let base_url = format!("{}/{}", host, path.trim_start_matches('/'));
            Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

            let mut config = ClientConfig::new(base_url)
                .with_verify_ssl(self.verify_ssl)
                .with_unexpected_status(self.unexpected_status);
            config.auth = self.credential.clone();
            config.headers = self.headers.clone();
            config.timeout = self.timeout;
            if let Some(user_agent) = &self.user_agent {
                config.user_agent = user_agent.clone();
            }
            debug!(api = %api, base_url = %config.base_url, "Configured API client");
            AlfrescoClient::new(config)
        };

        Ok(Alfresco {
            auth: AuthApi::new(client_for(ApiKind::Auth)?),
            core: CoreApi::new(client_for(ApiKind::Core)?),
            discovery: DiscoveryApi::new(client_for(ApiKind::Discovery)?),
            search: SearchApi::new(client_for(ApiKind::Search)?),
            search_sql: SearchSqlApi::new(client_for(ApiKind::SearchSql)?),
            workflow: WorkflowApi::new(client_for(ApiKind::Workflow)?),
            model: ModelApi::new(client_for(ApiKind::Model)?),
            host,
            username: self.username,
            password: self.password,
            ticket_transport: self.ticket_transport,
        })
    }
}

/// One façade per Alfresco REST API, built from a single host.
#[derive(Debug, Clone)]
pub struct Alfresco {
    host: String,
    username: Option<String>,
    password: Option<String>,
    ticket_transport: TicketTransport,
    auth: AuthApi,
    core: CoreApi,
    discovery: DiscoveryApi,
    search: SearchApi,
    search_sql: SearchSqlApi,
    workflow: WorkflowApi,
    model: ModelApi,
}

impl Alfresco {
    pub fn builder(host: impl Into<String>) -> AlfrescoBuilder {
        AlfrescoBuilder::new(host)
    }

    /// The normalized host, e.g. `http://localhost:8080`.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn core(&self) -> &CoreApi {
        &self.core
    }

    pub fn discovery(&self) -> &DiscoveryApi {
        &self.discovery
    }

    pub fn search(&self) -> &SearchApi {
        &self.search
    }

    pub fn search_sql(&self) -> &SearchSqlApi {
        &self.search_sql
    }

    pub fn workflow(&self) -> &WorkflowApi {
        &self.workflow
    }

    pub fn model(&self) -> &ModelApi {
        &self.model
    }

    /// The low-level client behind one API.
    pub fn client(&self, api: ApiKind) -> &AlfrescoClient {
        match api {
            ApiKind::Auth => self.auth.client(),
            ApiKind::Core => self.core.client(),
            ApiKind::Discovery => self.discovery.client(),
            ApiKind::Search => self.search.client(),
            ApiKind::SearchSql => self.search_sql.client(),
            ApiKind::Workflow => self.workflow.client(),
            ApiKind::Model => self.model.client(),
        }
    }

    pub fn client_mut(&mut self, api: ApiKind) -> &mut AlfrescoClient {
        match api {
            ApiKind::Auth => self.auth.client_mut(),
            ApiKind::Core => self.core.client_mut(),
            ApiKind::Discovery => self.discovery.client_mut(),
            ApiKind::Search => self.search.client_mut(),
            ApiKind::SearchSql => self.search_sql.client_mut(),
            ApiKind::Workflow => self.workflow.client_mut(),
            ApiKind::Model => self.model.client_mut(),
        }
    }

    fn ticket_body(&self) -> Result<TicketBody, ApiError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => TicketBody::new(username.clone(), password.clone()),
            _ => Err(ApiError::AuthRequired),
        }
    }

    fn store_ticket(&mut self, response: ApiResponse<TicketEntry>) -> Result<String, ApiError> {
        let entry = response
            .parsed
            .ok_or_else(|| ApiError::AuthFailed(format_api_error(response.status, &response.content).to_string()))?;
        let ticket = entry.entry.id;

        self.auth.client_mut().set_auth(Some(AuthCredential::Ticket {
            ticket: ticket.clone(),
            transport: self.ticket_transport.clone(),
        }));
        info!(user = ?entry.entry.user_id, "Ticket issued");
        Ok(ticket)
    }

    /// Exchanges the configured username and password for a ticket.
    ///
    /// The ticket is stored on the authentication façade only; call
    /// [`share_authentication`](Self::share_authentication) to use it elsewhere.
    ///
    /// # Returns
    ///
    /// The ticket string.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthRequired`] if no username and password were configured
    /// - [`ApiError::AuthFailed`] if the repository refused (400, 403)
    /// - Transport and undeclared-status errors as for any call
    pub async fn authenticate(&mut self) -> Result<String, ApiError> {
        let body = self.ticket_body()?;
        let response = self.auth.create_ticket(body).send_detailed().await?;
        self.store_ticket(response)
    }

    /// Blocking counterpart of [`authenticate`](Self::authenticate).
    pub fn authenticate_blocking(&mut self) -> Result<String, ApiError> {
        let body = self.ticket_body()?;
        let response = self.auth.create_ticket(body).send_blocking_detailed()?;
        self.store_ticket(response)
    }

    /// Copies the authentication façade's credential and default headers to
    /// every other façade.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthRequired`] if the authentication façade holds
    /// no credential.
    pub fn share_authentication(&mut self) -> Result<(), ApiError> {
        let source = self.auth.client().config().clone();
        if !source.is_authenticated() {
            return Err(ApiError::AuthRequired);
        }

        for api in ApiKind::ALL.into_iter().filter(|api| *api != ApiKind::Auth) {
            source.share_credentials_into(self.client_mut(api).config_mut());
        }
        debug!("Authentication shared with all APIs");
        Ok(())
    }

    /// Makes one lightweight call per API.
    ///
    /// Never fails as a whole; each API's result is recorded in the report.
    pub async fn check_connectivity(&self) -> ConnectivityReport {
        let mut results = Vec::with_capacity(ApiKind::ALL.len());
        for api in ApiKind::ALL {
            let outcome = match api {
                ApiKind::Auth => ProbeOutcome::from_result(self.auth.validate_ticket().send_detailed().await),
                ApiKind::Core => ProbeOutcome::from_result(self.core.get_probe(READY_PROBE).send_detailed().await),
                ApiKind::Discovery => {
                    ProbeOutcome::from_result(self.discovery.get_repository_information().send_detailed().await)
                }
                ApiKind::Search => ProbeOutcome::from_result(self.search.search(search_probe()).send_detailed().await),
                ApiKind::SearchSql => {
                    ProbeOutcome::from_result(self.search_sql.search_sql(sql_probe()).send_detailed().await)
                }
                ApiKind::Workflow => ProbeOutcome::from_result(
                    self.workflow
                        .list_process_definitions(single_item())
                        .send_detailed()
                        .await,
                ),
                ApiKind::Model => ProbeOutcome::from_result(
                    self.model
                        .list_aspects(ListAspectsParams {
                            max_items: Param::Value(1),
                            ..Default::default()
                        })
                        .send_detailed()
                        .await,
                ),
            };
            results.push(self.probe_result(api, outcome));
        }
        ConnectivityReport { results }
    }

    /// Blocking counterpart of [`check_connectivity`](Self::check_connectivity).
    pub fn check_connectivity_blocking(&self) -> ConnectivityReport {
        let mut results = Vec::with_capacity(ApiKind::ALL.len());
        for api in ApiKind::ALL {
            let outcome = match api {
                ApiKind::Auth => ProbeOutcome::from_result(self.auth.validate_ticket().send_blocking_detailed()),
                ApiKind::Core => ProbeOutcome::from_result(self.core.get_probe(READY_PROBE).send_blocking_detailed()),
                ApiKind::Discovery => {
                    ProbeOutcome::from_result(self.discovery.get_repository_information().send_blocking_detailed())
                }
                ApiKind::Search => ProbeOutcome::from_result(self.search.search(search_probe()).send_blocking_detailed()),
                ApiKind::SearchSql => {
                    ProbeOutcome::from_result(self.search_sql.search_sql(sql_probe()).send_blocking_detailed())
                }
                ApiKind::Workflow => ProbeOutcome::from_result(
                    self.workflow
                        .list_process_definitions(single_item())
                        .send_blocking_detailed(),
                ),
                ApiKind::Model => ProbeOutcome::from_result(
                    self.model
                        .list_aspects(ListAspectsParams {
                            max_items: Param::Value(1),
                            ..Default::default()
                        })
                        .send_blocking_detailed(),
                ),
            };
            results.push(self.probe_result(api, outcome));
        }
        ConnectivityReport { results }
    }

    fn probe_result(&self, api: ApiKind, outcome: ProbeOutcome) -> ProbeResult {
        debug!(api = %api, outcome = %outcome, "Connectivity probe");
        ProbeResult {
            api,
            base_url: self.client(api).base_url().to_string(),
            outcome,
        }
    }
}

fn search_probe() -> SearchRequest {
    let mut request = SearchRequest::new(RequestQuery::afts("cm:name:*"));
    request.paging = Param::Value(Paging {
        max_items: 1,
        skip_count: 0,
    });
    request
}

fn sql_probe() -> SqlRequest {
    SqlRequest {
        stmt: SQL_PROBE_STATEMENT.to_string(),
        ..Default::default()
    }
}

fn single_item() -> ListProcessDefinitionsParams {
    ListProcessDefinitionsParams {
        max_items: Param::Value(1),
        ..Default::default()
    }
}

/// Result of probing one API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The API answered with a 2xx status.
    Reachable(u16),
    /// The API answered, with a non-2xx status (e.g. 401 without credentials).
    Rejected(u16),
    /// No usable answer: transport failure or undecodable body.
    Failed(String),
}

impl ProbeOutcome {
    fn from_result<T>(result: Result<ApiResponse<T>, ApiError>) -> Self {
        match result {
            Ok(response) if response.status.is_success() => Self::Reachable(response.status.as_u16()),
            Ok(response) => Self::Rejected(response.status.as_u16()),
            Err(ApiError::UnexpectedStatus { status, .. }) => Self::Rejected(status.as_u16()),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable(status) => write!(f, "reachable ({})", status),
            Self::Rejected(status) => write!(f, "rejected ({})", status),
            Self::Failed(message) => write!(f, "failed: {}", message),
        }
    }
}

/// Probe of one API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub api: ApiKind,
    pub base_url: String,
    pub outcome: ProbeOutcome,
}

/// Results of [`Alfresco::check_connectivity`], in [`ApiKind::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectivityReport {
    pub results: Vec<ProbeResult>,
}

impl ConnectivityReport {
    pub fn iter(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter()
    }

    pub fn get(&self, api: ApiKind) -> Option<&ProbeResult> {
        self.results.iter().find(|r| r.api == api)
    }

    /// `true` when every API answered with a 2xx status.
    pub fn all_reachable(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.outcome.is_reachable())
    }
}
