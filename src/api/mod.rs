//
//  alfresco-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides typed clients for the Alfresco Content Services REST APIs.
//!
//! ## Supported APIs
//!
//! | API | Façade | Default base path |
//! |-----|--------|-------------------|
//! | Authentication | [`AuthApi`] | `/alfresco/api/-default-/public/authentication/versions/1` |
//! | Core | [`CoreApi`] | `/alfresco/api/-default-/public/alfresco/versions/1` |
//! | Discovery | [`DiscoveryApi`] | `/alfresco/api` |
//! | Search | [`SearchApi`] | `/alfresco/api/-default-/public/search/versions/1` |
//! | Search SQL | [`SearchSqlApi`] | `/alfresco/api/-default-/public/search/versions/1` |
//! | Workflow | [`WorkflowApi`] | `/alfresco/api/-default-/public/workflow/versions/1` |
//! | Model | [`ModelApi`] | `/alfresco/api/-default-/public/alfresco/versions/1` |
//!
//! ## Architecture
//!
//! - [`request`]: [`Param`](request::Param) and [`RequestSpec`](request::RequestSpec), pure request building
//! - [`operation`]: the [`Endpoint`](operation::Endpoint) trait and the four-shape [`Call`](operation::Call)
//! - [`client`]: the HTTP transport, async and blocking
//! - [`common`]: envelopes, errors and pagination shared by all APIs
//! - one module per API with its records, endpoints and façade
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alfresco_client::api::{AlfrescoClient, ApiKind, CoreApi};
//! use alfresco_client::api::client::ClientConfig;
//! use alfresco_client::api::core::GetNodeParams;
//! use alfresco_client::auth::AuthCredential;
//!
//! # async fn example() -> Result<(), alfresco_client::api::ApiError> {
//! let base = format!("http://localhost:8080{}", ApiKind::Core.default_base_path());
//! let client = AlfrescoClient::new(ClientConfig::new(base).with_auth(AuthCredential::basic("admin", "admin")))?;
//! let core = CoreApi::new(client);
//!
//! if let Some(node) = core.get_node("-root-", GetNodeParams::default()).send().await? {
//!     println!("{}", node.entry.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Statuses an endpoint declares (e.g. 404 on `get_node`) come back as `None`.
//! Everything else is an [`ApiError`]; see
//! [`UnexpectedStatusPolicy`](client::UnexpectedStatusPolicy) for undeclared statuses.

use std::fmt;

pub mod client;
pub mod common;
pub mod operation;
pub mod request;

pub mod auth;
pub mod core;
pub mod discovery;
pub mod model;
pub mod search;
pub mod search_sql;
pub mod workflow;

pub use client::AlfrescoClient;
pub use common::{ApiError, ApiResponse};

pub use self::auth::AuthApi;
pub use self::core::CoreApi;
pub use self::discovery::DiscoveryApi;
pub use self::model::ModelApi;
pub use self::search::SearchApi;
pub use self::search_sql::SearchSqlApi;
pub use self::workflow::WorkflowApi;

/// The Alfresco REST APIs, one per façade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiKind {
    Auth,
    Core,
    Discovery,
    Search,
    SearchSql,
    Workflow,
    Model,
}

impl ApiKind {
    /// All APIs, in the order connectivity checks run.
    pub const ALL: [ApiKind; 7] = [
        ApiKind::Auth,
        ApiKind::Core,
        ApiKind::Discovery,
        ApiKind::Search,
        ApiKind::SearchSql,
        ApiKind::Workflow,
        ApiKind::Model,
    ];

    /// Path appended to the host to form this API's base URL.
    pub fn default_base_path(self) -> &'static str {
        match self {
            ApiKind::Auth => "/alfresco/api/-default-/public/authentication/versions/1",
            ApiKind::Core | ApiKind::Model => "/alfresco/api/-default-/public/alfresco/versions/1",
            ApiKind::Discovery => "/alfresco/api",
            ApiKind::Search | ApiKind::SearchSql => "/alfresco/api/-default-/public/search/versions/1",
            ApiKind::Workflow => "/alfresco/api/-default-/public/workflow/versions/1",
        }
    }

    /// Short lowercase name used in logs and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            ApiKind::Auth => "auth",
            ApiKind::Core => "core",
            ApiKind::Discovery => "discovery",
            ApiKind::Search => "search",
            ApiKind::SearchSql => "search-sql",
            ApiKind::Workflow => "workflow",
            ApiKind::Model => "model",
        }
    }

    /// Inverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|api| api.name() == name)
    }
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_paths() {
        assert_eq!(ApiKind::Discovery.default_base_path(), "/alfresco/api");
        assert_eq!(ApiKind::Core.default_base_path(), ApiKind::Model.default_base_path());
        assert_eq!(ApiKind::Search.default_base_path(), ApiKind::SearchSql.default_base_path());
        assert!(ApiKind::Workflow.default_base_path().ends_with("/workflow/versions/1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiKind::SearchSql.to_string(), "search-sql");
    }

    #[test]
    fn test_from_name() {
        for api in ApiKind::ALL {
            assert_eq!(ApiKind::from_name(api.name()), Some(api));
        }
        assert_eq!(ApiKind::from_name("cmis"), None);
    }
}
