//
//  alfresco-client
//  api/discovery/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Discovery API: repository edition, version, license and installed modules.
//!
//! Lives at `/alfresco/api/discovery`, outside the versioned public API tree.
//!
//! # Example
//!
//! ```rust
//! use alfresco_client::api::discovery::DiscoveryEntry;
//!
//! let json = r#"{"entry": {"repository": {"edition": "Community", "version": {
//!     "major": "23", "minor": "2", "patch": "0", "hotfix": "0", "schema": 19000, "label": "r", "display": "23.2.0.0 (r) schema 19000"
//! }}}}"#;
//! let info: DiscoveryEntry = serde_json::from_str(json).unwrap();
//! assert_eq!(info.entry.repository.version.display, "23.2.0.0 (r) schema 19000");
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::AlfrescoClient;
use super::common::{ApiError, Entry};
use super::operation::{decode_json, Call, Endpoint, Outcome};
use super::request::RequestSpec;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub repository: RepositoryInfo,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `Community` or `Enterprise`.
    pub edition: String,

    pub version: VersionInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<ModuleInfo>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub hotfix: String,
    pub schema: i64,
    pub label: String,
    pub display: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    pub issued_at: String,
    pub expires_at: String,
    pub remaining_days: i64,
    pub holder: String,
    pub mode: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entitlements: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub is_read_only: bool,
    pub is_audit_enabled: bool,
    pub is_quick_share_enabled: bool,
    pub is_thumbnail_generation_enabled: bool,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// An installed AMP or JAR module.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_state: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type DiscoveryEntry = Entry<RepositoryEntry>;

/// `GET /discovery`
#[derive(Debug, Clone, Default)]
pub struct GetRepositoryInformation;

impl Endpoint for GetRepositoryInformation {
    type Output = DiscoveryEntry;
    // 501: discovery disabled on this repository
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (501, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/discovery"))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// Façade over the discovery API.
#[derive(Debug, Clone)]
pub struct DiscoveryApi {
    client: AlfrescoClient,
}

impl DiscoveryApi {
    pub fn new(client: AlfrescoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AlfrescoClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut AlfrescoClient {
        &mut self.client
    }

    pub fn get_repository_information(&self) -> Call<'_, GetRepositoryInformation> {
        Call::new(&self.client, GetRepositoryInformation)
    }
}
