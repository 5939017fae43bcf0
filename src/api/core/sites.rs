//
//  alfresco-client
//  api/core/sites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site types and operations.
//!
//! Sites are collaboration spaces with their own document library and
//! membership. A site id is short, URL-safe and immutable; the title is the
//! display name.
//!
//! # Example
//!
//! ```rust
//! use alfresco_client::api::core::{SiteBodyCreate, SiteVisibility};
//!
//! let body = SiteBodyCreate::new("Marketing", SiteVisibility::Moderated)
//!     .unwrap()
//!     .with_id("marketing-2026")
//!     .unwrap();
//! assert_eq!(
//!     serde_json::to_value(&body).unwrap(),
//!     serde_json::json!({"id": "marketing-2026", "title": "Marketing", "visibility": "MODERATED"})
//! );
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::people::Person;
use super::CoreApi;
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_empty, decode_json, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

/// Longest site id the repository accepts.
pub const MAX_SITE_ID_LENGTH: usize = 72;

/// Who can see and join a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteVisibility {
    #[default]
    Public,
    Moderated,
    Private,
}

/// A site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,

    pub guid: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub visibility: SiteVisibility,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// The current user's role, when a member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// A member of a site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMember {
    pub id: String,

    pub person: Person,

    /// `SiteConsumer`, `SiteCollaborator`, `SiteContributor` or `SiteManager`.
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_member_of_group: Option<bool>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type SiteEntry = Entry<Site>;
pub type SitePaging = Paging<Site>;
pub type SiteMemberPaging = Paging<SiteMember>;

/// Body of `create_site`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBodyCreate {
    /// Generated from the title when unset.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub id: Param<String>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,

    pub visibility: SiteVisibility,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl SiteBodyCreate {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank title.
    pub fn new(title: impl Into<String>, visibility: SiteVisibility) -> Result<Self, ApiError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ApiError::Validation("site title must not be empty".to_string()));
        }
        Ok(Self {
            title,
            visibility,
            ..Default::default()
        })
    }

    /// Sets an explicit site id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] unless the id is 1 to 72 ASCII
    /// letters, digits and hyphens.
    pub fn with_id(mut self, id: impl Into<String>) -> Result<Self, ApiError> {
        let id = id.into();
        validate_site_id(&id)?;
        self.id = Param::Value(id);
        Ok(self)
    }
}

fn validate_site_id(id: &str) -> Result<(), ApiError> {
    if id.is_empty() || id.len() > MAX_SITE_ID_LENGTH {
        return Err(ApiError::Validation(format!(
            "site id must be 1 to {} characters",
            MAX_SITE_ID_LENGTH
        )));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ApiError::Validation(format!(
            "site id '{}' may only contain letters, digits and '-'",
            id
        )));
    }
    Ok(())
}

/// Query parameters of `list_sites`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSitesParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub order_by: Param<Vec<String>>,
    /// `containers` and/or `members`.
    pub relations: Param<Vec<String>>,
    pub fields: Param<Vec<String>>,
    /// e.g. `(visibility='PUBLIC')`
    pub where_: Param<String>,
}

/// Query parameters of `get_site`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetSiteParams {
    pub relations: Param<Vec<String>>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `create_site`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateSiteParams {
    pub skip_configuration: Param<bool>,
    pub skip_add_to_favorites: Param<bool>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `delete_site`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteSiteParams {
    pub permanent: Param<bool>,
}

/// Query parameters of `list_site_members`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSiteMembersParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub fields: Param<Vec<String>>,
    pub where_: Param<String>,
}

/// `GET /sites`
#[derive(Debug, Clone, Default)]
pub struct ListSites {
    pub params: ListSitesParams,
}

impl Endpoint for ListSites {
    type Output = SitePaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known), (401, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        Ok(RequestSpec::new(Method::GET, "/sites")
            .query("skipCount", &p.skip_count)
            .query("maxItems", &p.max_items)
            .query("orderBy", &p.order_by)
            .query("relations", &p.relations)
            .query("fields", &p.fields)
            .query("where", &p.where_))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /sites/{siteId}`
#[derive(Debug, Clone)]
pub struct GetSite {
    pub site_id: String,
    pub params: GetSiteParams,
}

impl Endpoint for GetSite {
    type Output = SiteEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/sites/{siteId}")
            .path("siteId", self.site_id.as_str())
            .query("relations", &self.params.relations)
            .query("fields", &self.params.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /sites`
#[derive(Debug, Clone)]
pub struct CreateSite {
    pub body: SiteBodyCreate,
    pub params: CreateSiteParams,
}

impl Endpoint for CreateSite {
    type Output = SiteEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (409, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        RequestSpec::new(Method::POST, "/sites")
            .query("skipConfiguration", &p.skip_configuration)
            .query("skipAddToFavorites", &p.skip_add_to_favorites)
            .query("fields", &p.fields)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `DELETE /sites/{siteId}`
#[derive(Debug, Clone)]
pub struct DeleteSite {
    pub site_id: String,
    pub params: DeleteSiteParams,
}

impl Endpoint for DeleteSite {
    type Output = ();
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (204, Outcome::Parsed),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::DELETE, "/sites/{siteId}")
            .path("siteId", self.site_id.as_str())
            .query("permanent", &self.params.permanent))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_empty(content)
    }
}

/// `GET /sites/{siteId}/members`
#[derive(Debug, Clone)]
pub struct ListSiteMembers {
    pub site_id: String,
    pub params: ListSiteMembersParams,
}

impl Endpoint for ListSiteMembers {
    type Output = SiteMemberPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        Ok(RequestSpec::new(Method::GET, "/sites/{siteId}/members")
            .path("siteId", self.site_id.as_str())
            .query("skipCount", &p.skip_count)
            .query("maxItems", &p.max_items)
            .query("fields", &p.fields)
            .query("where", &p.where_))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl CoreApi {
    /// Lists sites visible to the current user.
    pub fn list_sites(&self, params: ListSitesParams) -> Call<'_, ListSites> {
        Call::new(&self.client, ListSites { params })
    }

    pub fn get_site(&self, site_id: impl Into<String>, params: GetSiteParams) -> Call<'_, GetSite> {
        Call::new(
            &self.client,
            GetSite {
                site_id: site_id.into(),
                params,
            },
        )
    }

    pub fn create_site(&self, body: SiteBodyCreate, params: CreateSiteParams) -> Call<'_, CreateSite> {
        Call::new(&self.client, CreateSite { body, params })
    }

    pub fn delete_site(&self, site_id: impl Into<String>, params: DeleteSiteParams) -> Call<'_, DeleteSite> {
        Call::new(
            &self.client,
            DeleteSite {
                site_id: site_id.into(),
                params,
            },
        )
    }

    pub fn list_site_members(
        &self,
        site_id: impl Into<String>,
        params: ListSiteMembersParams,
    ) -> Call<'_, ListSiteMembers> {
        Call::new(
            &self.client,
            ListSiteMembers {
                site_id: site_id.into(),
                params,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Model;
    use crate::api::client::UnexpectedStatusPolicy;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_site_id_rules() {
        let body = SiteBodyCreate::new("Finance", SiteVisibility::Private).unwrap();
        assert!(body.clone().with_id("finance-2026").is_ok());
        assert!(body.clone().with_id("finance 2026").is_err());
        assert!(body.clone().with_id("").is_err());
        assert!(body.with_id("x".repeat(MAX_SITE_ID_LENGTH + 1)).is_err());
        assert!(SiteBodyCreate::new(" ", SiteVisibility::Public).is_err());
    }

    #[test]
    fn test_list_sites_parse() {
        let body = br#"{"list":{"pagination":{"count":1,"hasMoreItems":false,"totalItems":1,"skipCount":0,"maxItems":100},
            "entries":[{"entry":{"id":"swsdp","guid":"b4cff62a","title":"Sample: Web Site Design Project","visibility":"PUBLIC","role":"SiteManager"}}]}}"#;
        let page = ListSites::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        let site = page.items().next().unwrap();
        assert_eq!(site.id, "swsdp");
        assert_eq!(site.visibility, SiteVisibility::Public);
        assert_eq!(site.role.as_deref(), Some("SiteManager"));
    }

    #[test]
    fn test_create_site_request() {
        let spec = CreateSite {
            body: SiteBodyCreate::new("Marketing", SiteVisibility::Public).unwrap(),
            params: CreateSiteParams {
                skip_configuration: Param::Value(true),
                ..Default::default()
            },
        }
        .build_request()
        .unwrap();
        assert_eq!(spec.query_value("skipConfiguration"), Some("true"));
        assert_eq!(spec.body, Some(serde_json::json!({"title": "Marketing", "visibility": "PUBLIC"})));
    }

    #[test]
    fn test_create_site_conflict_is_known() {
        let parsed = CreateSite::parse_response(StatusCode::CONFLICT, b"{}", UnexpectedStatusPolicy::Raise).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_site_round_trip() {
        let entry = SiteEntry::from_value(json!({
            "entry": {
                "id": "swsdp",
                "guid": "b4cff62a-664d-4d45-9302-98723eac1319",
                "title": "Sample: Web Site Design Project",
                "visibility": "MODERATED",
                "preset": "site-dashboard",
                "role": "SiteManager",
                "st:tenant": "acme"
            },
            "relations": {}
        }))
        .unwrap();
        assert_eq!(entry.entry.visibility, SiteVisibility::Moderated);
        assert_eq!(entry.entry.additional_fields.get("st:tenant"), Some(&json!("acme")));
        assert_eq!(entry.additional_fields.get("relations"), Some(&json!({})));
        assert_eq!(SiteEntry::from_value(entry.to_value().unwrap()).unwrap(), entry);
    }

    #[test]
    fn test_site_body_null_description() {
        let body = SiteBodyCreate {
            description: Param::Null,
            ..SiteBodyCreate::new("Marketing", SiteVisibility::Private).unwrap()
        };
        let value = body.to_value().unwrap();
        assert_eq!(value["description"], Value::Null);
        assert!(value.get("id").is_none());
        assert_eq!(SiteBodyCreate::from_value(value).unwrap(), body);
    }
}
