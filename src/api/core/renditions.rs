//
//  alfresco-client
//  api/core/renditions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Rendition types and operations.
//!
//! Renditions (`doclib`, `pdf`, `imgpreview`, ...) are generated
//! asynchronously: `create_rendition` answers 202 and the rendition turns
//! `CREATED` once the transform finishes.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::nodes::ContentInfo;
use super::CoreApi;
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_empty, decode_json, decode_raw, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

/// Whether a rendition exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenditionStatus {
    Created,
    #[default]
    NotCreated,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendition {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentInfo>,

    pub status: RenditionStatus,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type RenditionEntry = Entry<Rendition>;
pub type RenditionPaging = Paging<Rendition>;

/// Body of `create_rendition`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenditionBodyCreate {
    pub id: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl RenditionBodyCreate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            additional_fields: Map::new(),
        }
    }
}

/// Query parameters of `list_renditions`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListRenditionsParams {
    /// e.g. `(status='CREATED')`
    pub where_: Param<String>,
}

/// Query parameters of `get_rendition_content`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetRenditionContentParams {
    pub attachment: Param<bool>,
    /// Return a placeholder image when the rendition does not exist.
    pub placeholder: Param<bool>,
}

/// `GET /nodes/{nodeId}/renditions`
#[derive(Debug, Clone)]
pub struct ListRenditions {
    pub node_id: String,
    pub params: ListRenditionsParams,
}

impl Endpoint for ListRenditions {
    type Output = RenditionPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}/renditions")
            .path("nodeId", self.node_id.as_str())
            .query("where", &self.params.where_))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /nodes/{nodeId}/renditions/{renditionId}`
#[derive(Debug, Clone)]
pub struct GetRendition {
    pub node_id: String,
    pub rendition_id: String,
}

impl Endpoint for GetRendition {
    type Output = RenditionEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}/renditions/{renditionId}")
            .path("nodeId", self.node_id.as_str())
            .path("renditionId", self.rendition_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /nodes/{nodeId}/renditions`
#[derive(Debug, Clone)]
pub struct CreateRendition {
    pub node_id: String,
    pub body: RenditionBodyCreate,
}

impl Endpoint for CreateRendition {
    type Output = ();
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (202, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
        (501, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/nodes/{nodeId}/renditions")
            .path("nodeId", self.node_id.as_str())
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_empty(content)
    }
}

/// `GET /nodes/{nodeId}/renditions/{renditionId}/content`
#[derive(Debug, Clone)]
pub struct GetRenditionContent {
    pub node_id: String,
    pub rendition_id: String,
    pub params: GetRenditionContentParams,
}

impl Endpoint for GetRenditionContent {
    type Output = Vec<u8>;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (206, Outcome::Parsed),
        (304, Outcome::Known),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
        (416, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}/renditions/{renditionId}/content")
            .path("nodeId", self.node_id.as_str())
            .path("renditionId", self.rendition_id.as_str())
            .query("attachment", &self.params.attachment)
            .query("placeholder", &self.params.placeholder))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_raw(content)
    }
}

impl CoreApi {
    pub fn list_renditions(
        &self,
        node_id: impl Into<String>,
        params: ListRenditionsParams,
    ) -> Call<'_, ListRenditions> {
        Call::new(
            &self.client,
            ListRenditions {
                node_id: node_id.into(),
                params,
            },
        )
    }

    pub fn get_rendition(
        &self,
        node_id: impl Into<String>,
        rendition_id: impl Into<String>,
    ) -> Call<'_, GetRendition> {
        Call::new(
            &self.client,
            GetRendition {
                node_id: node_id.into(),
                rendition_id: rendition_id.into(),
            },
        )
    }

    /// Requests generation of a rendition. Answers 202 before the rendition exists.
    pub fn create_rendition(
        &self,
        node_id: impl Into<String>,
        body: RenditionBodyCreate,
    ) -> Call<'_, CreateRendition> {
        Call::new(
            &self.client,
            CreateRendition {
                node_id: node_id.into(),
                body,
            },
        )
    }

    pub fn get_rendition_content(
        &self,
        node_id: impl Into<String>,
        rendition_id: impl Into<String>,
        params: GetRenditionContentParams,
    ) -> Call<'_, GetRenditionContent> {
        Call::new(
            &self.client,
            GetRenditionContent {
                node_id: node_id.into(),
                rendition_id: rendition_id.into(),
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
    fn test_create_rendition_accepted() {
        let parsed = CreateRendition::parse_response(StatusCode::ACCEPTED, b"", UnexpectedStatusPolicy::Raise).unwrap();
        assert_eq!(parsed, Some(()));
    }

    #[test]
    fn test_rendition_status() {
        let body = br#"{"entry":{"id":"doclib","status":"NOT_CREATED","content":{"mimeType":"image/png","mimeTypeName":"PNG Image"}}}"#;
        let entry = GetRendition::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        assert_eq!(entry.entry.status, RenditionStatus::NotCreated);
    }

    #[test]
    fn test_content_path() {
        let spec = GetRenditionContent {
            node_id: "a1b2".into(),
            rendition_id: "pdf".into(),
            params: GetRenditionContentParams {
                placeholder: Param::Value(true),
                ..Default::default()
            },
        }
        .build_request()
        .unwrap();
        assert_eq!(spec.path_segments().unwrap(), vec!["nodes", "a1b2", "renditions", "pdf", "content"]);
        assert_eq!(spec.query_value("placeholder"), Some("true"));
    }

    #[test]
    fn test_rendition_round_trip() {
        let entry = RenditionEntry::from_value(json!({
            "entry": {
                "id": "doclib",
                "status": "CREATED",
                "content": {"mimeType": "image/png", "mimeTypeName": "PNG Image", "sizeInBytes": 2048},
                "renditionDefinition": "thumbnail"
            }
        }))
        .unwrap();
        assert_eq!(entry.entry.status, RenditionStatus::Created);
        assert_eq!(entry.entry.additional_fields.get("renditionDefinition"), Some(&json!("thumbnail")));
        assert_eq!(RenditionEntry::from_value(entry.to_value().unwrap()).unwrap(), entry);

        let body = RenditionBodyCreate::from_value(json!({"id": "pdf", "placeholder": true})).unwrap();
        assert_eq!(body.additional_fields.get("placeholder"), Some(&json!(true)));
        assert_eq!(RenditionBodyCreate::from_value(body.to_value().unwrap()).unwrap(), body);
    }
}
