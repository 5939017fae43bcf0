//
//  alfresco-client
//  api/core/tags.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tags on nodes.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CoreApi;
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_json, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,

    pub tag: String,

    /// Number of nodes carrying the tag, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type TagEntry = Entry<Tag>;
pub type TagPaging = Paging<Tag>;

/// Body of `create_tag_for_node`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagBody {
    pub tag: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl TagBody {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank tag.
    pub fn new(tag: impl Into<String>) -> Result<Self, ApiError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ApiError::Validation("tag must not be empty".to_string()));
        }
        Ok(Self {
            tag,
            additional_fields: Map::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListTagsForNodeParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub fields: Param<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateTagForNodeParams {
    pub fields: Param<Vec<String>>,
}

/// `GET /nodes/{nodeId}/tags`
#[derive(Debug, Clone)]
pub struct ListTagsForNode {
    pub node_id: String,
    pub params: ListTagsForNodeParams,
}

impl Endpoint for ListTagsForNode {
    type Output = TagPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}/tags")
            .path("nodeId", self.node_id.as_str())
            .query("skipCount", &self.params.skip_count)
            .query("maxItems", &self.params.max_items)
            .query("fields", &self.params.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /nodes/{nodeId}/tags`
#[derive(Debug, Clone)]
pub struct CreateTagForNode {
    pub node_id: String,
    pub body: TagBody,
    pub params: CreateTagForNodeParams,
}

impl Endpoint for CreateTagForNode {
    type Output = TagEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (405, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/nodes/{nodeId}/tags")
            .path("nodeId", self.node_id.as_str())
            .query("fields", &self.params.fields)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl CoreApi {
    pub fn list_tags_for_node(
        &self,
        node_id: impl Into<String>,
        params: ListTagsForNodeParams,
    ) -> Call<'_, ListTagsForNode> {
        Call::new(
            &self.client,
            ListTagsForNode {
                node_id: node_id.into(),
                params,
            },
        )
    }

    pub fn create_tag_for_node(
        &self,
        node_id: impl Into<String>,
        body: TagBody,
        params: CreateTagForNodeParams,
    ) -> Call<'_, CreateTagForNode> {
        Call::new(
            &self.client,
            CreateTagForNode {
                node_id: node_id.into(),
                body,
                params,
            },
        )
    }
}
