//
//  alfresco-client
//  api/core/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Comments on nodes.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CoreApi;
use crate::api::common::{ApiError, Entry, Paging, UserInfo};
use crate::api::operation::{decode_json, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,

    pub content: String,

    pub created_by: UserInfo,

    pub created_at: String,

    pub edited: bool,

    pub modified_by: UserInfo,

    pub modified_at: String,

    pub can_edit: bool,

    pub can_delete: bool,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type CommentEntry = Entry<Comment>;
pub type CommentPaging = Paging<Comment>;

/// Body of `create_comment`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommentBody {
    pub content: String,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl CommentBody {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for blank content.
    pub fn new(content: impl Into<String>) -> Result<Self, ApiError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ApiError::Validation("comment content must not be empty".to_string()));
        }
        Ok(Self {
            content,
            additional_fields: Map::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListCommentsParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub fields: Param<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateCommentParams {
    pub fields: Param<Vec<String>>,
}

/// `GET /nodes/{nodeId}/comments`
#[derive(Debug, Clone)]
pub struct ListComments {
    pub node_id: String,
    pub params: ListCommentsParams,
}

impl Endpoint for ListComments {
    type Output = CommentPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}/comments")
            .path("nodeId", self.node_id.as_str())
            .query("skipCount", &self.params.skip_count)
            .query("maxItems", &self.params.max_items)
            .query("fields", &self.params.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /nodes/{nodeId}/comments`
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub node_id: String,
    pub body: CommentBody,
    pub params: CreateCommentParams,
}

impl Endpoint for CreateComment {
    type Output = CommentEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (405, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/nodes/{nodeId}/comments")
            .path("nodeId", self.node_id.as_str())
            .query("fields", &self.params.fields)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl CoreApi {
    pub fn list_comments(&self, node_id: impl Into<String>, params: ListCommentsParams) -> Call<'_, ListComments> {
        Call::new(
            &self.client,
            ListComments {
                node_id: node_id.into(),
                params,
            },
        )
    }

    pub fn create_comment(
        &self,
        node_id: impl Into<String>,
        body: CommentBody,
        params: CreateCommentParams,
    ) -> Call<'_, CreateComment> {
        Call::new(
            &self.client,
            CreateComment {
                node_id: node_id.into(),
                body,
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
    fn test_comment_body() {
        assert!(CommentBody::new("").is_err());
        let spec = CreateComment {
            node_id: "a1b2".into(),
            body: CommentBody::new("Looks good").unwrap(),
            params: Default::default(),
        }
        .build_request()
        .unwrap();
        assert_eq!(spec.body, Some(serde_json::json!({"content": "Looks good"})));
    }

    #[test]
    fn test_comment_locked_node() {
        // 405: comments are disabled on the node
        let parsed = CreateComment::parse_response(StatusCode::METHOD_NOT_ALLOWED, b"{}", UnexpectedStatusPolicy::Raise).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_comment_round_trip() {
        let entry = CommentEntry::from_value(json!({
            "entry": {
                "id": "c-1",
                "content": "Looks good",
                "createdBy": {"id": "admin", "displayName": "Administrator"},
                "createdAt": "2026-01-12T10:00:00.000+0000",
                "edited": false,
                "modifiedBy": {"id": "admin", "displayName": "Administrator"},
                "modifiedAt": "2026-01-12T10:00:00.000+0000",
                "canEdit": true,
                "canDelete": true,
                "likes": 3
            }
        }))
        .unwrap();
        assert_eq!(entry.entry.additional_fields.get("likes"), Some(&json!(3)));
        assert_eq!(CommentEntry::from_value(entry.to_value().unwrap()).unwrap(), entry);
    }
}
