//
//  alfresco-client
//  api/core/nodes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Node types and operations.
//!
//! A node is any item in the repository: folders, files, links and custom
//! types. Nodes are addressed by id or by one of the aliases `-root-`,
//! `-my-` (the user's home folder) and `-shared-`.
//!
//! # Example
//!
//! ```rust
//! use alfresco_client::api::core::{Node, NodeBodyCreate};
//!
//! let json = r#"{"id": "a1b2", "name": "Reports", "nodeType": "cm:folder", "isFolder": true, "isFile": false,
//!     "modifiedAt": "2026-01-12T10:00:00.000+0000", "modifiedByUser": {"displayName": "Administrator", "id": "admin"},
//!     "createdAt": "2026-01-12T10:00:00.000+0000", "createdByUser": {"displayName": "Administrator", "id": "admin"}}"#;
//! let node: Node = serde_json::from_str(json).unwrap();
//! assert!(node.is_folder);
//!
//! assert!(NodeBodyCreate::new("Q1 Report.pdf", "cm:content").is_ok());
//! assert!(NodeBodyCreate::new("what?.pdf", "cm:content").is_err());
//! ```
//!
//! # Notes
//!
//! - Names may not contain `* " < > \ / ? : |` and may not end with `.`
//! - Deleted nodes go to the trashcan unless `permanent` is set

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CoreApi, IncludeParams};
use crate::api::common::{ApiError, Entry, Paging, UserInfo};
use crate::api::operation::{decode_empty, decode_json, decode_raw, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

const INVALID_NAME_CHARS: &[char] = &['*', '"', '<', '>', '\\', '/', '?', ':', '|'];

/// Checks a node name against the repository's naming rules.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for empty names, names containing one of
/// `* " < > \ / ? : |` and names ending with `.`.
pub fn validate_node_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("node name must not be empty".to_string()));
    }
    if let Some(c) = name.chars().find(|c| INVALID_NAME_CHARS.contains(c)) {
        return Err(ApiError::Validation(format!("node name '{}' contains invalid character '{}'", name, c)));
    }
    if name.ends_with('.') {
        return Err(ApiError::Validation(format!("node name '{}' must not end with '.'", name)));
    }
    Ok(())
}

/// A repository node.
///
/// # Fields
///
/// * `id` - Node id (a UUID)
/// * `name` - Node name, unique within its parent
/// * `node_type` - Content model type (e.g. `cm:folder`, `cm:content`)
/// * `is_folder` / `is_file` - Type shortcuts
/// * `content` - MIME type and size, files only
/// * `properties` / `aspect_names` / `path` / `allowable_operations` - Present
///   when requested with `include`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,

    pub name: String,

    pub node_type: String,

    pub is_folder: bool,

    pub is_file: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    /// ISO 8601 timestamp of the last modification.
    pub modified_at: String,

    pub modified_by_user: UserInfo,

    /// ISO 8601 timestamp of creation.
    pub created_at: String,

    pub created_by_user: UserInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_link: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_names: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_operations: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathInfo>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Content metadata of a file node or rendition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    pub mime_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Primary path of a node, returned with `include=path`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<PathElement>>,

    /// Display path, e.g. `/Company Home/Sites`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// One ancestor in a [`PathInfo`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_names: Option<Vec<String>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type NodeEntry = Entry<Node>;
pub type NodePaging = Paging<Node>;

/// Body of `create_node`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyCreate {
    pub name: String,

    pub node_type: String,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub aspect_names: Param<Vec<String>>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub properties: Param<Map<String, Value>>,

    /// Folder path, relative to the parent, created on demand.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub relative_path: Param<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl NodeBodyCreate {
    /// Creates a node body after checking the name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for names the repository would reject
    /// and for an empty node type.
    pub fn new(name: impl Into<String>, node_type: impl Into<String>) -> Result<Self, ApiError> {
        let name = name.into();
        let node_type = node_type.into();
        validate_node_name(&name)?;
        if node_type.trim().is_empty() {
            return Err(ApiError::Validation("nodeType must not be empty".to_string()));
        }
        Ok(Self {
            name,
            node_type,
            ..Default::default()
        })
    }
}

/// Body of `update_node`. Only set fields are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyUpdate {
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub name: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub node_type: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub aspect_names: Param<Vec<String>>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub properties: Param<Map<String, Value>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Body of `copy_node`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyCopy {
    pub target_parent_id: String,

    /// New name for the copy; the source name when unset.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub name: Param<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Body of `move_node`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyMove {
    pub target_parent_id: String,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub name: Param<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Body of `lock_node`.
///
/// * `time_to_expire` - Seconds until the lock expires; 0 never expires
/// * `lock_type` - `ALLOW_OWNER_CHANGES` or `FULL`
/// * `lifetime` - `PERSISTENT` or `EPHEMERAL`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBodyLock {
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub time_to_expire: Param<i64>,

    #[serde(rename = "type", default, skip_serializing_if = "Param::is_unset")]
    pub lock_type: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub lifetime: Param<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Query parameters of `get_node`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetNodeParams {
    pub include: Param<Vec<String>>,
    pub relative_path: Param<String>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `list_node_children`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListNodeChildrenParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub order_by: Param<Vec<String>>,
    /// Filter, e.g. `(isFolder=true)`.
    pub where_: Param<String>,
    pub include: Param<Vec<String>>,
    pub relative_path: Param<String>,
    pub include_source: Param<bool>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `create_node`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateNodeParams {
    pub auto_rename: Param<bool>,
    pub major_version: Param<bool>,
    pub versioning_enabled: Param<bool>,
    pub include: Param<Vec<String>>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `delete_node`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteNodeParams {
    /// Skip the trashcan.
    pub permanent: Param<bool>,
}

/// Query parameters of `get_node_content`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetNodeContentParams {
    /// Ask for `Content-Disposition: attachment` (default `true` server side).
    pub attachment: Param<bool>,
}

pub type UpdateNodeParams = IncludeParams;
pub type CopyNodeParams = IncludeParams;
pub type MoveNodeParams = IncludeParams;
pub type LockNodeParams = IncludeParams;
pub type UnlockNodeParams = IncludeParams;

fn with_include(spec: RequestSpec, params: &IncludeParams) -> RequestSpec {
    spec.query("include", &params.include).query("fields", &params.fields)
}

/// `GET /nodes/{nodeId}`
#[derive(Debug, Clone)]
pub struct GetNode {
    pub node_id: String,
    pub params: GetNodeParams,
}

impl Endpoint for GetNode {
    type Output = NodeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}")
            .path("nodeId", self.node_id.as_str())
            .query("include", &self.params.include)
            .query("relativePath", &self.params.relative_path)
            .query("fields", &self.params.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /nodes/{nodeId}/children`
#[derive(Debug, Clone)]
pub struct ListNodeChildren {
    pub node_id: String,
    pub params: ListNodeChildrenParams,
}

impl Endpoint for ListNodeChildren {
    type Output = NodePaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}/children")
            .path("nodeId", self.node_id.as_str())
            .query("skipCount", &p.skip_count)
            .query("maxItems", &p.max_items)
            .query("orderBy", &p.order_by)
            .query("where", &p.where_)
            .query("include", &p.include)
            .query("relativePath", &p.relative_path)
            .query("includeSource", &p.include_source)
            .query("fields", &p.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /nodes/{nodeId}/children`
#[derive(Debug, Clone)]
pub struct CreateNode {
    pub node_id: String,
    pub body: NodeBodyCreate,
    pub params: CreateNodeParams,
}

impl Endpoint for CreateNode {
    type Output = NodeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
        (413, Outcome::Known),
        (415, Outcome::Known),
        (422, Outcome::Known),
        (507, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        RequestSpec::new(Method::POST, "/nodes/{nodeId}/children")
            .path("nodeId", self.node_id.as_str())
            .query("autoRename", &p.auto_rename)
            .query("majorVersion", &p.major_version)
            .query("versioningEnabled", &p.versioning_enabled)
            .query("include", &p.include)
            .query("fields", &p.fields)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `PUT /nodes/{nodeId}`
#[derive(Debug, Clone)]
pub struct UpdateNode {
    pub node_id: String,
    pub body: NodeBodyUpdate,
    pub params: UpdateNodeParams,
}

impl Endpoint for UpdateNode {
    type Output = NodeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
        (422, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let spec = RequestSpec::new(Method::PUT, "/nodes/{nodeId}").path("nodeId", self.node_id.as_str());
        with_include(spec, &self.params).json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `DELETE /nodes/{nodeId}`
#[derive(Debug, Clone)]
pub struct DeleteNode {
    pub node_id: String,
    pub params: DeleteNodeParams,
}

impl Endpoint for DeleteNode {
    type Output = ();
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (204, Outcome::Parsed),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::DELETE, "/nodes/{nodeId}")
            .path("nodeId", self.node_id.as_str())
            .query("permanent", &self.params.permanent))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_empty(content)
    }
}

/// `POST /nodes/{nodeId}/copy`
#[derive(Debug, Clone)]
pub struct CopyNode {
    pub node_id: String,
    pub body: NodeBodyCopy,
    pub params: CopyNodeParams,
}

impl Endpoint for CopyNode {
    type Output = NodeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
        (422, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let spec = RequestSpec::new(Method::POST, "/nodes/{nodeId}/copy").path("nodeId", self.node_id.as_str());
        with_include(spec, &self.params).json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /nodes/{nodeId}/move`
#[derive(Debug, Clone)]
pub struct MoveNode {
    pub node_id: String,
    pub body: NodeBodyMove,
    pub params: MoveNodeParams,
}

impl Endpoint for MoveNode {
    type Output = NodeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
        (422, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let spec = RequestSpec::new(Method::POST, "/nodes/{nodeId}/move").path("nodeId", self.node_id.as_str());
        with_include(spec, &self.params).json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /nodes/{nodeId}/lock`
#[derive(Debug, Clone)]
pub struct LockNode {
    pub node_id: String,
    pub body: NodeBodyLock,
    pub params: LockNodeParams,
}

impl Endpoint for LockNode {
    type Output = NodeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (422, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let spec = RequestSpec::new(Method::POST, "/nodes/{nodeId}/lock").path("nodeId", self.node_id.as_str());
        with_include(spec, &self.params).json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /nodes/{nodeId}/unlock`
#[derive(Debug, Clone)]
pub struct UnlockNode {
    pub node_id: String,
    pub params: UnlockNodeParams,
}

impl Endpoint for UnlockNode {
    type Output = NodeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (422, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let spec = RequestSpec::new(Method::POST, "/nodes/{nodeId}/unlock").path("nodeId", self.node_id.as_str());
        Ok(with_include(spec, &self.params))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /nodes/{nodeId}/content`
///
/// The payload is the raw file content.
#[derive(Debug, Clone)]
pub struct GetNodeContent {
    pub node_id: String,
    pub params: GetNodeContentParams,
}

impl Endpoint for GetNodeContent {
    type Output = Vec<u8>;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (206, Outcome::Parsed),
        (304, Outcome::Known),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (416, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/nodes/{nodeId}/content")
            .path("nodeId", self.node_id.as_str())
            .query("attachment", &self.params.attachment))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_raw(content)
    }
}

impl CoreApi {
    /// Gets a node by id or alias.
    pub fn get_node(&self, node_id: impl Into<String>, params: GetNodeParams) -> Call<'_, GetNode> {
        Call::new(
            &self.client,
            GetNode {
                node_id: node_id.into(),
                params,
            },
        )
    }

    /// Lists the children of a folder node.
    pub fn list_node_children(
        &self,
        node_id: impl Into<String>,
        params: ListNodeChildrenParams,
    ) -> Call<'_, ListNodeChildren> {
        Call::new(
            &self.client,
            ListNodeChildren {
                node_id: node_id.into(),
                params,
            },
        )
    }

    /// Creates a child of `node_id`.
    pub fn create_node(
        &self,
        node_id: impl Into<String>,
        body: NodeBodyCreate,
        params: CreateNodeParams,
    ) -> Call<'_, CreateNode> {
        Call::new(
            &self.client,
            CreateNode {
                node_id: node_id.into(),
                body,
                params,
            },
        )
    }

    /// Updates a node's name, type, aspects or properties.
    pub fn update_node(
        &self,
        node_id: impl Into<String>,
        body: NodeBodyUpdate,
        params: UpdateNodeParams,
    ) -> Call<'_, UpdateNode> {
        Call::new(
            &self.client,
            UpdateNode {
                node_id: node_id.into(),
                body,
                params,
            },
        )
    }

    /// Deletes a node, to the trashcan unless `permanent` is set.
    pub fn delete_node(&self, node_id: impl Into<String>, params: DeleteNodeParams) -> Call<'_, DeleteNode> {
        Call::new(
            &self.client,
            DeleteNode {
                node_id: node_id.into(),
                params,
            },
        )
    }

    /// Copies a node under another parent.
    pub fn copy_node(
        &self,
        node_id: impl Into<String>,
        body: NodeBodyCopy,
        params: CopyNodeParams,
    ) -> Call<'_, CopyNode> {
        Call::new(
            &self.client,
            CopyNode {
                node_id: node_id.into(),
                body,
                params,
            },
        )
    }

    /// Moves a node under another parent.
    pub fn move_node(
        &self,
        node_id: impl Into<String>,
        body: NodeBodyMove,
        params: MoveNodeParams,
    ) -> Call<'_, MoveNode> {
        Call::new(
            &self.client,
            MoveNode {
                node_id: node_id.into(),
                body,
                params,
            },
        )
    }

    /// Locks a file node.
    pub fn lock_node(
        &self,
        node_id: impl Into<String>,
        body: NodeBodyLock,
        params: LockNodeParams,
    ) -> Call<'_, LockNode> {
        Call::new(
            &self.client,
            LockNode {
                node_id: node_id.into(),
                body,
                params,
            },
        )
    }

    /// Releases a lock.
    pub fn unlock_node(&self, node_id: impl Into<String>, params: UnlockNodeParams) -> Call<'_, UnlockNode> {
        Call::new(
            &self.client,
            UnlockNode {
                node_id: node_id.into(),
                params,
            },
        )
    }

    /// Downloads a file node's content.
    pub fn get_node_content(
        &self,
        node_id: impl Into<String>,
        params: GetNodeContentParams,
    ) -> Call<'_, GetNodeContent> {
        Call::new(
            &self.client,
            GetNodeContent {
                node_id: node_id.into(),
                params,
            },
        )
    }
}
