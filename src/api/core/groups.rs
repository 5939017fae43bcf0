//
//  alfresco-client
//  api/core/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group types and operations.
//!
//! Group ids carry the `GROUP_` prefix (e.g. `GROUP_ALFRESCO_ADMINISTRATORS`).
//! Members are people or other groups.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CoreApi;
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_empty, decode_json, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

/// Prefix every group authority carries.
pub const GROUP_PREFIX: &str = "GROUP_";

/// Kind of a group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberType {
    #[default]
    Person,
    Group,
}

/// A group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,

    pub display_name: String,

    pub is_root: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<String>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// A member of a group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub id: String,

    pub display_name: String,

    pub member_type: MemberType,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type GroupEntry = Entry<Group>;
pub type GroupPaging = Paging<Group>;
pub type GroupMemberEntry = Entry<GroupMember>;
pub type GroupMemberPaging = Paging<GroupMember>;

/// Body of `create_group`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBodyCreate {
    pub id: String,

    pub display_name: String,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub parent_ids: Param<Vec<String>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl GroupBodyCreate {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] unless the id starts with `GROUP_`
    /// and has a name after the prefix.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Result<Self, ApiError> {
        let id = id.into();
        match id.strip_prefix(GROUP_PREFIX) {
            Some(name) if !name.trim().is_empty() => {}
            _ => {
                return Err(ApiError::Validation(format!(
                    "group id '{}' must start with {} followed by a name",
                    id, GROUP_PREFIX
                )))
            }
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
            ..Default::default()
        })
    }
}

/// Body of `create_group_membership`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembershipBodyCreate {
    /// Person id or group id to add.
    pub id: String,

    pub member_type: MemberType,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl GroupMembershipBodyCreate {
    pub fn person(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_type: MemberType::Person,
            additional_fields: Map::new(),
        }
    }

    pub fn group(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            member_type: MemberType::Group,
            additional_fields: Map::new(),
        }
    }
}

/// Query parameters of `list_groups`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupsParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub order_by: Param<Vec<String>>,
    pub include: Param<Vec<String>>,
    /// e.g. `(isRoot=true)`
    pub where_: Param<String>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `delete_group`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteGroupParams {
    /// Also delete subgroups.
    pub cascade: Param<bool>,
}

/// Query parameters of `list_group_members`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGroupMembersParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub order_by: Param<Vec<String>>,
    /// e.g. `(memberType='PERSON')`
    pub where_: Param<String>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `create_group_membership`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateGroupMembershipParams {
    pub fields: Param<Vec<String>>,
}

pub type GetGroupParams = super::IncludeParams;
pub type CreateGroupParams = super::IncludeParams;

/// `GET /groups`
#[derive(Debug, Clone, Default)]
pub struct ListGroups {
    pub params: ListGroupsParams,
}

impl Endpoint for ListGroups {
    type Output = GroupPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        Ok(RequestSpec::new(Method::GET, "/groups")
            .query("skipCount", &p.skip_count)
            .query("maxItems", &p.max_items)
            .query("orderBy", &p.order_by)
            .query("include", &p.include)
            .query("where", &p.where_)
            .query("fields", &p.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /groups/{groupId}`
#[derive(Debug, Clone)]
pub struct GetGroup {
    pub group_id: String,
    pub params: GetGroupParams,
}

impl Endpoint for GetGroup {
    type Output = GroupEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/groups/{groupId}")
            .path("groupId", self.group_id.as_str())
            .query("include", &self.params.include)
            .query("fields", &self.params.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /groups`
#[derive(Debug, Clone)]
pub struct CreateGroup {
    pub body: GroupBodyCreate,
    pub params: CreateGroupParams,
}

impl Endpoint for CreateGroup {
    type Output = GroupEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (409, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/groups")
            .query("include", &self.params.include)
            .query("fields", &self.params.fields)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `DELETE /groups/{groupId}`
#[derive(Debug, Clone)]
pub struct DeleteGroup {
    pub group_id: String,
    pub params: DeleteGroupParams,
}

impl Endpoint for DeleteGroup {
    type Output = ();
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (204, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::DELETE, "/groups/{groupId}")
            .path("groupId", self.group_id.as_str())
            .query("cascade", &self.params.cascade))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_empty(content)
    }
}

/// `GET /groups/{groupId}/members`
#[derive(Debug, Clone)]
pub struct ListGroupMembers {
    pub group_id: String,
    pub params: ListGroupMembersParams,
}

impl Endpoint for ListGroupMembers {
    type Output = GroupMemberPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        Ok(RequestSpec::new(Method::GET, "/groups/{groupId}/members")
            .path("groupId", self.group_id.as_str())
            .query("skipCount", &p.skip_count)
            .query("maxItems", &p.max_items)
            .query("orderBy", &p.order_by)
            .query("where", &p.where_)
            .query("fields", &p.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /groups/{groupId}/members`
#[derive(Debug, Clone)]
pub struct CreateGroupMembership {
    pub group_id: String,
    pub body: GroupMembershipBodyCreate,
    pub params: CreateGroupMembershipParams,
}

impl Endpoint for CreateGroupMembership {
    type Output = GroupMemberEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/groups/{groupId}/members")
            .path("groupId", self.group_id.as_str())
            .query("fields", &self.params.fields)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl CoreApi {
    pub fn list_groups(&self, params: ListGroupsParams) -> Call<'_, ListGroups> {
        Call::new(&self.client, ListGroups { params })
    }

    pub fn get_group(&self, group_id: impl Into<String>, params: GetGroupParams) -> Call<'_, GetGroup> {
        Call::new(
            &self.client,
            GetGroup {
                group_id: group_id.into(),
                params,
            },
        )
    }

    pub fn create_group(&self, body: GroupBodyCreate, params: CreateGroupParams) -> Call<'_, CreateGroup> {
        Call::new(&self.client, CreateGroup { body, params })
    }

    pub fn delete_group(&self, group_id: impl Into<String>, params: DeleteGroupParams) -> Call<'_, DeleteGroup> {
        Call::new(
            &self.client,
            DeleteGroup {
                group_id: group_id.into(),
                params,
            },
        )
    }

    pub fn list_group_members(
        &self,
        group_id: impl Into<String>,
        params: ListGroupMembersParams,
    ) -> Call<'_, ListGroupMembers> {
        Call::new(
            &self.client,
            ListGroupMembers {
                group_id: group_id.into(),
                params,
            },
        )
    }

    /// Adds a person or group to a group.
    pub fn create_group_membership(
        &self,
        group_id: impl Into<String>,
        body: GroupMembershipBodyCreate,
        params: CreateGroupMembershipParams,
    ) -> Call<'_, CreateGroupMembership> {
        Call::new(
            &self.client,
            CreateGroupMembership {
                group_id: group_id.into(),
                body,
                params,
            },
        )
    }
}
