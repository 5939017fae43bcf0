//
//  alfresco-client
//  api/workflow/tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User tasks.
//!
//! Claiming, completing and reassigning a task are all `update_task` calls:
//! set the fields on [`TaskBody`] and name them in `select`.
//!
//! # Example
//!
//! ```rust
//! use alfresco_client::api::workflow::{TaskBody, UpdateTaskParams};
//! use alfresco_client::api::request::Param;
//!
//! let (body, params) = TaskBody::with_state("completed");
//! assert_eq!(params.select, Param::Value(vec!["state".to_string()]));
//! assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"state": "completed"}));
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{WorkflowApi, WorkflowListParams};
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_json, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_definition_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,

    pub started_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_ms: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_resource_key: Option<String>,

    /// `unclaimed`, `claimed`, `delegated`, `resolved` or `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type TaskEntry = Entry<Task>;
pub type TaskPaging = Paging<Task>;
pub type ListTasksParams = WorkflowListParams;

/// Body of `update_task`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub name: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub due_at: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub priority: Param<i64>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub assignee: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub owner: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub state: Param<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl TaskBody {
    /// A state change (`claimed`, `completed`, ...) with the matching `select`.
    pub fn with_state(state: impl Into<String>) -> (Self, UpdateTaskParams) {
        let body = Self {
            state: Param::Value(state.into()),
            ..Default::default()
        };
        let params = UpdateTaskParams {
            select: Param::Value(vec!["state".to_string()]),
        };
        (body, params)
    }
}

/// Query parameters of `update_task`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateTaskParams {
    /// Names of the body fields to apply; the server ignores the rest.
    pub select: Param<Vec<String>>,
}

/// `GET /tasks`
#[derive(Debug, Clone, Default)]
pub struct ListTasks {
    pub params: ListTasksParams,
}

impl Endpoint for ListTasks {
    type Output = TaskPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known), (401, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(self.params.apply(RequestSpec::new(Method::GET, "/tasks")))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /tasks/{taskId}`
#[derive(Debug, Clone)]
pub struct GetTask {
    pub task_id: String,
}

impl Endpoint for GetTask {
    type Output = TaskEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (401, Outcome::Known), (404, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/tasks/{taskId}").path("taskId", self.task_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `PUT /tasks/{taskId}`
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub task_id: String,
    pub body: TaskBody,
    pub params: UpdateTaskParams,
}

impl Endpoint for UpdateTask {
    type Output = TaskEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
        (409, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::PUT, "/tasks/{taskId}")
            .path("taskId", self.task_id.as_str())
            .query("select", &self.params.select)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl WorkflowApi {
    pub fn list_tasks(&self, params: ListTasksParams) -> Call<'_, ListTasks> {
        Call::new(&self.client, ListTasks { params })
    }

    pub fn get_task(&self, task_id: impl Into<String>) -> Call<'_, GetTask> {
        Call::new(
            &self.client,
            GetTask {
                task_id: task_id.into(),
            },
        )
    }

    pub fn update_task(
        &self,
        task_id: impl Into<String>,
        body: TaskBody,
        params: UpdateTaskParams,
    ) -> Call<'_, UpdateTask> {
        Call::new(
            &self.client,
            UpdateTask {
                task_id: task_id.into(),
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
    fn test_update_task_request() {
        let (body, params) = TaskBody::with_state("claimed");
        let spec = UpdateTask {
            task_id: "27".into(),
            body,
            params,
        }
        .build_request()
        .unwrap();
        assert_eq!(spec.method, Method::PUT);
        assert_eq!(spec.query_value("select"), Some("state"));
    }

    #[test]
    fn test_update_conflict_known() {
        let parsed = UpdateTask::parse_response(StatusCode::CONFLICT, b"{}", UnexpectedStatusPolicy::Raise).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_task_round_trip() {
        let entry = TaskEntry::from_value(json!({
            "entry": {
                "id": "4627",
                "processId": "4611",
                "name": "Adhoc Task",
                "startedAt": "2026-01-12T10:00:00.000+0000",
                "priority": 2,
                "assignee": "admin",
                "state": "claimed",
                "localVariables": []
            }
        }))
        .unwrap();
        assert_eq!(entry.entry.additional_fields.get("localVariables"), Some(&json!([])));
        assert_eq!(TaskEntry::from_value(entry.to_value().unwrap()).unwrap(), entry);
    }

    #[test]
    fn test_task_body_null_due_date() {
        let body = TaskBody {
            due_at: Param::Null,
            assignee: Param::Value("jdoe".into()),
            ..Default::default()
        };
        let value = body.to_value().unwrap();
        assert_eq!(value, json!({"dueAt": null, "assignee": "jdoe"}));
        assert_eq!(TaskBody::from_value(value).unwrap(), body);
    }
}
