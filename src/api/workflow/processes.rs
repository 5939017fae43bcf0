//
//  alfresco-client
//  api/workflow/processes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Process instances.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{WorkflowApi, WorkflowListParams};
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_empty, decode_json, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

/// A running or completed process instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,

    pub process_definition_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_definition_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_activity_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_user_id: Option<String>,

    pub started_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_ms: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete_activity_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_process_instance_id: Option<String>,

    #[serde(default)]
    pub completed: bool,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type ProcessEntry = Entry<Process>;
pub type ProcessPaging = Paging<Process>;
pub type ListProcessesParams = WorkflowListParams;

/// Body of `create_process`. Set either the definition key or id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessBody {
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub process_definition_key: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub process_definition_id: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub business_key: Param<String>,

    /// Process variables, e.g. `{"bpm_assignee": "admin"}`.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub variables: Param<Map<String, Value>>,

    /// Node ids attached to the workflow package.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub items: Param<Vec<String>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl ProcessBody {
    /// Starts the latest version of the definition with this key.
    pub fn by_key(key: impl Into<String>) -> Self {
        Self {
            process_definition_key: Param::Value(key.into()),
            ..Default::default()
        }
    }
}

/// `GET /processes`
#[derive(Debug, Clone, Default)]
pub struct ListProcesses {
    pub params: ListProcessesParams,
}

impl Endpoint for ListProcesses {
    type Output = ProcessPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known), (401, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(self.params.apply(RequestSpec::new(Method::GET, "/processes")))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /processes/{processId}`
#[derive(Debug, Clone)]
pub struct GetProcess {
    pub process_id: String,
}

impl Endpoint for GetProcess {
    type Output = ProcessEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (401, Outcome::Known), (404, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/processes/{processId}").path("processId", self.process_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /processes`
#[derive(Debug, Clone)]
pub struct CreateProcess {
    pub body: ProcessBody,
}

impl Endpoint for CreateProcess {
    type Output = ProcessEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/processes").json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `DELETE /processes/{processId}`
#[derive(Debug, Clone)]
pub struct DeleteProcess {
    pub process_id: String,
}

impl Endpoint for DeleteProcess {
    type Output = ();
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (204, Outcome::Parsed),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::DELETE, "/processes/{processId}").path("processId", self.process_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_empty(content)
    }
}

impl WorkflowApi {
    pub fn list_processes(&self, params: ListProcessesParams) -> Call<'_, ListProcesses> {
        Call::new(&self.client, ListProcesses { params })
    }

    pub fn get_process(&self, process_id: impl Into<String>) -> Call<'_, GetProcess> {
        Call::new(
            &self.client,
            GetProcess {
                process_id: process_id.into(),
            },
        )
    }

    pub fn create_process(&self, body: ProcessBody) -> Call<'_, CreateProcess> {
        Call::new(&self.client, CreateProcess { body })
    }

    /// Cancels a running process.
    pub fn delete_process(&self, process_id: impl Into<String>) -> Call<'_, DeleteProcess> {
        Call::new(
            &self.client,
            DeleteProcess {
                process_id: process_id.into(),
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
    fn test_create_process_body() {
        let mut body = ProcessBody::by_key("activitiAdhoc");
        let mut variables = Map::new();
        variables.insert("bpm_assignee".into(), json!("admin"));
        body.variables = Param::Value(variables);

        let spec = CreateProcess { body }.build_request().unwrap();
        assert_eq!(
            spec.body,
            Some(json!({"processDefinitionKey": "activitiAdhoc", "variables": {"bpm_assignee": "admin"}}))
        );
    }

    #[test]
    fn test_list_processes_where() {
        let spec = ListProcesses {
            params: ListProcessesParams {
                where_: Param::Value("(status = 'completed')".into()),
                ..Default::default()
            },
        }
        .build_request()
        .unwrap();
        assert_eq!(spec.query_value("where"), Some("(status = 'completed')"));
    }

    #[test]
    fn test_process_parse() {
        let body = br#"{"entry":{"id":"5","processDefinitionId":"activitiAdhoc:1:4","startedAt":"2026-01-12T10:00:00.000+0000","completed":false}}"#;
        let entry = GetProcess::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        assert_eq!(entry.entry.process_definition_id, "activitiAdhoc:1:4");
        assert!(!entry.entry.completed);
    }

    #[test]
    fn test_process_round_trip() {
        let entry = ProcessEntry::from_value(json!({
            "entry": {
                "id": "4611",
                "processDefinitionId": "activitiAdhoc:1:4",
                "processDefinitionKey": "activitiAdhoc",
                "startUserId": "admin",
                "startedAt": "2026-01-12T10:00:00.000+0000",
                "completed": false,
                "tenantId": "acme"
            }
        }))
        .unwrap();
        assert_eq!(entry.entry.additional_fields.get("tenantId"), Some(&json!("acme")));
        assert_eq!(ProcessEntry::from_value(entry.to_value().unwrap()).unwrap(), entry);
    }

    #[test]
    fn test_process_body_null_business_key() {
        let body = ProcessBody {
            business_key: Param::Null,
            ..ProcessBody::by_key("activitiAdhoc")
        };
        let value = body.to_value().unwrap();
        assert_eq!(value["businessKey"], Value::Null);
        assert_eq!(ProcessBody::from_value(value).unwrap(), body);
    }
}
