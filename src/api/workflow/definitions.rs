//
//  alfresco-client
//  api/workflow/definitions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Deployed process definitions.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{WorkflowApi, WorkflowListParams};
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_json, Call, Endpoint, Outcome};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    /// e.g. `activitiAdhoc:1:4`
    pub id: String,

    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_form_resource_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphic_notation_defined: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type ProcessDefinitionEntry = Entry<ProcessDefinition>;
pub type ProcessDefinitionPaging = Paging<ProcessDefinition>;
pub type ListProcessDefinitionsParams = WorkflowListParams;

/// `GET /process-definitions`
#[derive(Debug, Clone, Default)]
pub struct ListProcessDefinitions {
    pub params: ListProcessDefinitionsParams,
}

impl Endpoint for ListProcessDefinitions {
    type Output = ProcessDefinitionPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known), (401, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(self.params.apply(RequestSpec::new(Method::GET, "/process-definitions")))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /process-definitions/{processDefinitionId}`
#[derive(Debug, Clone)]
pub struct GetProcessDefinition {
    pub process_definition_id: String,
}

impl Endpoint for GetProcessDefinition {
    type Output = ProcessDefinitionEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (401, Outcome::Known), (404, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/process-definitions/{processDefinitionId}")
            .path("processDefinitionId", self.process_definition_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl WorkflowApi {
    pub fn list_process_definitions(
        &self,
        params: ListProcessDefinitionsParams,
    ) -> Call<'_, ListProcessDefinitions> {
        Call::new(&self.client, ListProcessDefinitions { params })
    }

    pub fn get_process_definition(
        &self,
        process_definition_id: impl Into<String>,
    ) -> Call<'_, GetProcessDefinition> {
        Call::new(
            &self.client,
            GetProcessDefinition {
                process_definition_id: process_definition_id.into(),
            },
        )
    }
}
