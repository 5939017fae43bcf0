//
//  alfresco-client
//  api/model/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Model API: read-only view of the content model's aspects and types.
//!
//! Shares its base path with the core API.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::AlfrescoClient;
use super::common::{ApiError, Entry, Paging};
use super::operation::{decode_json, Call, Endpoint, Outcome};
use super::request::{Param, RequestSpec};

/// A property declared by an aspect or type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_multi_valued: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// The model an aspect or type belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_prefix: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Fields shared by aspects and types.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    /// Prefixed name, e.g. `cm:titled`.
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_container: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_property: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyDefinition>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type Aspect = ClassDefinition;
pub type Type = ClassDefinition;
pub type AspectEntry = Entry<Aspect>;
pub type AspectPaging = Paging<Aspect>;
pub type TypeEntry = Entry<Type>;
pub type TypePaging = Paging<Type>;

/// Query parameters of `list_aspects` and `list_types`.
///
/// `where_` filters by model or parent, e.g.
/// `(modelId in ('cm:contentmodel'))` or `(parentId in ('cm:content'))`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListClassesParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub where_: Param<String>,
    pub include: Param<Vec<String>>,
}

pub type ListAspectsParams = ListClassesParams;
pub type ListTypesParams = ListClassesParams;

impl ListClassesParams {
    fn apply(&self, spec: RequestSpec) -> RequestSpec {
        spec.query("skipCount", &self.skip_count)
            .query("maxItems", &self.max_items)
            .query("where", &self.where_)
            .query("include", &self.include)
    }
}

/// `GET /aspects`
#[derive(Debug, Clone, Default)]
pub struct ListAspects {
    pub params: ListAspectsParams,
}

impl Endpoint for ListAspects {
    type Output = AspectPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known), (401, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(self.params.apply(RequestSpec::new(Method::GET, "/aspects")))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /aspects/{aspectId}`
#[derive(Debug, Clone)]
pub struct GetAspect {
    pub aspect_id: String,
}

impl Endpoint for GetAspect {
    type Output = AspectEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/aspects/{aspectId}").path("aspectId", self.aspect_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /types`
#[derive(Debug, Clone, Default)]
pub struct ListTypes {
    pub params: ListTypesParams,
}

impl Endpoint for ListTypes {
    type Output = TypePaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known), (401, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(self.params.apply(RequestSpec::new(Method::GET, "/types")))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /types/{typeId}`
#[derive(Debug, Clone)]
pub struct GetType {
    pub type_id: String,
}

impl Endpoint for GetType {
    type Output = TypeEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/types/{typeId}").path("typeId", self.type_id.as_str()))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// Façade over the model API.
#[derive(Debug, Clone)]
pub struct ModelApi {
    client: AlfrescoClient,
}

impl ModelApi {
    pub fn new(client: AlfrescoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AlfrescoClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut AlfrescoClient {
        &mut self.client
    }

    pub fn list_aspects(&self, params: ListAspectsParams) -> Call<'_, ListAspects> {
        Call::new(&self.client, ListAspects { params })
    }

    pub fn get_aspect(&self, aspect_id: impl Into<String>) -> Call<'_, GetAspect> {
        Call::new(
            &self.client,
            GetAspect {
                aspect_id: aspect_id.into(),
            },
        )
    }

    pub fn list_types(&self, params: ListTypesParams) -> Call<'_, ListTypes> {
        Call::new(&self.client, ListTypes { params })
    }

    pub fn get_type(&self, type_id: impl Into<String>) -> Call<'_, GetType> {
        Call::new(
            &self.client,
            GetType {
                type_id: type_id.into(),
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
    fn test_aspect_parse() {
        let body = br#"{"entry":{"id":"cm:titled","title":"Titled","model":{"id":"cm:contentmodel","namespacePrefix":"cm"},
            "properties":[{"id":"cm:title","dataType":"d:mltext","isMandatory":false}]}}"#;
        let entry = GetAspect::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        assert_eq!(entry.entry.model.unwrap().namespace_prefix.as_deref(), Some("cm"));
        assert_eq!(entry.entry.properties.unwrap()[0].data_type.as_deref(), Some("d:mltext"));
    }

    #[test]
    fn test_list_types_where() {
        let spec = ListTypes {
            params: ListTypesParams {
                where_: Param::Value("(parentId in ('cm:content'))".into()),
                max_items: Param::Value(5),
                ..Default::default()
            },
        }
        .build_request()
        .unwrap();
        assert_eq!(spec.query_value("maxItems"), Some("5"));
        assert_eq!(spec.query_value("where"), Some("(parentId in ('cm:content'))"));
    }

    #[test]
    fn test_class_definition_round_trip() {
        let entry = AspectEntry::from_value(json!({
            "entry": {
                "id": "cm:titled",
                "title": "Titled",
                "isContainer": false,
                "model": {"id": "cm:contentmodel", "namespacePrefix": "cm", "status": "ACTIVE"},
                "properties": [{"id": "cm:title", "dataType": "d:mltext", "isMandatory": false, "defaultValue": ""}],
                "associations": []
            }
        }))
        .unwrap();
        let aspect = &entry.entry;
        assert_eq!(aspect.model.as_ref().unwrap().additional_fields.get("status"), Some(&json!("ACTIVE")));
        assert_eq!(aspect.properties.as_ref().unwrap()[0].additional_fields.get("defaultValue"), Some(&json!("")));
        assert_eq!(aspect.additional_fields.get("associations"), Some(&json!([])));
        assert_eq!(AspectEntry::from_value(entry.to_value().unwrap()).unwrap(), entry);

        let as_type = TypeEntry::from_value(entry.to_value().unwrap()).unwrap();
        assert_eq!(as_type.entry.id, "cm:titled");
    }
}
