//
//  alfresco-client
//  api/search_sql/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search SQL API: `POST /sql` against the Solr index.
//!
//! Each result row is a list of `{label, value}` pairs. With `format: "solr"`
//! the server answers in Solr's native shape instead; that document has no
//! `list` key and is kept whole in [`SqlResultSetPaging::additional_fields`].

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::AlfrescoClient;
use super::common::{ApiError, Pagination};
use super::operation::{decode_json, Call, Endpoint, Outcome};
use super::request::{Param, RequestSpec};

/// Body of `POST /sql`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlRequest {
    pub stmt: String,

    /// `default` or `solr`.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub format: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub locales: Param<Vec<String>>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub timezone: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub include_metadata: Param<bool>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub filter_queries: Param<Vec<String>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl SqlRequest {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank statement.
    pub fn new(stmt: impl Into<String>) -> Result<Self, ApiError> {
        let stmt = stmt.into();
        if stmt.trim().is_empty() {
            return Err(ApiError::Validation("SQL statement must not be empty".to_string()));
        }
        Ok(Self {
            stmt,
            ..Default::default()
        })
    }
}

/// One column of a result row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlResultColumn {
    pub label: String,

    #[serde(default)]
    pub value: Value,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlResultRow {
    #[serde(default)]
    pub entry: Vec<SqlResultColumn>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl SqlResultRow {
    /// Returns the value of the column labelled `label`.
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entry.iter().find(|c| c.label == label).map(|c| &c.value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlResultSetList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    #[serde(default)]
    pub entries: Vec<SqlResultRow>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Response of `POST /sql`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlResultSetPaging {
    /// Absent for `format: "solr"` responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<SqlResultSetList>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl SqlResultSetPaging {
    pub fn rows(&self) -> &[SqlResultRow] {
        self.list.as_ref().map(|l| l.entries.as_slice()).unwrap_or_default()
    }
}

/// `POST /sql`
#[derive(Debug, Clone)]
pub struct SearchSql {
    pub body: SqlRequest,
}

impl Endpoint for SearchSql {
    type Output = SqlResultSetPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/sql").json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// Façade over the search SQL API.
#[derive(Debug, Clone)]
pub struct SearchSqlApi {
    client: AlfrescoClient,
}

impl SearchSqlApi {
    pub fn new(client: AlfrescoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AlfrescoClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut AlfrescoClient {
        &mut self.client
    }

    pub fn search_sql(&self, body: SqlRequest) -> Call<'_, SearchSql> {
        Call::new(&self.client, SearchSql { body })
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
    fn test_blank_statement_rejected() {
        assert!(matches!(SqlRequest::new("   "), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_rows() {
        let body = br#"{"list":{"pagination":{"count":1,"hasMoreItems":false,"skipCount":0,"maxItems":100},
            "entries":[{"list-entry":null,"entry":[{"label":"cm_name","value":"budget.xlsx"},{"label":"cm_owner","value":"admin"}]}]}}"#;
        let result = SearchSql::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        assert_eq!(result.rows().len(), 1);
        assert_eq!(result.rows()[0].get("cm_name"), Some(&json!("budget.xlsx")));
    }

    #[test]
    fn test_solr_format_lands_in_additional_fields() {
        let body = br#"{"result-set":{"docs":[{"cm_name":"budget.xlsx"},{"EOF":true,"RESPONSE_TIME":12}]}}"#;
        let result = SearchSql::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        assert!(result.list.is_none());
        assert!(result.rows().is_empty());
        assert!(result.additional_fields.contains_key("result-set"));
    }

    #[test]
    fn test_sql_result_round_trip() {
        let page = SqlResultSetPaging::from_value(json!({
            "list": {
                "pagination": {"count": 1, "hasMoreItems": false, "skipCount": 0, "maxItems": 100},
                "entries": [{"entry": [{"label": "cm_name", "value": "budget.xlsx", "type": "text"}]}],
                "timing": 12
            }
        }))
        .unwrap();
        assert_eq!(page.rows()[0].entry[0].additional_fields.get("type"), Some(&json!("text")));
        assert_eq!(page.list.as_ref().unwrap().additional_fields.get("timing"), Some(&json!(12)));
        assert_eq!(SqlResultSetPaging::from_value(page.to_value().unwrap()).unwrap(), page);
    }

    #[test]
    fn test_sql_request_null_timezone() {
        let request = SqlRequest {
            timezone: Param::Null,
            ..SqlRequest::new("select cm_name from alfresco").unwrap()
        };
        let value = request.to_value().unwrap();
        assert_eq!(value["timezone"], Value::Null);
        assert_eq!(SqlRequest::from_value(value).unwrap(), request);
    }
}
