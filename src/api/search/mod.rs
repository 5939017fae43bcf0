//
//  alfresco-client
//  api/search/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Search API
//!
//! Full-text and metadata search through `POST /search`. Queries are written
//! in AFTS (the default), CMIS or Lucene.
//!
//! ## Example
//!
//! ```rust
//! use alfresco_client::api::search::{Paging, RequestQuery, SearchRequest, QueryLanguage};
//! use alfresco_client::api::request::Param;
//!
//! let mut request = SearchRequest::new(RequestQuery::afts("cm:name:budget*"));
//! request.paging = Param::Value(Paging { max_items: 25, skip_count: 0 });
//!
//! let json = serde_json::to_value(&request).unwrap();
//! assert_eq!(json["query"]["language"], "afts");
//! assert_eq!(json["paging"]["maxItems"], 25);
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::AlfrescoClient;
use super::common::{ApiError, Pagination, UserInfo};
use super::operation::{decode_json, Call, Endpoint, Outcome};
use super::request::{Param, RequestSpec};

/// Query language of a [`RequestQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLanguage {
    #[default]
    Afts,
    Cmis,
    Lucene,
}

/// The query string and its language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    pub query: String,

    #[serde(default)]
    pub language: QueryLanguage,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub user_query: Param<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl RequestQuery {
    pub fn new(query: impl Into<String>, language: QueryLanguage) -> Self {
        Self {
            query: query.into(),
            language,
            ..Default::default()
        }
    }

    pub fn afts(query: impl Into<String>) -> Self {
        Self::new(query, QueryLanguage::Afts)
    }
}

/// Page requested from the search service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub max_items: i64,
    pub skip_count: i64,
}

/// One sort clause.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SortClause {
    /// `FIELD`, `DOCUMENT` or `SCORE`.
    #[serde(rename = "type")]
    pub sort_type: String,

    pub field: String,

    pub ascending: bool,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Body of `POST /search`.
///
/// Facets, highlighting, spellcheck and scoping are passed through
/// `additional_fields` as raw JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: RequestQuery,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub paging: Param<Paging>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub include: Param<Vec<String>>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub fields: Param<Vec<String>>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub sort: Param<Vec<SortClause>>,

    /// Filter queries, e.g. `[{"query": "TYPE:'cm:content'"}]`.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub filter_queries: Param<Vec<Value>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl SearchRequest {
    pub fn new(query: RequestQuery) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }
}

/// A search hit: node fields plus search metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultNode {
    pub id: String,

    pub name: String,

    pub node_type: String,

    pub is_folder: bool,

    pub is_file: bool,

    pub modified_at: String,

    pub modified_by_user: UserInfo,

    pub created_at: String,

    pub created_by_user: UserInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchEntry>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Relevance score and highlights of a hit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Vec<Value>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Search-wide context: consistency, facets, spellcheck.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSetContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet_queries: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets_fields: Option<Vec<Value>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSetRowEntry {
    pub entry: ResultNode,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSetPagingList {
    pub pagination: Pagination,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ResultSetContext>,

    #[serde(default)]
    pub entries: Vec<ResultSetRowEntry>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Response of `POST /search`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSetPaging {
    pub list: ResultSetPagingList,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl ResultSetPaging {
    pub fn hits(&self) -> impl Iterator<Item = &ResultNode> {
        self.list.entries.iter().map(|e| &e.entry)
    }
}

/// `POST /search`
#[derive(Debug, Clone)]
pub struct Search {
    pub body: SearchRequest,
}

impl Endpoint for Search {
    type Output = ResultSetPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[(200, Outcome::Parsed), (400, Outcome::Known)];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/search").json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// Façade over the search API.
#[derive(Debug, Clone)]
pub struct SearchApi {
    client: AlfrescoClient,
}

impl SearchApi {
    pub fn new(client: AlfrescoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AlfrescoClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut AlfrescoClient {
        &mut self.client
    }

    pub fn search(&self, body: SearchRequest) -> Call<'_, Search> {
        Call::new(&self.client, Search { body })
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
    fn test_search_request_body() {
        let mut request = SearchRequest::new(RequestQuery::new("SELECT * FROM cmis:document", QueryLanguage::Cmis));
        request.filter_queries = Param::Value(vec![json!({"query": "TYPE:'cm:content'"})]);
        request
            .additional_fields
            .insert("highlight".into(), json!({"fields": [{"field": "cm:name"}]}));

        let spec = Search { body: request }.build_request().unwrap();
        assert_eq!(
            spec.body,
            Some(json!({
                "query": {"query": "SELECT * FROM cmis:document", "language": "cmis"},
                "filterQueries": [{"query": "TYPE:'cm:content'"}],
                "highlight": {"fields": [{"field": "cm:name"}]}
            }))
        );
    }

    #[test]
    fn test_search_result_parse() {
        let body = br#"{"list":{"pagination":{"count":1,"hasMoreItems":false,"totalItems":1,"skipCount":0,"maxItems":100},
            "context":{"consistency":{"lastTxId":42}},
            "entries":[{"entry":{"id":"a1","name":"budget.xlsx","nodeType":"cm:content","isFolder":false,"isFile":true,
                "modifiedAt":"2026-01-12T10:00:00.000+0000","modifiedByUser":{"displayName":"A","id":"a"},
                "createdAt":"2026-01-12T10:00:00.000+0000","createdByUser":{"displayName":"A","id":"a"},
                "search":{"score":1.5}}}]}}"#;
        let result = Search::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        let hit = result.hits().next().unwrap();
        assert_eq!(hit.name, "budget.xlsx");
        assert_eq!(hit.search.as_ref().unwrap().score, Some(1.5));
        assert_eq!(result.list.context.unwrap().consistency, Some(json!({"lastTxId": 42})));
    }

    #[test]
    fn test_bad_query_is_known() {
        let parsed = Search::parse_response(StatusCode::BAD_REQUEST, b"{}", UnexpectedStatusPolicy::Raise).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_result_set_round_trip() {
        let page = ResultSetPaging::from_value(json!({
            "list": {
                "pagination": {"count": 1, "hasMoreItems": false, "totalItems": 1, "skipCount": 0, "maxItems": 10},
                "context": {"consistency": {"lastTxId": 1120}, "spellCheck": {"type": "didYouMean"}},
                "entries": [{
                    "entry": {
                        "id": "a1b2",
                        "name": "budget.xlsx",
                        "nodeType": "cm:content",
                        "isFolder": false,
                        "isFile": true,
                        "modifiedAt": "2026-01-12T10:00:00.000+0000",
                        "modifiedByUser": {"id": "admin", "displayName": "Administrator"},
                        "createdAt": "2026-01-12T09:00:00.000+0000",
                        "createdByUser": {"id": "admin", "displayName": "Administrator"},
                        "search": {"score": 1.5, "explanation": "tf-idf"},
                        "location": "nodes"
                    }
                }]
            }
        }))
        .unwrap();
        let hit = page.hits().next().unwrap();
        assert_eq!(hit.search.as_ref().unwrap().additional_fields.get("explanation"), Some(&json!("tf-idf")));
        assert_eq!(hit.additional_fields.get("location"), Some(&json!("nodes")));
        assert!(page.list.context.as_ref().unwrap().additional_fields.contains_key("spellCheck"));
        assert_eq!(ResultSetPaging::from_value(page.to_value().unwrap()).unwrap(), page);
    }

    #[test]
    fn test_search_request_null_paging() {
        let request = SearchRequest {
            paging: Param::Null,
            ..SearchRequest::new(RequestQuery::afts("cm:name:budget*"))
        };
        let value = request.to_value().unwrap();
        assert_eq!(value["paging"], Value::Null);
        assert_eq!(SearchRequest::from_value(value).unwrap(), request);
    }
}
