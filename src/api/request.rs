//
//  alfresco-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Building
//!
//! Pure request construction shared by every operation: the tri-state
//! [`Param`] used for optional arguments, the [`QueryValue`] encoding rules,
//! and [`RequestSpec`], the transport-independent description of one HTTP call.
//!
//! ## Example
//!
//! ```rust
//! use alfresco_client::api::request::{Param, RequestSpec};
//! use reqwest::Method;
//!
//! let spec = RequestSpec::new(Method::GET, "/nodes/{nodeId}/children")
//!     .path("nodeId", "-root-")
//!     .query("skipCount", &Param::Value(0))
//!     .query("maxItems", &Param::<i64>::Unset)
//!     .query("include", &Param::Value(vec!["path".to_string(), "properties".to_string()]));
//!
//! let url = spec.url("http://localhost:8080/alfresco/api/-default-/public/alfresco/versions/1").unwrap();
//! assert_eq!(
//!     url.as_str(),
//!     "http://localhost:8080/alfresco/api/-default-/public/alfresco/versions/1/nodes/-root-/children?skipCount=0&include=path%2Cproperties"
//! );
//! ```

use reqwest::Method;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use url::Url;

use super::common::ApiError;

/// A tri-state optional argument.
///
/// Distinguishes "leave this out of the request" from "send an explicit null".
///
/// | Variant | Query string | JSON body |
/// |---------|--------------|-----------|
/// | `Unset` | omitted | omitted |
/// | `Null` | omitted | `null` |
/// | `Value(v)` | `name=v` | `v` |
///
/// Body fields of type `Param<T>` must be annotated with
/// `#[serde(default, skip_serializing_if = "Param::is_unset")]`.
///
/// # Example
///
/// ```rust
/// use alfresco_client::api::request::Param;
///
/// let name: Param<String> = "report.pdf".to_string().into();
/// assert_eq!(name.as_option().map(String::as_str), Some("report.pdf"));
/// assert!(Param::<String>::default().is_unset());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param<T> {
    /// Omit the parameter entirely.
    Unset,
    /// Send an explicit null (bodies only; dropped from query strings).
    Null,
    /// Send this value.
    Value(T),
}

impl<T> Param<T> {
    /// Returns `true` if the parameter should be omitted.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` for an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value, if one was provided.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Maps a provided value, keeping `Unset` and `Null` as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Param<U> {
        match self {
            Self::Unset => Param::Unset,
            Self::Null => Param::Null,
            Self::Value(v) => Param::Value(f(v)),
        }
    }

    /// Converts an option, treating `None` as "not provided" (`Unset`).
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }
}

impl<T> Default for Param<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Param<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Param<T> {
    /// A present `null` becomes `Null`; a missing key falls back to
    /// `Default` (`Unset`) through `#[serde(default)]`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|v| v.map_or(Self::Null, Self::Value))
    }
}

/// Encoding of a value as a query-string parameter.
///
/// Lists are comma separated, matching Alfresco's `include=path,properties`
/// convention.
pub trait QueryValue {
    fn to_query(&self) -> String;
}

impl QueryValue for String {
    fn to_query(&self) -> String {
        self.clone()
    }
}

impl QueryValue for &str {
    fn to_query(&self) -> String {
        (*self).to_string()
    }
}

impl QueryValue for bool {
    fn to_query(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i32 {
    fn to_query(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i64 {
    fn to_query(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for u32 {
    fn to_query(&self) -> String {
        self.to_string()
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn to_query(&self) -> String {
        self.iter().map(QueryValue::to_query).collect::<Vec<_>>().join(",")
    }
}

/// Transport-independent description of one HTTP call.
///
/// Built by [`Endpoint::build_request`](super::operation::Endpoint::build_request)
/// and executed by [`AlfrescoClient`](super::client::AlfrescoClient). The
/// template uses `{name}` placeholders that [`path`](Self::path) fills in.
///
/// # Fields
///
/// * `method` - The HTTP method
/// * `template` - URL template relative to the API base (e.g. `/nodes/{nodeId}`)
/// * `path_params` - Values for the template placeholders
/// * `query` - Query pairs, in insertion order, without unset parameters
/// * `body` - Optional JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub template: &'static str,
    pub path_params: Vec<(&'static str, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Starts a request for `method` on `template`.
    pub fn new(method: Method, template: &'static str) -> Self {
        Self {
            method,
            template,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Binds a `{name}` placeholder of the template.
    pub fn path(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds a query parameter unless it is `Unset` or `Null`.
    pub fn query<T: QueryValue>(mut self, name: &str, param: &Param<T>) -> Self {
        if let Param::Value(v) = param {
            self.query.push((name.to_string(), v.to_query()));
        }
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if the body cannot be encoded.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Serialization)?);
        Ok(self)
    }

    /// Returns the template's path segments with placeholders substituted.
    ///
    /// Segments are returned unencoded; [`url`](Self::url) percent-encodes
    /// each one, so a value containing `/` stays a single segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when a placeholder has no bound value,
    /// or renders to an empty, `.` or `..` segment.
    pub fn path_segments(&self) -> Result<Vec<String>, ApiError> {
        self.template
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.render_segment(segment))
            .collect()
    }

    fn render_segment(&self, segment: &str) -> Result<String, ApiError> {
        let mut rendered = String::with_capacity(segment.len());
        let mut rest = segment;

        while let Some(start) = rest.find('{') {
            let end = rest[start..]
                .find('}')
                .map(|i| start + i)
                .ok_or_else(|| ApiError::InvalidUrl(format!("unterminated placeholder in {}", self.template)))?;
            let name = &rest[start + 1..end];
            let value = self
                .path_params
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .ok_or_else(|| ApiError::InvalidUrl(format!("missing path parameter '{}'", name)))?;

            rendered.push_str(&rest[..start]);
            rendered.push_str(value);
            rest = &rest[end + 1..];
        }

        rendered.push_str(rest);
        if matches!(rendered.as_str(), "" | "." | "..") {
            return Err(ApiError::InvalidUrl(format!(
                "path segment '{}' in {} would not address a resource",
                rendered, self.template
            )));
        }
        Ok(rendered)
    }

    /// Renders the full URL against an API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the base is not an absolute
    /// http(s) URL or a placeholder is unbound.
    pub fn url(&self, base_url: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let segments = self.path_segments()?;

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base URL", base_url)))?;
            path.pop_if_empty();
            path.extend(segments.iter().map(String::as_str));
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }

    /// Returns the value of a query parameter, if present.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "http://localhost:8080/alfresco/api/-default-/public/alfresco/versions/1";

    #[test]
    fn test_path_interpolation() {
        let spec = RequestSpec::new(Method::GET, "/nodes/{nodeId}/renditions/{renditionId}")
            .path("nodeId", "abc-123")
            .path("renditionId", "doclib");
        assert_eq!(spec.path_segments().unwrap(), vec!["nodes", "abc-123", "renditions", "doclib"]);
        assert_eq!(spec.url(BASE).unwrap().path(), "/alfresco/api/-default-/public/alfresco/versions/1/nodes/abc-123/renditions/doclib");
    }

    #[test]
    fn test_path_values_are_encoded_as_one_segment() {
        let spec = RequestSpec::new(Method::GET, "/people/{personId}").path("personId", "jane doe/x");
        let url = spec.url(BASE).unwrap();
        assert!(url.path().ends_with("/people/jane%20doe%2Fx"));
    }

    #[test]
    fn test_missing_path_param() {
        let spec = RequestSpec::new(Method::GET, "/nodes/{nodeId}");
        assert!(matches!(spec.url(BASE), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_dot_segments_rejected() {
        for value in ["..", ".", ""] {
            let spec = RequestSpec::new(Method::GET, "/nodes/{nodeId}/children").path("nodeId", value);
            assert!(matches!(spec.url(BASE), Err(ApiError::InvalidUrl(_))), "{value:?}");
        }

        let spec = RequestSpec::new(Method::GET, "/nodes/{nodeId}/children").path("nodeId", "...");
        assert!(spec.url(BASE).unwrap().path().ends_with("/nodes/.../children"));
    }

    #[test]
    fn test_unset_and_null_query_params_are_dropped() {
        let spec = RequestSpec::new(Method::GET, "/sites")
            .query("skipCount", &Param::Value(10))
            .query("maxItems", &Param::<i64>::Unset)
            .query("orderBy", &Param::<Vec<String>>::Null)
            .query("permanent", &Param::Value(true));
        assert_eq!(
            spec.query,
            vec![
                ("skipCount".to_string(), "10".to_string()),
                ("permanent".to_string(), "true".to_string()),
            ]
        );
        assert_eq!(spec.url(BASE).unwrap().query(), Some("skipCount=10&permanent=true"));
    }

    #[test]
    fn test_no_query_leaves_url_clean() {
        let spec = RequestSpec::new(Method::GET, "/discovery");
        let url = spec.url("http://localhost:8080/alfresco/api/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/alfresco/api/discovery");
    }

    #[test]
    fn test_param_serde() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Body {
            #[serde(default, skip_serializing_if = "Param::is_unset")]
            name: Param<String>,
            #[serde(default, skip_serializing_if = "Param::is_unset")]
            title: Param<String>,
        }

        let body = Body {
            name: Param::Value("a".into()),
            title: Param::Null,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"name": "a", "title": null}));

        let unset = Body {
            name: Param::Unset,
            title: Param::Unset,
        };
        assert_eq!(serde_json::to_value(&unset).unwrap(), json!({}));

        let parsed: Body = serde_json::from_value(json!({"title": null})).unwrap();
        assert_eq!(parsed.name, Param::Unset);
        assert_eq!(parsed.title, Param::Null);
    }

    #[test]
    fn test_json_body() {
        let spec = RequestSpec::new(Method::POST, "/tickets")
            .json(&json!({"userId": "admin", "password": "admin"}))
            .unwrap();
        assert_eq!(spec.body, Some(json!({"userId": "admin", "password": "admin"})));
    }
}
