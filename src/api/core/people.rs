//
//  alfresco-client
//  api/core/people.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Person types and operations.
//!
//! `-me-` addresses the authenticated user wherever a person id is expected.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CoreApi;
use crate::api::common::{ApiError, Entry, Paging};
use crate::api::operation::{decode_json, Call, Endpoint, Outcome};
use crate::api::request::{Param, RequestSpec};

/// A person (user account).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,

    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    pub email: String,

    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notifications_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_names: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Employer details of a [`Person`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

pub type PersonEntry = Entry<Person>;
pub type PersonPaging = Paging<Person>;

/// Body of `create_person`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonBodyCreate {
    pub id: String,

    pub first_name: String,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub last_name: Param<String>,

    pub email: String,

    pub password: String,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub enabled: Param<bool>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub email_notifications_enabled: Param<bool>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub job_title: Param<String>,

    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub properties: Param<Map<String, Value>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl PersonBodyCreate {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the id, first name or email is
    /// blank, or the email has no `@`.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let (id, first_name, email) = (id.into(), first_name.into(), email.into());
        for (field, value) in [("id", &id), ("firstName", &first_name), ("email", &email)] {
            if value.trim().is_empty() {
                return Err(ApiError::Validation(format!("{} must not be empty", field)));
            }
        }
        if !email.contains('@') {
            return Err(ApiError::Validation(format!("'{}' is not an email address", email)));
        }
        Ok(Self {
            id,
            first_name,
            email,
            password: password.into(),
            ..Default::default()
        })
    }
}

/// Query parameters of `list_people`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPeopleParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub order_by: Param<Vec<String>>,
    pub include: Param<Vec<String>>,
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `get_person`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetPersonParams {
    pub fields: Param<Vec<String>>,
}

/// Query parameters of `create_person`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreatePersonParams {
    pub fields: Param<Vec<String>>,
}

/// `GET /people`
#[derive(Debug, Clone, Default)]
pub struct ListPeople {
    pub params: ListPeopleParams,
}

impl Endpoint for ListPeople {
    type Output = PersonPaging;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        let p = &self.params;
        Ok(RequestSpec::new(Method::GET, "/people")
            .query("skipCount", &p.skip_count)
            .query("maxItems", &p.max_items)
            .query("orderBy", &p.order_by)
            .query("include", &p.include)
            .query("fields", &p.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `GET /people/{personId}`
#[derive(Debug, Clone)]
pub struct GetPerson {
    pub person_id: String,
    pub params: GetPersonParams,
}

impl Endpoint for GetPerson {
    type Output = PersonEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (200, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (404, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::GET, "/people/{personId}")
            .path("personId", self.person_id.as_str())
            .query("fields", &self.params.fields))
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

/// `POST /people`
#[derive(Debug, Clone)]
pub struct CreatePerson {
    pub body: PersonBodyCreate,
    pub params: CreatePersonParams,
}

impl Endpoint for CreatePerson {
    type Output = PersonEntry;
    const RESPONSES: &'static [(u16, Outcome)] = &[
        (201, Outcome::Parsed),
        (400, Outcome::Known),
        (401, Outcome::Known),
        (403, Outcome::Known),
        (409, Outcome::Known),
        (422, Outcome::Known),
    ];

    fn build_request(&self) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/people")
            .query("fields", &self.params.fields)
            .json(&self.body)
    }

    fn decode(content: &[u8]) -> Result<Self::Output, serde_json::Error> {
        decode_json(content)
    }
}

impl CoreApi {
    pub fn list_people(&self, params: ListPeopleParams) -> Call<'_, ListPeople> {
        Call::new(&self.client, ListPeople { params })
    }

    /// Gets a person by id, or the current user with `-me-`.
    pub fn get_person(&self, person_id: impl Into<String>, params: GetPersonParams) -> Call<'_, GetPerson> {
        Call::new(
            &self.client,
            GetPerson {
                person_id: person_id.into(),
                params,
            },
        )
    }

    /// Creates a person. Requires administrator rights.
    pub fn create_person(&self, body: PersonBodyCreate, params: CreatePersonParams) -> Call<'_, CreatePerson> {
        Call::new(&self.client, CreatePerson { body, params })
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
    fn test_person_body_validation() {
        assert!(PersonBodyCreate::new("jdoe", "Jane", "jane@example.com", "pw").is_ok());
        assert!(PersonBodyCreate::new("", "Jane", "jane@example.com", "pw").is_err());
        assert!(PersonBodyCreate::new("jdoe", "Jane", "not-an-email", "pw").is_err());
    }

    #[test]
    fn test_create_person_body() {
        let mut body = PersonBodyCreate::new("jdoe", "Jane", "jane@example.com", "pw").unwrap();
        body.enabled = Param::Value(true);
        let spec = CreatePerson {
            body,
            params: CreatePersonParams::default(),
        }
        .build_request()
        .unwrap();
        assert_eq!(
            spec.body,
            Some(json!({"id": "jdoe", "firstName": "Jane", "email": "jane@example.com", "password": "pw", "enabled": true}))
        );
    }

    #[test]
    fn test_get_person_parse() {
        let body = br#"{"entry":{"id":"admin","firstName":"Administrator","email":"admin@alfresco.com","enabled":true,
            "company":{"organization":"Hyland"},"capabilities":{"isAdmin":true}}}"#;
        let entry = GetPerson::parse_response(StatusCode::OK, body, UnexpectedStatusPolicy::Raise)
            .unwrap()
            .unwrap();
        assert_eq!(entry.entry.company.unwrap().organization.as_deref(), Some("Hyland"));
        assert_eq!(entry.entry.additional_fields["capabilities"], json!({"isAdmin": true}));
    }

    #[test]
    fn test_person_round_trip() {
        let entry = PersonEntry::from_value(json!({
            "entry": {
                "id": "jdoe",
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jdoe@example.com",
                "enabled": true,
                "company": {"organization": "Acme", "vatNumber": "GB123"},
                "capabilities": {"isAdmin": false, "isGuest": false}
            }
        }))
        .unwrap();
        let person = &entry.entry;
        assert_eq!(person.company.as_ref().unwrap().additional_fields.get("vatNumber"), Some(&json!("GB123")));
        assert_eq!(person.additional_fields.get("capabilities"), Some(&json!({"isAdmin": false, "isGuest": false})));
        assert_eq!(PersonEntry::from_value(entry.to_value().unwrap()).unwrap(), entry);
    }

    #[test]
    fn test_person_body_null_fields() {
        let body = PersonBodyCreate {
            last_name: Param::Null,
            job_title: Param::Null,
            ..PersonBodyCreate::new("jdoe", "Jane", "jdoe@example.com", "secret").unwrap()
        };
        let value = body.to_value().unwrap();
        assert_eq!(value["lastName"], Value::Null);
        assert_eq!(value["jobTitle"], Value::Null);
        assert_eq!(PersonBodyCreate::from_value(value).unwrap(), body);
    }
}
