//
//  alfresco-client
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use alfresco_client::api::client::UnexpectedStatusPolicy;
use alfresco_client::Alfresco;

pub const AUTH_PATH: &str = "/alfresco/api/-default-/public/authentication/versions/1";
pub const CORE_PATH: &str = "/alfresco/api/-default-/public/alfresco/versions/1";
pub const SEARCH_PATH: &str = "/alfresco/api/-default-/public/search/versions/1";
pub const WORKFLOW_PATH: &str = "/alfresco/api/-default-/public/workflow/versions/1";
pub const DISCOVERY_PATH: &str = "/alfresco/api";

pub const TICKET: &str = "TICKET_abc123";

pub fn client(server_url: &str, policy: UnexpectedStatusPolicy) -> Alfresco {
    Alfresco::builder(server_url)
        .basic_auth("admin", "admin")
        .unexpected_status(policy)
        .build()
        .unwrap()
}

pub fn ticket_body() -> String {
    format!(r#"{{"entry":{{"id":"{}","userId":"admin"}}}}"#, TICKET)
}

pub fn root_node_body() -> &'static str {
    r#"{"entry":{
        "id":"b4cff62a-664d-4d45-9302-98723eac1319",
        "name":"Company Home",
        "nodeType":"cm:folder",
        "isFolder":true,
        "isFile":false,
        "modifiedAt":"2026-01-12T10:00:00.000+0000",
        "modifiedByUser":{"id":"System","displayName":"System"},
        "createdAt":"2026-01-12T09:00:00.000+0000",
        "createdByUser":{"id":"System","displayName":"System"}
    }}"#
}

pub fn discovery_body() -> &'static str {
    r#"{"entry":{"repository":{
        "edition":"Community",
        "version":{"major":"23","minor":"2","patch":"0","hotfix":"0","schema":19000,"label":"r","display":"23.2.0 (r) schema 19000"},
        "status":{"isReadOnly":false,"isAuditEnabled":true,"isQuickShareEnabled":true,"isThumbnailGenerationEnabled":true}
    }}}"#
}

pub fn not_found_body() -> &'static str {
    r#"{"error":{"errorKey":"framework.exception.EntityNotFound","statusCode":404,"briefSummary":"The entity with id: missing was not found","stackTrace":"","descriptionURL":""}}"#
}

/// `Authorization` value for a ticket sent as Basic credentials.
pub fn ticket_authorization() -> String {
    use base64::Engine;
    format!("Basic {}", base64::engine::general_purpose::STANDARD.encode(TICKET))
}
