//
//  alfresco-client
//  tests/auth_flow.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use alfresco_client::api::client::UnexpectedStatusPolicy;
use alfresco_client::api::core::GetNodeParams;
use alfresco_client::api::{ApiError, ApiKind};
use alfresco_client::auth::AuthCredential;
use alfresco_client::Alfresco;
use mockito::Matcher;

use common::*;

#[tokio::test]
async fn test_authenticate_stores_ticket_on_auth_only() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("{}/tickets", AUTH_PATH).as_str())
        .match_body(Matcher::Json(serde_json::json!({"userId": "admin", "password": "admin"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(ticket_body())
        .create_async()
        .await;

    let mut alfresco = client(&server.url(), UnexpectedStatusPolicy::Ignore);
    let ticket = alfresco.authenticate().await.unwrap();

    mock.assert_async().await;
    assert_eq!(ticket, TICKET);
    assert_eq!(alfresco.client(ApiKind::Auth).config().auth, Some(AuthCredential::ticket(TICKET)));
    assert_eq!(
        alfresco.client(ApiKind::Core).config().auth,
        Some(AuthCredential::basic("admin", "admin"))
    );
}

#[tokio::test]
async fn test_shared_ticket_reaches_core_requests() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", format!("{}/tickets", AUTH_PATH).as_str())
        .with_status(201)
        .with_body(ticket_body())
        .create_async()
        .await;
    let node = server
        .mock("GET", format!("{}/nodes/-root-", CORE_PATH).as_str())
        .match_header("authorization", ticket_authorization().as_str())
        .with_status(200)
        .with_body(root_node_body())
        .create_async()
        .await;

    let mut alfresco = client(&server.url(), UnexpectedStatusPolicy::Raise);
    alfresco.authenticate().await.unwrap();
    alfresco.share_authentication().unwrap();

    for api in ApiKind::ALL {
        assert_eq!(alfresco.client(api).config().auth, Some(AuthCredential::ticket(TICKET)), "{api}");
    }

    let root = alfresco
        .core()
        .get_node("-root-", GetNodeParams::default())
        .send()
        .await
        .unwrap()
        .unwrap();
    node.assert_async().await;
    assert_eq!(root.entry.name, "Company Home");
    assert!(root.entry.is_folder);
}

#[tokio::test]
async fn test_rejected_credentials() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", format!("{}/tickets", AUTH_PATH).as_str())
        .with_status(403)
        .with_body(r#"{"error":{"statusCode":403,"briefSummary":"Login failed","stackTrace":"","descriptionURL":""}}"#)
        .create_async()
        .await;

    let mut alfresco = client(&server.url(), UnexpectedStatusPolicy::Ignore);
    let err = alfresco.authenticate().await.unwrap_err();
    match err {
        ApiError::AuthFailed(message) => assert!(message.contains("Login failed"), "{message}"),
        other => panic!("expected AuthFailed, got {other:?}"),
    }
    assert_eq!(
        alfresco.client(ApiKind::Auth).config().auth,
        Some(AuthCredential::basic("admin", "admin"))
    );
}

#[tokio::test]
async fn test_authenticate_requires_username_and_password() {
    let mut alfresco = Alfresco::builder("localhost:1").build().unwrap();
    assert!(matches!(alfresco.authenticate().await, Err(ApiError::AuthRequired)));
}

#[tokio::test]
async fn test_connectivity_report() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("{}/tickets/-me-", AUTH_PATH).as_str())
        .with_status(200)
        .with_body(format!(r#"{{"entry":{{"id":"{}"}}}}"#, TICKET))
        .create_async()
        .await;
    server
        .mock("GET", format!("{}/probes/-ready-", CORE_PATH).as_str())
        .with_status(200)
        .with_body(r#"{"entry":{"message":"readyProbe: Success - Tested"}}"#)
        .create_async()
        .await;
    server
        .mock("GET", format!("{}/discovery", DISCOVERY_PATH).as_str())
        .with_status(200)
        .with_body(discovery_body())
        .create_async()
        .await;
    server
        .mock("POST", format!("{}/search", SEARCH_PATH).as_str())
        .with_status(200)
        .with_body(r#"{"list":{"pagination":{"count":0,"hasMoreItems":false,"skipCount":0,"maxItems":1},"entries":[]}}"#)
        .create_async()
        .await;
    server
        .mock("POST", format!("{}/sql", SEARCH_PATH).as_str())
        .with_status(501)
        .create_async()
        .await;
    server
        .mock("GET", Matcher::Regex(format!("^{}/process-definitions", WORKFLOW_PATH)))
        .with_status(401)
        .create_async()
        .await;
    server
        .mock("GET", Matcher::Regex(format!("^{}/aspects", CORE_PATH)))
        .with_status(200)
        .with_body(r#"{"list":{"pagination":{"count":0,"hasMoreItems":false,"skipCount":0,"maxItems":1},"entries":[]}}"#)
        .create_async()
        .await;

    let alfresco = client(&server.url(), UnexpectedStatusPolicy::Ignore);
    let report = alfresco.check_connectivity().await;

    assert_eq!(report.results.len(), ApiKind::ALL.len());
    let outcome = |api| report.get(api).map(|r| r.outcome.to_string()).unwrap_or_default();
    assert_eq!(outcome(ApiKind::Auth), "reachable (200)");
    assert_eq!(outcome(ApiKind::Core), "reachable (200)");
    assert_eq!(outcome(ApiKind::Discovery), "reachable (200)");
    assert_eq!(outcome(ApiKind::Search), "reachable (200)");
    assert_eq!(outcome(ApiKind::SearchSql), "rejected (501)");
    assert_eq!(outcome(ApiKind::Workflow), "rejected (401)");
    assert_eq!(outcome(ApiKind::Model), "reachable (200)");
    assert!(!report.all_reachable());
    assert!(report
        .get(ApiKind::Workflow)
        .unwrap()
        .base_url
        .ends_with("/workflow/versions/1"));
}

#[tokio::test]
async fn test_unreachable_host_fails_probes() {
    let alfresco = Alfresco::builder("http://127.0.0.1:9").build().unwrap();
    let report = alfresco.check_connectivity().await;
    assert!(report
        .iter()
        .all(|r| matches!(r.outcome, alfresco_client::alfresco::ProbeOutcome::Failed(_))));
}
