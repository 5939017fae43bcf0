//
//  alfresco-client
//  tests/status_handling.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use alfresco_client::api::client::UnexpectedStatusPolicy;
use alfresco_client::api::core::{GetNodeParams, ListNodeChildrenParams};
use alfresco_client::api::request::Param;
use alfresco_client::api::ApiError;
use mockito::Matcher;
use reqwest::StatusCode;

use common::*;

#[tokio::test]
async fn test_declared_error_is_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("{}/nodes/missing", CORE_PATH).as_str())
        .with_status(404)
        .with_body(not_found_body())
        .expect(2)
        .create_async()
        .await;

    let alfresco = client(&server.url(), UnexpectedStatusPolicy::Raise);
    let node = alfresco
        .core()
        .get_node("missing", GetNodeParams::default())
        .send()
        .await
        .unwrap();
    assert!(node.is_none());

    let response = alfresco
        .core()
        .get_node("missing", GetNodeParams::default())
        .send_detailed()
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.parsed.is_none());
    assert_eq!(
        response.error().map(|e| e.error.brief_summary),
        Some("The entity with id: missing was not found".to_string())
    );
}

#[tokio::test]
async fn test_undeclared_status_policy() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("{}/nodes/-root-", CORE_PATH).as_str())
        .with_status(418)
        .with_body("short and stout")
        .expect(2)
        .create_async()
        .await;

    let strict = client(&server.url(), UnexpectedStatusPolicy::Raise);
    let err = strict
        .core()
        .get_node("-root-", GetNodeParams::default())
        .send()
        .await
        .unwrap_err();
    match err {
        ApiError::UnexpectedStatus { status, content } => {
            assert_eq!(status.as_u16(), 418);
            assert_eq!(content, b"short and stout");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }

    let lenient = client(&server.url(), UnexpectedStatusPolicy::Ignore);
    let node = lenient
        .core()
        .get_node("-root-", GetNodeParams::default())
        .send()
        .await
        .unwrap();
    assert!(node.is_none());
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("{}/nodes/-root-", CORE_PATH).as_str())
        .with_status(200)
        .with_body(r#"{"entry":{"id":42}}"#)
        .create_async()
        .await;

    let alfresco = client(&server.url(), UnexpectedStatusPolicy::Ignore);
    let err = alfresco
        .core()
        .get_node("-root-", GetNodeParams::default())
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { status, .. } if status == StatusCode::OK));
}

#[tokio::test]
async fn test_query_parameters_on_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("{}/nodes/-my-/children", CORE_PATH).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("maxItems".into(), "5".into()),
            Matcher::UrlEncoded("include".into(), "path,aspectNames".into()),
            Matcher::UrlEncoded("where".into(), "(isFolder=true)".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"list":{"pagination":{"count":0,"hasMoreItems":false,"skipCount":0,"maxItems":5},"entries":[]}}"#)
        .create_async()
        .await;

    let alfresco = client(&server.url(), UnexpectedStatusPolicy::Raise);
    let params = ListNodeChildrenParams {
        max_items: Param::Value(5),
        include: Param::Value(vec!["path".into(), "aspectNames".into()]),
        where_: Param::Value("(isFolder=true)".into()),
        skip_count: Param::Null,
        ..Default::default()
    };
    let page = alfresco
        .core()
        .list_node_children("-my-", params)
        .send()
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.items().count(), 0);
    assert!(!page.pagination().has_more_items);
}

#[tokio::test]
async fn test_network_error_propagates() {
    let alfresco = client("http://127.0.0.1:9", UnexpectedStatusPolicy::Ignore);
    let err = alfresco
        .core()
        .get_node("-root-", GetNodeParams::default())
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
