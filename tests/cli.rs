//
//  alfresco-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use common::*;

/// The binary with an isolated home and no `ALFRESCO_*` variables.
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("alfresco").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("APPDATA", home.path())
        .env_remove("ALFRESCO_HOST")
        .env_remove("ALFRESCO_USERNAME")
        .env_remove("ALFRESCO_PASSWORD")
        .env_remove("ALFRESCO_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("check").and(contains("login")).and(contains("node")).and(contains("sql")));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(contains(format!("alfresco version {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_missing_host() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["node", "get", "-root-"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("error: No host configured"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_set_and_get() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["config", "set", "connection.host", "https://acs.example.com"])
        .assert()
        .success();
    cmd(&home)
        .args(["config", "get", "connection.host"])
        .assert()
        .success()
        .stdout("https://acs.example.com\n");
    cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains(".config/alfresco/config.toml"));
    cmd(&home)
        .args(["config", "set", "connection.verify_ssl", "maybe"])
        .assert()
        .failure();
}

#[test]
fn test_discovery_json() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", format!("{}/discovery", DISCOVERY_PATH).as_str())
        .with_status(200)
        .with_body(discovery_body())
        .create();

    cmd(&home)
        .args(["--host", &server.url(), "--json", "discovery"])
        .assert()
        .success()
        .stdout(contains("\"edition\": \"Community\""));
}

#[test]
fn test_unauthorized_exit_code() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", format!("{}/nodes/-root-", CORE_PATH).as_str())
        .with_status(401)
        .with_body(r#"{"error":{"statusCode":401,"briefSummary":"Authentication failed","stackTrace":"","descriptionURL":""}}"#)
        .create();

    cmd(&home)
        .args(["--host", &server.url(), "-u", "admin", "--password", "wrong", "node", "get"])
        .assert()
        .code(4)
        .stderr(contains("Authentication failed"));
}

#[test]
fn test_create_under_alias() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", format!("{}/nodes/-my-/children", CORE_PATH).as_str())
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"name":"Reports","nodeType":"cm:folder"}"#.to_string(),
        ))
        .with_status(201)
        .with_body(
            r#"{"entry":{"id":"0d1b7a3e","name":"Reports","nodeType":"cm:folder","isFolder":true,"isFile":false,
                "modifiedAt":"2026-01-12T10:00:00.000+0000","modifiedByUser":{"id":"admin","displayName":"Administrator"},
                "createdAt":"2026-01-12T10:00:00.000+0000","createdByUser":{"id":"admin","displayName":"Administrator"}}}"#,
        )
        .create();

    cmd(&home)
        .args(["--host", &server.url(), "--json", "node", "create", "-my-", "Reports"])
        .assert()
        .success()
        .stdout(contains("\"name\": \"Reports\""));
    mock.assert();
}

#[test]
fn test_insecure_warns() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", format!("{}/discovery", DISCOVERY_PATH).as_str())
        .with_status(200)
        .with_body(discovery_body())
        .create();

    cmd(&home)
        .args(["--host", &server.url(), "--insecure", "--json", "discovery"])
        .assert()
        .success()
        .stderr(contains("warning: TLS certificate verification is disabled"));
}
