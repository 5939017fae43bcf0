//
//  alfresco-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod check;
mod config;
mod discovery;
mod node;
mod person;
mod search;
mod site;

pub use auth::LoginArgs;
pub use check::CheckArgs;
pub use config::ConfigCommand;
pub use discovery::DiscoveryArgs;
pub use node::NodeCommand;
pub use person::PersonCommand;
pub use search::{SearchArgs, SqlArgs};
pub use site::SiteCommand;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use reqwest::StatusCode;

use crate::alfresco::Alfresco;
use crate::api::client::format_api_error;
use crate::api::{ApiError, ApiResponse};
use crate::auth::AuthCredential;
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

#[derive(Parser, Debug)]
#[command(
    name = "alfresco",
    version,
    about = "Work with Alfresco Content Services from the command line",
    long_about = "alfresco is a CLI for the Alfresco Content Services REST API.\n\n\
                  It browses nodes, sites and people, runs searches and checks that every API is reachable.",
    propagate_version = true,
    after_help = "Use 'alfresco <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Connection options shared by every command.
///
/// Flags win over environment variables, which win over the settings file.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Repository host, e.g. https://acs.example.com or localhost:8080
    #[arg(long, global = true, env = "ALFRESCO_HOST")]
    pub host: Option<String>,

    #[arg(long, short = 'u', global = true, env = "ALFRESCO_USERNAME")]
    pub username: Option<String>,

    #[arg(long, global = true, env = "ALFRESCO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }

    /// Builds a client from flags, environment and the settings file.
    ///
    /// A username and password take precedence over a saved ticket.
    pub fn connect(&self) -> Result<Alfresco> {
        self.connect_with(&Config::load()?)
    }

    pub fn connect_with(&self, config: &Config) -> Result<Alfresco> {
        let host = self
            .host
            .clone()
            .or_else(|| config.connection.host.clone())
            .ok_or_else(|| {
                anyhow!("No host configured. Pass --host, set ALFRESCO_HOST or run 'alfresco config set connection.host <host>'")
            })?;

        let verify_ssl = !self.insecure && config.connection.verify_ssl;
        if !verify_ssl {
            self.writer().write_warning("TLS certificate verification is disabled");
        }

        let mut builder = Alfresco::builder(host).verify_ssl(verify_ssl);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder = config.apply_base_paths(builder)?;

        let username = self.username.clone().or_else(|| config.connection.username.clone());
        match (username, self.password.clone()) {
            (Some(username), Some(password)) => builder = builder.basic_auth(username, password),
            _ => {
                if let Some(ticket) = &config.connection.ticket {
                    builder = builder.credential(AuthCredential::ticket(ticket.clone()));
                }
            }
        }

        Ok(builder.build()?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe every API and report which ones answer
    Check(CheckArgs),

    /// Exchange username and password for a ticket and save it
    Login(LoginArgs),

    Node(NodeCommand),

    Site(SiteCommand),

    Person(PersonCommand),

    /// Run an AFTS, CMIS or Lucene query
    Search(SearchArgs),

    /// Run a SQL query through the search service
    Sql(SqlArgs),

    /// Show repository edition, version and status
    Discovery(DiscoveryArgs),

    Config(ConfigCommand),

    Version,
}

/// Returns the parsed body, or turns a known error status into an error
/// carrying Alfresco's `briefSummary`.
///
/// 401 becomes [`ApiError::AuthFailed`] so the binary can exit with the
/// authentication exit code.
pub(crate) fn require<T>(response: ApiResponse<T>) -> Result<T> {
    let status = response.status;
    match response.parsed {
        Some(value) => Ok(value),
        None if status == StatusCode::UNAUTHORIZED => {
            Err(ApiError::AuthFailed(format_api_error(status, &response.content).to_string()).into())
        }
        None => Err(format_api_error(status, &response.content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiKind;
    use clap::CommandFactory;
    use reqwest::header::HeaderMap;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["alfresco", "node", "get", "-root-", "--host", "localhost:8080", "--json"]).unwrap();
        assert_eq!(cli.global.host.as_deref(), Some("localhost:8080"));
        assert!(cli.global.json);
    }

    #[test]
    fn test_connect_requires_host() {
        let options = GlobalOptions::default();
        assert!(options.connect_with(&Config::default()).is_err());
    }

    #[test]
    fn test_connect_prefers_password_over_ticket() {
        let mut config = Config::default();
        config.connection.host = Some("localhost:8080".into());
        config.connection.ticket = Some("TICKET_saved".into());

        let options = GlobalOptions {
            username: Some("admin".into()),
            password: Some("secret".into()),
            ..Default::default()
        };
        let alfresco = options.connect_with(&config).unwrap();
        assert_eq!(
            alfresco.client(ApiKind::Core).config().auth,
            Some(AuthCredential::basic("admin", "secret"))
        );

        let alfresco = GlobalOptions::default().connect_with(&config).unwrap();
        assert_eq!(
            alfresco.client(ApiKind::Core).config().auth,
            Some(AuthCredential::ticket("TICKET_saved"))
        );
    }

    #[test]
    fn test_insecure_flag() {
        let mut config = Config::default();
        config.connection.host = Some("https://acs.example.com".into());
        let options = GlobalOptions {
            insecure: true,
            ..Default::default()
        };
        let alfresco = options.connect_with(&config).unwrap();
        assert!(!alfresco.client(ApiKind::Search).config().verify_ssl);
    }

    #[test]
    fn test_require_maps_unauthorized() {
        let response: ApiResponse<()> = ApiResponse {
            status: StatusCode::UNAUTHORIZED,
            headers: HeaderMap::new(),
            content: br#"{"error":{"statusCode":401,"briefSummary":"Authentication failed"}}"#.to_vec(),
            parsed: None,
        };
        let err = require(response).unwrap_err();
        assert!(matches!(err.downcast_ref::<ApiError>(), Some(ApiError::AuthFailed(_))));
        assert!(err.to_string().contains("Authentication failed"));
    }
}
