//
//  alfresco-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Login command
//!
//! Tickets are saved in the settings file, next to the host and username
//! they were issued for. Later commands send the ticket when no password
//! is given.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::output::{print_field, TableOutput};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Print the ticket without saving it
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Debug, Serialize)]
struct LoginResult {
    host: String,
    username: Option<String>,
    ticket: String,
    saved: bool,
}

impl TableOutput for LoginResult {
    fn print_table(&self, color: bool) {
        print_field("Host", &self.host, color);
        print_field("User", self.username.as_deref().unwrap_or("-"), color);
        print_field("Ticket", &self.ticket, color);
    }
}

impl LoginArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        let mut alfresco = global.connect_with(&config)?;
        let ticket = alfresco.authenticate().await?;

        let username = global.username.clone().or_else(|| config.connection.username.clone());
        let result = LoginResult {
            host: alfresco.host().to_string(),
            username: username.clone(),
            ticket: ticket.clone(),
            saved: !self.no_save,
        };

        if !self.no_save {
            config.connection.host = Some(result.host.clone());
            config.connection.username = username;
            config.connection.ticket = Some(ticket);
            config.save()?;
        }

        let writer = global.writer();
        writer.write(&result)?;
        if result.saved {
            writer.write_success(&format!("Logged in to {}", result.host));
        }
        Ok(())
    }
}
