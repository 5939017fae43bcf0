//
//  alfresco-client
//  cli/person.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Person commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::core::{GetPersonParams, Person};
use crate::output::{format_bool, print_field, TableOutput};

use super::{require, GlobalOptions};

#[derive(Args, Debug)]
pub struct PersonCommand {
    #[command(subcommand)]
    pub command: PersonSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PersonSubcommand {
    /// Show a person; `-me-` is the authenticated user
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    #[arg(default_value = "-me-", allow_hyphen_values = true)]
    pub person: String,
}

impl TableOutput for Person {
    fn print_table(&self, color: bool) {
        let name = self.display_name.clone().unwrap_or_else(|| {
            match &self.last_name {
                Some(last) => format!("{} {}", self.first_name, last),
                None => self.first_name.clone(),
            }
        });
        if color {
            println!("{}", style(name).bold());
        } else {
            println!("{}", name);
        }
        println!();
        print_field("Id", &self.id, color);
        print_field("Email", &self.email, color);
        print_field("Enabled", &format_bool(self.enabled, color), color);
        if let Some(title) = &self.job_title {
            print_field("Job title", title, color);
        }
        if let Some(company) = self.company.as_ref().and_then(|c| c.organization.as_deref()) {
            print_field("Company", company, color);
        }
    }
}

impl PersonCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PersonSubcommand::Get(args) => {
                let alfresco = global.connect()?;
                let entry = require(
                    alfresco
                        .core()
                        .get_person(&args.person, GetPersonParams::default())
                        .send_detailed()
                        .await?,
                )?;
                global.writer().write(&entry.entry)
            }
        }
    }
}
