//
//  alfresco-client
//  cli/discovery.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository information

use anyhow::Result;
use clap::Args;
use console::style;

use crate::api::discovery::RepositoryInfo;
use crate::output::{format_bool, print_header, TableBuilder, TableOutput};

use super::{require, GlobalOptions};

#[derive(Args, Debug)]
pub struct DiscoveryArgs {
    /// Also list installed modules
    #[arg(long, short = 'm')]
    pub modules: bool,
}

impl TableOutput for RepositoryInfo {
    fn print_table(&self, color: bool) {
        let title = format!("Alfresco Content Services {} {}", self.edition, self.version.display);
        if color {
            println!("{}", style(title).bold());
        } else {
            println!("{}", title);
        }
        println!();

        let mut table = TableBuilder::new().color(color).headers(["PROPERTY", "VALUE"]);
        if let Some(id) = &self.id {
            table = table.row(["Repository id".to_string(), id.clone()]);
        }
        table = table.row(["Schema".to_string(), self.version.schema.to_string()]);
        if let Some(status) = &self.status {
            table = table
                .row(["Read only".to_string(), format_bool(status.is_read_only, color)])
                .row(["Audit".to_string(), format_bool(status.is_audit_enabled, color)])
                .row(["Quick share".to_string(), format_bool(status.is_quick_share_enabled, color)])
                .row(["Thumbnails".to_string(), format_bool(status.is_thumbnail_generation_enabled, color)]);
        }
        if let Some(license) = &self.license {
            table = table
                .row(["License".to_string(), format!("{} ({})", license.holder, license.mode)])
                .row(["Expires".to_string(), format!("{} ({} days)", license.expires_at, license.remaining_days)]);
        }
        table.print();
    }
}

impl DiscoveryArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let response = alfresco.discovery().get_repository_information().send_detailed().await?;
        if response.status.as_u16() == 501 {
            anyhow::bail!("Discovery is disabled on this repository (501)");
        }
        let info = require(response)?.entry.repository;

        let writer = global.writer();
        writer.write(&info)?;

        if self.modules && writer.format() == crate::output::OutputFormat::Table {
            let modules = info.modules.unwrap_or_default();
            println!();
            print_header("Modules", writer.color_enabled());
            TableBuilder::new()
                .color(writer.color_enabled())
                .headers(["ID", "TITLE", "VERSION", "STATE"])
                .rows(modules.iter().map(|m| {
                    [&m.id, &m.title, &m.version, &m.install_state]
                        .map(|v| v.clone().unwrap_or_else(|| "-".to_string()))
                }))
                .print();
        }
        Ok(())
    }
}
