//
//  alfresco-client
//  cli/site.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::core::{GetSiteParams, ListSitesParams, Site, SiteVisibility};
use crate::api::request::Param;
use crate::output::{or_dash, print_field, truncate, TableOutput, TableRow};

use super::{require, GlobalOptions};

#[derive(Args, Debug)]
pub struct SiteCommand {
    #[command(subcommand)]
    pub command: SiteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SiteSubcommand {
    /// List sites visible to the user
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one site
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, short = 'l', default_value = "25")]
    pub limit: i64,

    #[arg(long, default_value = "0")]
    pub skip: i64,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub site: String,
}

fn visibility_label(visibility: SiteVisibility, color: bool) -> String {
    let (text, styled) = match visibility {
        SiteVisibility::Public => ("PUBLIC", style("PUBLIC").green()),
        SiteVisibility::Moderated => ("MODERATED", style("MODERATED").yellow()),
        SiteVisibility::Private => ("PRIVATE", style("PRIVATE").red()),
    };
    if color {
        styled.to_string()
    } else {
        text.to_string()
    }
}

impl TableOutput for Site {
    fn print_table(&self, color: bool) {
        let title = if color {
            style(&self.title).bold().to_string()
        } else {
            self.title.clone()
        };
        println!("{}", title);
        println!();
        print_field("Id", &self.id, color);
        print_field("Visibility", &visibility_label(self.visibility, color), color);
        print_field("Preset", &or_dash(self.preset.as_deref()), color);
        if let Some(role) = &self.role {
            print_field("Your role", role, color);
        }
        if let Some(description) = &self.description {
            print_field("Description", description, color);
        }
    }
}

impl TableRow for Site {
    fn headers() -> &'static [&'static str] {
        &["ID", "TITLE", "VISIBILITY", "DESCRIPTION"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            visibility_label(self.visibility, color),
            truncate(&or_dash(self.description.as_deref()), 50),
        ]
    }
}

impl SiteCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            SiteSubcommand::List(args) => self.list(args, global).await,
            SiteSubcommand::Get(args) => self.get(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let params = ListSitesParams {
            skip_count: Param::Value(args.skip),
            max_items: Param::Value(args.limit),
            ..Default::default()
        };
        let paging = require(alfresco.core().list_sites(params).send_detailed().await?)?;

        let writer = global.writer();
        let total = paging.pagination().total_items;
        let sites = paging.into_items();
        writer.write_list(&sites)?;
        if let Some(total) = total {
            writer.write_info(&format!("Showing {} of {} site(s)", sites.len(), total));
        }
        Ok(())
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let entry = require(
            alfresco
                .core()
                .get_site(&args.site, GetSiteParams::default())
                .send_detailed()
                .await?,
        )?;
        global.writer().write(&entry.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_row() {
        let site = Site {
            id: "swsdp".into(),
            title: "Sample: Web Site Design Project".into(),
            visibility: SiteVisibility::Moderated,
            ..Default::default()
        };
        assert_eq!(site.row(false), vec!["swsdp", "Sample: Web Site Design Project", "MODERATED", "-"]);
    }
}
