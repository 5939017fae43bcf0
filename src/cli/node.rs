//
//  alfresco-client
//  cli/node.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Node commands
//!
//! Node ids may be a UUID or one of the aliases `-root-`, `-my-` and `-shared-`.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::core::{
    CreateNodeParams, DeleteNodeParams, GetNodeParams, ListNodeChildrenParams, Node, NodeBodyCreate,
};
use crate::api::request::Param;
use crate::output::{format_bool, or_dash, print_field, truncate, TableOutput, TableRow};

use super::{require, GlobalOptions};

#[derive(Args, Debug)]
pub struct NodeCommand {
    #[command(subcommand)]
    pub command: NodeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NodeSubcommand {
    /// Show one node
    Get(GetArgs),

    /// List the children of a folder
    #[command(visible_alias = "ls")]
    Children(ChildrenArgs),

    /// Create a folder or empty file
    Create(CreateArgs),

    /// Delete a node (to the trashcan unless --permanent)
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    #[arg(default_value = "-root-", allow_hyphen_values = true)]
    pub node: String,

    /// Path relative to the node, e.g. Sites/swsdp
    #[arg(long, short = 'p')]
    pub path: Option<String>,

    /// Extra fields to include, e.g. path,aspectNames
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ChildrenArgs {
    #[arg(default_value = "-root-", allow_hyphen_values = true)]
    pub node: String,

    #[arg(long, short = 'l', default_value = "25")]
    pub limit: i64,

    #[arg(long, default_value = "0")]
    pub skip: i64,

    /// Filter, e.g. "(isFolder=true)"
    #[arg(long = "where")]
    pub where_: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Parent folder, e.g. `-my-` or a node id
    #[arg(allow_hyphen_values = true)]
    pub parent: String,

    pub name: String,

    #[arg(long = "type", short = 't', default_value = "cm:folder")]
    pub node_type: String,

    /// Rename on name clash instead of failing
    #[arg(long)]
    pub auto_rename: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[arg(allow_hyphen_values = true)]
    pub node: String,

    #[arg(long)]
    pub permanent: bool,
}

impl TableOutput for Node {
    fn print_table(&self, color: bool) {
        let title = if color {
            style(&self.name).bold().to_string()
        } else {
            self.name.clone()
        };
        println!("{}", title);
        println!();
        print_field("Id", &self.id, color);
        print_field("Type", &self.node_type, color);
        print_field("Folder", &format_bool(self.is_folder, color), color);
        if let Some(parent) = &self.parent_id {
            print_field("Parent", parent, color);
        }
        if let Some(path) = self.path.as_ref().and_then(|p| p.name.as_deref()) {
            print_field("Path", path, color);
        }
        if let Some(content) = &self.content {
            let size = content.size_in_bytes.map(|s| format!(", {} bytes", s)).unwrap_or_default();
            print_field("Content", &format!("{}{}", content.mime_type, size), color);
        }
        print_field("Created", &format!("{} by {}", self.created_at, self.created_by_user.display_name), color);
        print_field("Modified", &format!("{} by {}", self.modified_at, self.modified_by_user.display_name), color);
        if let Some(aspects) = &self.aspect_names {
            print_field("Aspects", &aspects.join(", "), color);
        }
    }
}

impl TableRow for Node {
    fn headers() -> &'static [&'static str] {
        &["NAME", "TYPE", "ID", "MODIFIED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let name = if self.is_folder && color {
            style(format!("{}/", self.name)).blue().to_string()
        } else if self.is_folder {
            format!("{}/", self.name)
        } else {
            truncate(&self.name, 48)
        };
        vec![
            name,
            self.node_type.clone(),
            self.id.clone(),
            or_dash(Some(self.modified_at.as_str()).filter(|m| !m.is_empty())),
        ]
    }
}

impl NodeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            NodeSubcommand::Get(args) => self.get(args, global).await,
            NodeSubcommand::Children(args) => self.children(args, global).await,
            NodeSubcommand::Create(args) => self.create(args, global).await,
            NodeSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let params = GetNodeParams {
            include: non_empty(&args.include),
            relative_path: Param::from_option(args.path.clone()),
            ..Default::default()
        };
        let entry = require(alfresco.core().get_node(&args.node, params).send_detailed().await?)?;
        global.writer().write(&entry.entry)
    }

    async fn children(&self, args: &ChildrenArgs, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let params = ListNodeChildrenParams {
            skip_count: Param::Value(args.skip),
            max_items: Param::Value(args.limit),
            where_: Param::from_option(args.where_.clone()),
            ..Default::default()
        };
        let paging = require(
            alfresco
                .core()
                .list_node_children(&args.node, params)
                .send_detailed()
                .await?,
        )?;

        let writer = global.writer();
        let pagination = paging.pagination().clone();
        let nodes = paging.into_items();
        writer.write_list(&nodes)?;
        if pagination.has_more_items {
            writer.write_info(&format!(
                "More results available, use --skip {}",
                pagination.next_skip_count().unwrap_or(args.skip + args.limit)
            ));
        }
        Ok(())
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let body = NodeBodyCreate::new(&args.name, &args.node_type)?;
        let params = CreateNodeParams {
            auto_rename: if args.auto_rename { Param::Value(true) } else { Param::Unset },
            ..Default::default()
        };
        let entry = require(
            alfresco
                .core()
                .create_node(&args.parent, body, params)
                .send_detailed()
                .await?,
        )?;

        let writer = global.writer();
        writer.write(&entry.entry)?;
        writer.write_success(&format!("Created {}", entry.entry.id));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let alfresco = global.connect()?;
        let params = DeleteNodeParams {
            permanent: if args.permanent { Param::Value(true) } else { Param::Unset },
        };
        require(alfresco.core().delete_node(&args.node, params).send_detailed().await?)?;
        global.writer().write_success(&format!("Deleted {}", args.node));
        Ok(())
    }
}

fn non_empty(values: &[String]) -> Param<Vec<String>> {
    if values.is_empty() {
        Param::Unset
    } else {
        Param::Value(values.to_vec())
    }
}
