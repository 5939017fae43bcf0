//
//  alfresco-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the settings file described in [`crate::config`].

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, CONFIG_KEYS};
use crate::output::write_json;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the whole configuration (tickets masked)
    Show,

    /// Print one value
    Get(GetArgs),

    /// Set one value, e.g. `connection.host https://acs.example.com`
    /// or `base_paths.search /custom/search`
    Set(SetArgs),

    /// Print the settings file location
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    pub key: String,

    pub value: String,
}

/// Keeps the first and last four characters of a ticket.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

fn masked(config: &Config) -> Config {
    let mut config = config.clone();
    config.connection.ticket = config.connection.ticket.as_deref().map(mask);
    config
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = masked(&Config::load()?);
        if global.json {
            return write_json(&config);
        }
        print!("{}", toml::to_string_pretty(&config)?);
        Ok(())
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            return write_json(&serde_json::json!({ "key": args.key, "value": value }));
        }
        match value {
            Some(v) => println!("{}", v),
            None if !CONFIG_KEYS.contains(&args.key.as_str()) && !args.key.starts_with("base_paths.") => {
                anyhow::bail!(
                    "Unknown configuration key '{}'. Valid keys: {}, base_paths.<api>",
                    args.key,
                    CONFIG_KEYS.join(", ")
                )
            }
            None => {}
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, &args.value)?;
        config.save()?;
        global.writer().write_success(&format!("Set {}", style(&args.key).bold()));
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if global.json {
            return write_json(&serde_json::json!({ "path": path.display().to_string() }));
        }
        println!("{}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("TICKET_8c4a2f1e9b7d"), "TICK…9b7d");
        assert_eq!(mask("short"), "*****");
    }

    #[test]
    fn test_masked_config() {
        let mut config = Config::default();
        config.connection.ticket = Some("TICKET_0123456789abcdef".into());
        config.connection.host = Some("localhost:8080".into());
        let shown = masked(&config);
        assert_eq!(shown.connection.ticket.as_deref(), Some("TICK…cdef"));
        assert_eq!(shown.connection.host, config.connection.host);
    }
}
