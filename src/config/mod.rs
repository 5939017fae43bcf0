//
//  alfresco-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Connection defaults for the `alfresco` CLI, stored as TOML in the
//! platform configuration directory:
//!
//! - **Linux**: `~/.config/alfresco/config.toml`
//! - **macOS**: `~/Library/Application Support/alfresco/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\alfresco\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [connection]
//! host = "https://acs.example.com"
//! username = "admin"
//! verify_ssl = true
//! timeout_secs = 30
//!
//! [base_paths]
//! search = "/alfresco/api/-default-/public/search/versions/1"
//! ```
//!
//! Command-line flags and `ALFRESCO_*` environment variables take
//! precedence over the file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use alfresco_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("connection.host", "https://acs.example.com")?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::alfresco::AlfrescoBuilder;
use crate::api::ApiKind;

/// Keys accepted by [`Config::get`] and [`Config::set`], besides
/// `base_paths.<api>`.
pub const CONFIG_KEYS: &[&str] = &[
    "connection.host",
    "connection.username",
    "connection.ticket",
    "connection.verify_ssl",
    "connection.timeout_secs",
];

const BASE_PATH_PREFIX: &str = "base_paths.";

/// Settings file contents.
///
/// All fields use `#[serde(default)]` so partial files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// How to reach and authenticate against the repository.
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Base path overrides keyed by API name (`auth`, `core`, `search-sql`, ...).
    #[serde(default)]
    pub base_paths: BTreeMap<String, String>,
}

/// The `[connection]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Repository host, e.g. `https://acs.example.com` or `localhost:8080`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Ticket saved by `alfresco login`. Used instead of a password when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,

    /// Set to `false` to accept self-signed certificates.
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_verify_ssl() -> bool {
    true
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: None,
            username: None,
            ticket: None,
            verify_ssl: default_verify_ssl(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`; missing files yield defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// Saves the configuration to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist yet.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.connection.timeout_secs.map(Duration::from_secs)
    }

    /// Gets a value by dotted key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alfresco_client::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("connection.verify_ssl"), Some("true".to_string()));
    /// assert_eq!(config.get("connection.host"), None);
    /// assert_eq!(config.get("unknown"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(api) = key.strip_prefix(BASE_PATH_PREFIX) {
            return self.base_paths.get(api).cloned();
        }
        match key {
            "connection.host" => self.connection.host.clone(),
            "connection.username" => self.connection.username.clone(),
            "connection.ticket" => self.connection.ticket.clone(),
            "connection.verify_ssl" => Some(self.connection.verify_ssl.to_string()),
            "connection.timeout_secs" => self.connection.timeout_secs.map(|t| t.to_string()),
            _ => None,
        }
    }

    /// Sets a value by dotted key. Changes persist only after [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Fails on unknown keys, unknown API names under `base_paths.` and
    /// values that do not parse (`verify_ssl` takes `true`/`false`,
    /// `timeout_secs` a whole number).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(api) = key.strip_prefix(BASE_PATH_PREFIX) {
            if ApiKind::from_name(api).is_none() {
                bail!("Unknown API '{}'", api);
            }
            self.base_paths.insert(api.to_string(), value.to_string());
            return Ok(());
        }
        match key {
            "connection.host" => self.connection.host = Some(value.to_string()),
            "connection.username" => self.connection.username = Some(value.to_string()),
            "connection.ticket" => self.connection.ticket = Some(value.to_string()),
            "connection.verify_ssl" => {
                self.connection.verify_ssl = value
                    .parse::<bool>()
                    .with_context(|| format!("Expected true or false, got '{}'", value))?
            }
            "connection.timeout_secs" => {
                self.connection.timeout_secs = Some(
                    value
                        .parse::<u64>()
                        .with_context(|| format!("Expected a number of seconds, got '{}'", value))?,
                )
            }
            _ => bail!("Unknown configuration key '{}'", key),
        }
        Ok(())
    }

    /// Applies the stored base path overrides to a client builder.
    ///
    /// # Errors
    ///
    /// Fails if a `[base_paths]` key is not an API name.
    pub fn apply_base_paths(&self, mut builder: AlfrescoBuilder) -> Result<AlfrescoBuilder> {
        for (name, path) in &self.base_paths {
            let api = ApiKind::from_name(name).ok_or_else(|| anyhow!("Unknown API '{}' in [base_paths]", name))?;
            builder = builder.base_path(api, path.clone());
        }
        Ok(builder)
    }
}
