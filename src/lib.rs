//
//  alfresco-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Alfresco Client Library
//!
//! A typed client for the Alfresco Content Services REST API, plus the
//! library side of the `alfresco` command-line tool.
//!
//! ## Overview
//!
//! Every REST operation is a small [`Endpoint`](api::operation::Endpoint)
//! value: it builds a request description and parses a status and body into
//! a typed result. Façade clients (one per API) return a
//! [`Call`](api::operation::Call) for each operation, which can be sent
//! four ways:
//!
//! | Method | Returns |
//! |--------|---------|
//! | `send().await` | `Result<Option<T>, ApiError>` |
//! | `send_detailed().await` | `Result<ApiResponse<T>, ApiError>` |
//! | `send_blocking()` | `Result<Option<T>, ApiError>` |
//! | `send_blocking_detailed()` | `Result<ApiResponse<T>, ApiError>` |
//!
//! Documented error statuses (404, 409, ...) yield `None`; the detailed
//! variants keep the status and raw body.
//!
//! ## Module Structure
//!
//! - [`api`]: models, request layer, operations and the per-API façades
//! - [`auth`]: credentials and how they are attached to requests
//! - [`alfresco`]: the aggregate client owning all façades
//! - [`config`]: settings file for the CLI
//! - [`cli`]: command-line interface definitions using clap
//! - [`output`]: table and JSON output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use alfresco_client::api::core::GetNodeParams;
//! use alfresco_client::Alfresco;
//!
//! # async fn example() -> Result<(), alfresco_client::api::ApiError> {
//! let mut alfresco = Alfresco::builder("https://acs.example.com")
//!     .basic_auth("admin", "admin")
//!     .build()?;
//! alfresco.authenticate().await?;
//! alfresco.share_authentication()?;
//!
//! if let Some(root) = alfresco.core().get_node("-root-", GetNodeParams::default()).send().await? {
//!     println!("{} ({})", root.entry.name, root.entry.id);
//! }
//! # Ok(())
//! # }
//! ```

/// Typed bindings for the Alfresco REST APIs.
pub mod api;

/// Credentials and how they travel on each request.
pub mod auth;

/// Aggregate client: one façade per API built from a single host.
pub mod alfresco;

/// Settings file management.
///
/// - Linux: `~/.config/alfresco/config.toml`
/// - macOS: `~/Library/Application Support/alfresco/config.toml`
/// - Windows: `%APPDATA%\alfresco\config.toml`
pub mod config;

/// Command-line interface definitions.
pub mod cli;

/// Output formatting (table, JSON).
pub mod output;

pub use alfresco::Alfresco;
pub use cli::Cli;
pub use config::Config;

/// Application name, used for the binary and the configuration directory.
pub const APP_NAME: &str = "alfresco";

/// Crate version from Cargo.toml, also sent in the default User-Agent.
///
/// ```rust
/// assert!(!alfresco_client::VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1`: General error, including unreachable APIs in `alfresco check`
/// - `2`: Invalid usage (reported by clap)
/// - `4`: Authentication required or rejected
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;

    pub const ERROR: i32 = 1;

    /// Run `alfresco login` or pass `--username`/`--password`.
    pub const AUTH_ERROR: i32 = 4;
}
