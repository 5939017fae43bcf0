//
//  alfresco-client
//  api/core/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Core API
//!
//! The repository's main surface: nodes and their content, sites, people,
//! groups, renditions, comments, tags and health probes.
//!
//! ## Submodules
//!
//! - [`nodes`]: Node CRUD, copy, move, locks and content
//! - [`sites`]: Sites and site membership
//! - [`people`]: Person records
//! - [`groups`]: Groups and group membership
//! - [`renditions`]: Thumbnails, previews and other renditions
//! - [`comments`]: Comments on nodes
//! - [`tags`]: Tags on nodes
//! - [`probes`]: Readiness and liveness probes
//!
//! Every operation is a method on [`CoreApi`] returning a
//! [`Call`](super::operation::Call).
//!
//! ## Example
//!
//! ```rust,no_run
//! use alfresco_client::api::core::{CoreApi, ListNodeChildrenParams, NodeBodyCreate};
//! use alfresco_client::api::request::Param;
//! use alfresco_client::api::AlfrescoClient;
//! use alfresco_client::api::client::ClientConfig;
//! use alfresco_client::auth::AuthCredential;
//!
//! # async fn example() -> Result<(), alfresco_client::api::ApiError> {
//! let config = ClientConfig::new("http://localhost:8080/alfresco/api/-default-/public/alfresco/versions/1")
//!     .with_auth(AuthCredential::basic("admin", "admin"));
//! let core = CoreApi::new(AlfrescoClient::new(config)?);
//!
//! let folder = NodeBodyCreate::new("Reports", "cm:folder")?;
//! core.create_node("-my-", folder, Default::default()).send().await?;
//!
//! let params = ListNodeChildrenParams { max_items: Param::Value(10), ..Default::default() };
//! if let Some(page) = core.list_node_children("-my-", params).send().await? {
//!     for node in page.items() {
//!         println!("{} {}", node.node_type, node.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use super::client::AlfrescoClient;
use super::request::Param;

pub mod comments;
pub mod groups;
pub mod nodes;
pub mod people;
pub mod probes;
pub mod renditions;
pub mod sites;
pub mod tags;

pub use comments::*;
pub use groups::*;
pub use nodes::*;
pub use people::*;
pub use probes::*;
pub use renditions::*;
pub use sites::*;
pub use tags::*;

/// `include` and `fields` selection, accepted by most single-resource operations.
///
/// * `include` - Extra properties to return (e.g. `path`, `properties`, `allowableOperations`)
/// * `fields` - Restrict the returned properties to this list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IncludeParams {
    pub include: Param<Vec<String>>,
    pub fields: Param<Vec<String>>,
}

/// Façade over the core API.
///
/// Operations are grouped by resource in the submodules; each submodule adds
/// its methods to this type.
#[derive(Debug, Clone)]
pub struct CoreApi {
    client: AlfrescoClient,
}

impl CoreApi {
    pub fn new(client: AlfrescoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AlfrescoClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut AlfrescoClient {
        &mut self.client
    }
}
