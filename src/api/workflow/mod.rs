//
//  alfresco-client
//  api/workflow/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Workflow API
//!
//! Process instances, process definitions and tasks of the embedded workflow
//! engine. Records mirror the wire format only; no workflow state is tracked
//! client side.
//!
//! ## Submodules
//!
//! - [`processes`]: Start, inspect and cancel process instances
//! - [`definitions`]: Deployed process definitions
//! - [`tasks`]: User tasks, including claim and complete via `update_task`

use super::client::AlfrescoClient;
use super::request::{Param, RequestSpec};

pub mod definitions;
pub mod processes;
pub mod tasks;

pub use definitions::*;
pub use processes::*;
pub use tasks::*;

/// Query parameters shared by the workflow list operations.
///
/// * `properties` - Restrict returned properties
/// * `where_` - Filter, e.g. `(status = 'active')`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowListParams {
    pub skip_count: Param<i64>,
    pub max_items: Param<i64>,
    pub properties: Param<Vec<String>>,
    pub order_by: Param<Vec<String>>,
    pub where_: Param<String>,
}

impl WorkflowListParams {
    fn apply(&self, spec: RequestSpec) -> RequestSpec {
        spec.query("skipCount", &self.skip_count)
            .query("maxItems", &self.max_items)
            .query("properties", &self.properties)
            .query("orderBy", &self.order_by)
            .query("where", &self.where_)
    }
}

/// Façade over the workflow API.
#[derive(Debug, Clone)]
pub struct WorkflowApi {
    client: AlfrescoClient,
}

impl WorkflowApi {
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
