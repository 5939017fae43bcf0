//
//  alfresco-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Alfresco List Responses
//!
//! Every Alfresco collection endpoint answers with the same envelope:
//!
//! ```json
//! {
//!   "list": {
//!     "pagination": {"count": 2, "hasMoreItems": false, "totalItems": 2, "skipCount": 0, "maxItems": 100},
//!     "entries": [{"entry": {...}}, {"entry": {...}}]
//!   }
//! }
//! ```
//!
//! [`Paging`] models that envelope generically; resource modules alias it
//! (`NodePaging = Paging<Node>`, `SitePaging = Paging<Site>`, ...).
//!
//! # Notes
//!
//! - Alfresco pagination is offset based: request the next page with
//!   `skipCount = skip_count + count` while `has_more_items` is `true`
//! - `total_items` is optional; many endpoints skip counting for performance

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Entry;

/// Pagination block of a list response.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `count` | `i64` | Number of entries in this page |
/// | `has_more_items` | `bool` | Whether further pages exist |
/// | `total_items` | `Option<i64>` | Total entries across all pages, when counted |
/// | `skip_count` | `i64` | Offset of this page |
/// | `max_items` | `i64` | Requested page size |
///
/// # Example
///
/// ```rust
/// use alfresco_client::api::common::Pagination;
///
/// let json = r#"{"count": 10, "hasMoreItems": true, "skipCount": 0, "maxItems": 10}"#;
/// let page: Pagination = serde_json::from_str(json).unwrap();
///
/// assert!(page.has_more_items);
/// assert_eq!(page.next_skip_count(), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of entries in this page.
    pub count: i64,

    /// Whether further pages exist.
    pub has_more_items: bool,

    /// Total entries across all pages, when the server counted them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i64>,

    /// Offset of this page.
    pub skip_count: i64,

    /// Requested page size.
    pub max_items: i64,

    /// Unrecognized keys.
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Pagination {
    /// Returns the `skipCount` for the next page, or `None` on the last page.
    pub fn next_skip_count(&self) -> Option<i64> {
        self.has_more_items.then_some(self.skip_count + self.count)
    }
}

/// Generic `{"list": {...}}` envelope.
///
/// # Type Parameters
///
/// - `T` - The resource type inside each `entry`
///
/// # Example
///
/// ```rust
/// use alfresco_client::api::common::Paging;
/// use alfresco_client::api::core::Site;
///
/// let json = r#"{"list": {
///     "pagination": {"count": 1, "hasMoreItems": false, "skipCount": 0, "maxItems": 100},
///     "entries": [{"entry": {"id": "swsdp", "guid": "b4cff62a", "title": "Sample", "visibility": "PUBLIC"}}]
/// }}"#;
///
/// let page: Paging<Site> = serde_json::from_str(json).unwrap();
/// assert_eq!(page.items().next().unwrap().id, "swsdp");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paging<T> {
    /// The list body.
    pub list: PagingList<T>,

    /// Unrecognized keys.
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl<T> Paging<T> {
    /// Iterates over the resources of this page, envelopes stripped.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.list.entries.iter().map(|e| &e.entry)
    }

    /// Consumes the page and returns its resources.
    pub fn into_items(self) -> Vec<T> {
        self.list.entries.into_iter().map(Entry::into_inner).collect()
    }

    /// Returns the pagination block.
    pub fn pagination(&self) -> &Pagination {
        &self.list.pagination
    }
}

/// Body of a [`Paging`] envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagingList<T> {
    pub pagination: Pagination,

    #[serde(default)]
    pub entries: Vec<Entry<T>>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::UserInfo;

    #[test]
    fn test_next_skip_count() {
        let page = Pagination {
            count: 25,
            has_more_items: true,
            skip_count: 50,
            max_items: 25,
            ..Default::default()
        };
        assert_eq!(page.next_skip_count(), Some(75));

        let last = Pagination {
            has_more_items: false,
            ..page
        };
        assert_eq!(last.next_skip_count(), None);
    }

    #[test]
    fn test_paging_into_items() {
        let json = r#"{"list":{"pagination":{"count":2,"hasMoreItems":false,"totalItems":2,"skipCount":0,"maxItems":100},
            "entries":[{"entry":{"displayName":"A","id":"a"}},{"entry":{"displayName":"B","id":"b"}}]}}"#;
        let page: Paging<UserInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(page.pagination().total_items, Some(2));
        let ids: Vec<String> = page.into_items().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_paging_without_entries() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Label {
            name: String,
        }

        let json = r#"{"list":{"pagination":{"count":0,"hasMoreItems":false,"skipCount":0,"maxItems":10}}}"#;
        let page: Paging<Label> = serde_json::from_str(json).unwrap();
        assert!(page.list.entries.is_empty());
        assert_eq!(page.pagination().max_items, 10);
    }
}
