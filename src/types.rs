//! Common types for the DPLA client
//!
//! Type aliases, the resource kind selector, and the page response shape
//! consumed from the search API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One record from a page's `docs` array. The structure is opaque to this
/// crate; records are carried through untouched.
pub type Record = serde_json::Value;

/// Query parameter mapping sent with each request. Keys may be dot-path
/// nested-field filters (e.g. `sourceResource.collection.title`) and are
/// passed through verbatim, without parsing or validation.
pub type QueryParams = HashMap<String, String>;

// ============================================================================
// Resource Kind
// ============================================================================

/// The category of record being queried, determining which search endpoint
/// is used. Anything other than `Collections` targets the items endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Item records (the default)
    #[default]
    Items,
    /// Collection records
    Collections,
}

impl ResourceKind {
    /// The kind as it appears in the API path
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Collections => "collections",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Page Response
// ============================================================================

/// One page of search results.
///
/// Only `docs` feeds the aggregation; `count`, `start`, and `limit` are
/// pagination metadata the upstream schema carries but this crate does not
/// act on. A body without a `docs` key deserializes to an empty page rather
/// than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageResponse {
    /// Records in this page, in upstream order
    #[serde(default)]
    pub docs: Vec<Record>,
    /// Total matching records reported by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Offset of the first record in this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// Page size the API applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl PageResponse {
    /// Number of records in this page
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether this page carries no records
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
