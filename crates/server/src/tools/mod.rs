//! MCP tool implementations.
//!
//! This module contains all tools exposed by the rewind server.

pub mod cache;
pub mod snapshot_history;
pub mod snapshot_lookup;
pub mod snapshot_open;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use rewind_core::UrlId;
use serde::Serialize;

use crate::error::ToolError;

pub use snapshot_history::{SnapshotHistoryParams, history_impl};
pub use snapshot_lookup::{SnapshotLookupParams, lookup_impl};
pub use snapshot_open::{SnapshotOpenParams, open_impl};

/// Reject blank string parameters before they reach the archive.
fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(trimmed)
}

/// What a lookup or open call addresses: a raw URL, or an id issued by an
/// earlier lookup.
enum Target<'a> {
    Url(&'a str),
    Id(UrlId),
}

/// A non-blank `url_id` takes precedence over `url`.
fn target<'a>(url: &'a str, url_id: Option<&str>) -> Result<Target<'a>, McpError> {
    match url_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => Ok(Target::Id(UrlId::parse(id)?)),
        None => Ok(Target::Url(require("url", url)?)),
    }
}

/// Wrap a tool output as pretty-printed JSON text content.
fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| ToolError::Serialize(format!("Failed to serialize output: {e}")))?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
