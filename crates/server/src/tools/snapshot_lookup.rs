//! snapshot_lookup tool implementation.
//!
//! Resolves a URL and date to the nearest prior capture without reading its
//! content.

use rewind_core::{Archive, Resolution};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Target, json_result, require, target};

/// Parameters for the snapshot_lookup tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotLookupParams {
    /// The URL to look up (scheme optional, e.g. "www.google.com").
    #[serde(default)]
    pub url: String,

    /// Identifier from an earlier lookup; used instead of `url` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_id: Option<String>,

    /// Requested date as YYYY-MM-DD.
    pub date: String,
}

/// Output from the snapshot_lookup tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotLookupOutput {
    /// The URL as requested (absent when addressed by id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Stable identifier of the canonical URL.
    pub url_id: String,
    /// The date that was asked for.
    pub requested_date: String,
    /// Date of the capture that was current on the requested date.
    pub resolved_date: String,
    /// Storage path of the resolved capture.
    pub locator: String,
}

impl SnapshotLookupOutput {
    pub fn new(url: Option<&str>, resolution: &Resolution) -> Self {
        Self {
            url: url.map(str::to_string),
            url_id: resolution.url_id.to_string(),
            requested_date: resolution.requested.to_string(),
            resolved_date: resolution.captured_at.to_string(),
            locator: resolution.locator.to_string(),
        }
    }
}

/// Implementation of the snapshot_lookup tool.
pub fn lookup_impl(archive: &Archive, params: SnapshotLookupParams) -> Result<CallToolResult, McpError> {
    let addressed = target(&params.url, params.url_id.as_deref())?;
    let date = require("date", &params.date)?;

    let output = match addressed {
        Target::Url(url) => SnapshotLookupOutput::new(Some(url), &archive.lookup(url, date)?),
        Target::Id(id) => SnapshotLookupOutput::new(None, &archive.lookup_id(id, date)?),
    };
    json_result(&output)
}
