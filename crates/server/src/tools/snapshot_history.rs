//! snapshot_history tool implementation.
//!
//! Lists every recorded version of a URL, oldest first.

use rewind_core::Archive;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{json_result, require};

/// Parameters for the snapshot_history tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotHistoryParams {
    /// The URL whose captures to list.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CaptureOutput {
    /// Capture date as YYYY-MM-DD.
    pub date: String,
    /// Content checksum reported by the crawler.
    pub checksum: String,
}

/// Output from the snapshot_history tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotHistoryOutput {
    pub url: String,
    pub url_id: String,
    pub captures: Vec<CaptureOutput>,
}

/// Implementation of the snapshot_history tool.
pub fn history_impl(archive: &Archive, params: SnapshotHistoryParams) -> Result<CallToolResult, McpError> {
    let url = require("url", &params.url)?;
    let (url_id, entries) = archive.history(url)?;

    let output = SnapshotHistoryOutput {
        url: url.to_string(),
        url_id: url_id.to_string(),
        captures: entries
            .into_iter()
            .map(|entry| CaptureOutput { date: entry.captured_at.to_string(), checksum: entry.checksum })
            .collect(),
    };
    json_result(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support;

    #[tokio::test]
    async fn test_history_lists_captures() {
        let dir = tempfile::tempdir().unwrap();
        let archive = test_support::archive(dir.path()).await;

        let result = history_impl(&archive, SnapshotHistoryParams { url: "www.tripadvisor.com".into() }).unwrap();
        let output: SnapshotHistoryOutput = test_support::output(&result);

        let dates: Vec<_> = output.captures.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(dates, ["2006-01-06", "2008-08-31"]);
        assert_eq!(output.captures[0].checksum, "c9da");
    }

    #[tokio::test]
    async fn test_history_unknown_url() {
        let dir = tempfile::tempdir().unwrap();
        let archive = test_support::archive(dir.path()).await;

        let err = history_impl(&archive, SnapshotHistoryParams { url: "www.google.com".into() }).unwrap_err();
        assert_eq!(err.code.0, -32001);
    }
}
