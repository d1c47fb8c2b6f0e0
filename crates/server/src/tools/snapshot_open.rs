//! snapshot_open tool implementation.
//!
//! Returns the content of the capture that was current on the requested
//! date, served from the page cache when it was viewed recently.

use rewind_core::Archive;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::snapshot_lookup::SnapshotLookupOutput;
use super::{Target, json_result, require, target};

/// Parameters for the snapshot_open tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotOpenParams {
    /// The URL to open (scheme optional, e.g. "www.google.com").
    #[serde(default)]
    pub url: String,

    /// Identifier from snapshot_lookup; used instead of `url` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_id: Option<String>,

    /// Requested date as YYYY-MM-DD.
    pub date: String,
}

/// Output from the snapshot_open tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotOpenOutput {
    #[serde(flatten)]
    pub capture: SnapshotLookupOutput,
    /// Whether the content was served from the page cache.
    pub cached: bool,
    /// Captured page content.
    pub content: String,
}

/// Implementation of the snapshot_open tool.
pub async fn open_impl(archive: &Archive, params: SnapshotOpenParams) -> Result<CallToolResult, McpError> {
    let addressed = target(&params.url, params.url_id.as_deref())?;
    let date = require("date", &params.date)?;

    let (url, page) = match addressed {
        Target::Url(url) => (Some(url), archive.open(url, date).await?),
        Target::Id(id) => (None, archive.open_id(id, date).await?),
    };

    let output = SnapshotOpenOutput {
        capture: SnapshotLookupOutput::new(url, &page.resolution),
        cached: page.cached,
        content: String::from_utf8_lossy(&page.content).into_owned(),
    };
    json_result(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support;

    fn params(url: &str, date: &str) -> SnapshotOpenParams {
        SnapshotOpenParams { url: url.into(), url_id: None, date: date.into() }
    }

    #[tokio::test]
    async fn test_open_then_cached() {
        let dir = tempfile::tempdir().unwrap();
        let archive = test_support::archive(dir.path()).await;

        let first = open_impl(&archive, params("www.tripadvisor.com", "2007-01-01")).await.unwrap();
        let first: SnapshotOpenOutput = test_support::output(&first);
        assert!(!first.cached);
        assert_eq!(first.capture.resolved_date, "2006-01-06");
        assert_eq!(first.content, "<html>tripadvisor 2006</html>");

        let second = open_impl(&archive, params("https://www.tripadvisor.com/", "2006-06-06")).await.unwrap();
        let second: SnapshotOpenOutput = test_support::output(&second);
        assert!(second.cached);
        assert_eq!(second.content, first.content);
    }

    #[tokio::test]
    async fn test_open_with_url_id_from_lookup() {
        use crate::tools::snapshot_lookup::{SnapshotLookupParams, lookup_impl};

        let dir = tempfile::tempdir().unwrap();
        let archive = test_support::archive(dir.path()).await;

        let lookup =
            SnapshotLookupParams { url: "www.tripadvisor.com".into(), url_id: None, date: "2007-01-01".into() };
        let lookup: SnapshotLookupOutput = test_support::output(&lookup_impl(&archive, lookup).unwrap());

        let by_id = SnapshotOpenParams {
            url: String::new(),
            url_id: Some(lookup.url_id.clone()),
            date: "2007-01-01".into(),
        };
        let opened: SnapshotOpenOutput = test_support::output(&open_impl(&archive, by_id).await.unwrap());

        assert_eq!(opened.capture.url, None);
        assert_eq!(opened.capture.url_id, lookup.url_id);
        assert_eq!(opened.capture.resolved_date, "2006-01-06");
        assert_eq!(opened.content, "<html>tripadvisor 2006</html>");

        let again = open_impl(&archive, params("www.tripadvisor.com", "2006-01-06")).await.unwrap();
        assert!(test_support::output::<SnapshotOpenOutput>(&again).cached);
    }

    #[tokio::test]
    async fn test_open_missing_content() {
        let dir = tempfile::tempdir().unwrap();
        let archive = test_support::archive(dir.path()).await;

        let err = open_impl(&archive, params("www.tripadvisor.com", "2010-01-01")).await.unwrap_err();
        assert_eq!(err.code.0, -32004);
        assert_eq!(archive.stats().entries, 0);
    }

    #[tokio::test]
    async fn test_open_bad_date() {
        let dir = tempfile::tempdir().unwrap();
        let archive = test_support::archive(dir.path()).await;

        let err = open_impl(&archive, params("www.tripadvisor.com", "last week")).await.unwrap_err();
        assert_eq!(err.code.0, -32602);
    }
}
