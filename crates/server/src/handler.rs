//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use rewind_core::Archive;

use crate::tools::{
    SnapshotHistoryParams, SnapshotLookupParams, SnapshotOpenParams, cache::stats_impl, history_impl, lookup_impl,
    open_impl,
};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for rewind.
#[derive(Clone)]
pub struct RewindServer {
    archive: Arc<Archive>,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl RewindServer {
    /// Create a new server handler over a loaded archive.
    pub fn new(archive: Arc<Archive>) -> Self {
        Self { archive, tool_router: Self::tool_router() }
    }

    #[tool(description = "Find which capture of a URL was current on a date (YYYY-MM-DD). Returns the resolved capture date, storage locator, and a url_id that later calls may pass instead of the URL.")]
    async fn snapshot_lookup(&self, params: Parameters<SnapshotLookupParams>) -> Result<CallToolResult, McpError> {
        lookup_impl(&self.archive, params.0)
    }

    #[tool(description = "Return the content of a URL as it was on a date (YYYY-MM-DD), using the nearest earlier capture. Accepts a url_id from snapshot_lookup in place of the URL.")]
    async fn snapshot_open(&self, params: Parameters<SnapshotOpenParams>) -> Result<CallToolResult, McpError> {
        open_impl(&self.archive, params.0).await
    }

    #[tool(description = "List every recorded version of a URL with its capture date and checksum.")]
    async fn snapshot_history(&self, params: Parameters<SnapshotHistoryParams>) -> Result<CallToolResult, McpError> {
        history_impl(&self.archive, params.0)
    }

    #[tool(description = "Report page cache hits, misses, evictions, and occupancy.")]
    async fn cache_stats(&self) -> Result<CallToolResult, McpError> {
        stats_impl(&self.archive)
    }
}

impl ServerHandler for RewindServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "rewind".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support;

    #[tokio::test]
    async fn test_all_tools_registered() {
        let dir = tempfile::tempdir().unwrap();
        let server = RewindServer::new(test_support::archive(dir.path()).await);

        let mut names: Vec<String> = server.tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        names.sort();
        assert_eq!(names, ["cache_stats", "snapshot_history", "snapshot_lookup", "snapshot_open"]);
    }
}
