//! cache_stats tool implementation.
//!
//! Reports page cache counters and occupancy.

use rewind_core::Archive;
use rewind_core::cache::CacheStatsSnapshot;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tools::json_result;

/// Output from the cache_stats tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CacheStatsOutput {
    #[serde(flatten)]
    pub stats: CacheStatsSnapshot,
    /// Fraction of opens served from memory.
    pub hit_ratio: f64,
}

/// Implementation of the cache_stats tool.
pub fn stats_impl(archive: &Archive) -> Result<CallToolResult, McpError> {
    let stats = archive.stats();
    let output = CacheStatsOutput { hit_ratio: stats.hit_ratio(), stats };
    json_result(&output)
}
