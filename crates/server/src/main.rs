//! rewind server entry point.
//!
//! Loads configuration, seeds the snapshot index, and boots the MCP server on
//! stdio transport. Logging goes to stderr to avoid interfering with the
//! JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use rewind_core::seed::{load_seed_file, seed_index};
use rewind_core::{AppConfig, Archive, SnapshotIndex};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    let index = Arc::new(SnapshotIndex::new());
    match &config.seed_file {
        Some(seed_file) => {
            let captures = load_seed_file(seed_file).await?;
            seed_index(&index, &captures)?;
        }
        None => tracing::warn!("No seed file configured; the snapshot index starts empty"),
    }

    let archive = Arc::new(Archive::from_config(&config, index)?);

    tracing::info!(
        data_dir = %config.data_dir.display(),
        cache_capacity = config.cache_capacity,
        "Starting rewind server on stdio transport"
    );

    let handler = handler::RewindServer::new(archive);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
