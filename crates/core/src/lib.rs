//! Core types and shared functionality for rewind.
//!
//! This crate provides:
//! - Versioned snapshot index with nearest-prior-date resolution
//! - Fixed-capacity recency cache for page content
//! - Resolver, content store, and the archive tying them together
//! - Unified error types
//! - Configuration structures

pub mod archive;
pub mod cache;
pub mod config;
pub mod date;
pub mod error;
pub mod ident;
pub mod index;
pub mod resolver;
pub mod seed;
pub mod store;

pub use archive::{Archive, Page};
pub use cache::{RecencyCache, SiteKey};
pub use config::AppConfig;
pub use date::CaptureDate;
pub use error::Error;
pub use ident::UrlId;
pub use index::{InsertOutcome, SnapshotEntry, SnapshotIndex};
pub use resolver::{Resolution, SnapshotResolver, StorageLocator};
pub use store::{ContentStore, FsContentStore};
