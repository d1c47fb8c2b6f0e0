//! In-memory page cache.
//!
//! Keeps the content of the most recently viewed captures so repeated
//! requests for the same `(url, date)` skip the content store.

pub mod recency;
pub mod stats;

use std::fmt;

use crate::date::CaptureDate;
use crate::ident::UrlId;

pub use recency::{DEFAULT_CAPACITY, RecencyCache};
pub use stats::{CacheStats, CacheStatsSnapshot};

/// Cache key: one resolved capture of one URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteKey {
    pub url_id: UrlId,
    pub captured_at: CaptureDate,
}

impl SiteKey {
    pub fn new(url_id: UrlId, captured_at: CaptureDate) -> Self {
        Self { url_id, captured_at }
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.url_id, self.captured_at)
    }
}
