//! The archive: index resolution, page cache, and content store together.
//!
//! A request resolves to the nearest prior capture, the `(url_id, date)` pair
//! is looked up in the page cache, and only on a miss is the content store
//! read. The cache lock is never held across the store read.

use std::num::NonZeroUsize;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::Error;
use crate::cache::{CacheStats, CacheStatsSnapshot, RecencyCache, SiteKey};
use crate::config::AppConfig;
use crate::date::CaptureDate;
use crate::ident::UrlId;
use crate::index::{SnapshotEntry, SnapshotIndex};
use crate::resolver::{Resolution, SnapshotResolver};
use crate::store::{ContentStore, FsContentStore};

/// Content of a resolved capture.
#[derive(Debug, Clone)]
pub struct Page {
    pub resolution: Resolution,
    pub content: Bytes,
    /// Whether the content came from the page cache.
    pub cached: bool,
}

pub struct Archive {
    resolver: SnapshotResolver,
    store: Arc<dyn ContentStore>,
    pages: Mutex<RecencyCache<SiteKey, Bytes>>,
    stats: CacheStats,
}

impl Archive {
    pub fn new(resolver: SnapshotResolver, store: Arc<dyn ContentStore>, capacity: NonZeroUsize) -> Self {
        Self { resolver, store, pages: Mutex::new(RecencyCache::new(capacity)), stats: CacheStats::default() }
    }

    /// Build a filesystem-backed archive over `index` from loaded config.
    pub fn from_config(config: &AppConfig, index: Arc<SnapshotIndex>) -> Result<Self, Error> {
        let capacity = NonZeroUsize::new(config.cache_capacity)
            .ok_or_else(|| Error::InvalidInput("cache_capacity must be greater than 0".into()))?;
        let resolver = SnapshotResolver::new(index, &config.data_dir, &config.file_extension);
        Ok(Self::new(resolver, Arc::new(FsContentStore::new()), capacity))
    }

    /// Resolve without reading content.
    pub fn lookup(&self, url: &str, date: &str) -> Result<Resolution, Error> {
        self.resolver.resolve(url, date)
    }

    /// Resolve a previously issued url id without reading content.
    pub fn lookup_id(&self, url_id: UrlId, date: &str) -> Result<Resolution, Error> {
        self.resolver.resolve_id(url_id, CaptureDate::parse(date)?)
    }

    /// Resolve and return the capture's content.
    pub async fn open(&self, url: &str, date: &str) -> Result<Page, Error> {
        let resolution = self.resolver.resolve(url, date)?;
        self.read(resolution).await
    }

    /// Like [`Archive::open`], addressed by url id.
    pub async fn open_id(&self, url_id: UrlId, date: &str) -> Result<Page, Error> {
        let resolution = self.lookup_id(url_id, date)?;
        self.read(resolution).await
    }

    async fn read(&self, resolution: Resolution) -> Result<Page, Error> {
        let key = SiteKey::new(resolution.url_id.clone(), resolution.captured_at);

        if let Some(content) = self.cached(&key) {
            self.stats.record_hit();
            tracing::debug!(%key, "Page cache hit");
            return Ok(Page { resolution, content, cached: true });
        }

        self.stats.record_miss();
        tracing::debug!(%key, locator = %resolution.locator, "Page cache miss");

        let content = self.store.fetch(&resolution.locator).await?;

        if let Some((evicted, _)) = self.pages.lock().insert(key, content.clone()) {
            self.stats.record_eviction();
            tracing::debug!(%evicted, "Evicted page");
        }

        Ok(Page { resolution, content, cached: false })
    }

    fn cached(&self, key: &SiteKey) -> Option<Bytes> {
        let mut pages = self.pages.lock();
        if !pages.contains(key) {
            return None;
        }
        pages.get(key).cloned()
    }

    /// All captures of `url`, oldest first.
    pub fn history(&self, url: &str) -> Result<(UrlId, Vec<SnapshotEntry>), Error> {
        let url_id = UrlId::from_url(url)?;
        let entries = self.resolver.index().history(&url_id)?;
        Ok((url_id, entries))
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        let pages = self.pages.lock();
        self.stats.snapshot(pages.len(), pages.capacity())
    }

    pub fn index(&self) -> &SnapshotIndex {
        self.resolver.index()
    }
}
