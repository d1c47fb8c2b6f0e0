//! Maps `(url, date)` requests onto stored captures.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::Error;
use crate::date::CaptureDate;
use crate::ident::UrlId;
use crate::index::SnapshotIndex;

/// Where a capture's content lives: `{data_dir}/{url_id}/{millis}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StorageLocator(PathBuf);

impl StorageLocator {
    pub fn new(data_dir: &Path, url_id: &UrlId, captured_at: CaptureDate, extension: &str) -> Self {
        let file_name = format!("{}.{extension}", captured_at.timestamp_millis());
        Self(data_dir.join(url_id.as_str()).join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for StorageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A request resolved against the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub url_id: UrlId,
    pub requested: CaptureDate,
    pub captured_at: CaptureDate,
    pub locator: StorageLocator,
}

/// Resolves requests through a shared [`SnapshotIndex`].
#[derive(Debug, Clone)]
pub struct SnapshotResolver {
    index: Arc<SnapshotIndex>,
    data_dir: PathBuf,
    extension: String,
}

impl SnapshotResolver {
    pub fn new(index: Arc<SnapshotIndex>, data_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { index, data_dir: data_dir.into(), extension: extension.into() }
    }

    /// Resolve a raw URL and `YYYY-MM-DD` date.
    pub fn resolve(&self, url: &str, date: &str) -> Result<Resolution, Error> {
        let url_id = UrlId::from_url(url)?;
        let requested = CaptureDate::parse(date)?;
        self.resolve_id(url_id, requested)
    }

    /// Resolve an already-normalized id.
    pub fn resolve_id(&self, url_id: UrlId, requested: CaptureDate) -> Result<Resolution, Error> {
        let captured_at = self.index.nearest_prior_date(&url_id, requested)?;
        let locator = StorageLocator::new(&self.data_dir, &url_id, captured_at, &self.extension);

        tracing::debug!(url_id = %url_id, %requested, %captured_at, "Resolved capture");
        Ok(Resolution { url_id, requested, captured_at, locator })
    }

    pub fn index(&self) -> &SnapshotIndex {
        &self.index
    }
}
