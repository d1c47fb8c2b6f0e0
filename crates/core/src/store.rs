//! Content stores holding the raw bytes of each capture.

use async_trait::async_trait;
use bytes::Bytes;

use crate::Error;
use crate::resolver::StorageLocator;

/// Backend that returns the stored bytes for a locator.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Read a capture's content.
    ///
    /// Fails with [`Error::ContentMissing`] when nothing is stored at the
    /// locator and [`Error::Io`] for any other storage failure.
    async fn fetch(&self, locator: &StorageLocator) -> Result<Bytes, Error>;
}

/// Reads captures from the local filesystem.
///
/// Locators already carry the data directory, so the store itself is
/// stateless.
#[derive(Debug, Clone, Default)]
pub struct FsContentStore;

impl FsContentStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn fetch(&self, locator: &StorageLocator) -> Result<Bytes, Error> {
        match tokio::fs::read(locator.path()).await {
            Ok(bytes) => Ok(Bytes::from(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::ContentMissing(locator.to_string())),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
