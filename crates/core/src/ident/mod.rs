//! Stable URL identifiers.
//!
//! A `UrlId` is the SHA-256 of the canonical URL, hex encoded. It keys the
//! snapshot index, forms half of every cache key, and names the directory a
//! URL's captures live in on disk.

mod canonical;

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use canonical::{UrlError, canonicalize};

use crate::Error;

const ID_LEN: usize = 64;

/// Hashed identifier of a canonical URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlId(String);

impl UrlId {
    /// Canonicalize `url` and hash it.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        let canonical = canonicalize(url)?;
        Ok(Self::hash(canonical.as_str()))
    }

    /// Accept an identifier previously handed out by [`UrlId::from_url`].
    pub fn parse(id: &str) -> Result<Self, Error> {
        if id.len() != ID_LEN || !id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()) {
            return Err(Error::InvalidInput(format!("invalid url id: {id}")));
        }
        Ok(Self(id.to_string()))
    }

    fn hash(canonical: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UrlId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_stability() {
        let a = UrlId::from_url("www.google.com").unwrap();
        let b = UrlId::from_url("www.google.com").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equivalent_spellings_share_id() {
        let bare = UrlId::from_url("www.google.com").unwrap();
        let full = UrlId::from_url("https://WWW.google.com/#results").unwrap();
        assert_eq!(bare, full);
    }

    #[test]
    fn test_different_urls_differ() {
        let a = UrlId::from_url("www.google.com").unwrap();
        let b = UrlId::from_url("www.tripadvisor.com").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_format() {
        let id = UrlId::from_url("https://example.com").unwrap();
        assert_eq!(id.as_str().len(), 64);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_parse_accepts_issued_id() {
        let id = UrlId::from_url("https://example.com").unwrap();
        assert_eq!(UrlId::parse(id.as_str()).unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(UrlId::parse("abc123"), Err(Error::InvalidInput(_))));
        assert!(matches!(UrlId::parse(&"Z".repeat(64)), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(matches!(UrlId::from_url(""), Err(Error::InvalidUrl(_))));
    }
}
