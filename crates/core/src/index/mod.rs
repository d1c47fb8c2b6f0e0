//! In-memory versioned snapshot index.
//!
//! Maps each URL id to its [`SnapshotHistory`] and answers "which capture was
//! current on date D?". Lookups share a read lock; inserts take the write
//! lock, so the index can be handed to concurrent request handlers as an
//! `Arc<SnapshotIndex>`.

mod history;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use parking_lot::RwLock;

pub use history::{InsertOutcome, SnapshotEntry, SnapshotHistory};

use crate::Error;
use crate::date::CaptureDate;
use crate::ident::UrlId;

/// Per-URL capture histories.
#[derive(Debug, Default)]
pub struct SnapshotIndex {
    histories: RwLock<HashMap<UrlId, SnapshotHistory>>,
}

impl SnapshotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a capture of `url` taken on `date` (`YYYY-MM-DD`).
    ///
    /// Invalid input fails before the index is touched.
    pub fn insert(&self, url: &str, date: &str, checksum: &str) -> Result<InsertOutcome, Error> {
        let id = UrlId::from_url(url)?;
        let captured_at = CaptureDate::parse(date)?;
        self.insert_entry(id, SnapshotEntry::new(captured_at, checksum))
    }

    /// Record a capture for an already-normalized id.
    pub fn insert_entry(&self, id: UrlId, entry: SnapshotEntry) -> Result<InsertOutcome, Error> {
        let mut histories = self.histories.write();

        let outcome = match histories.entry(id.clone()) {
            Entry::Occupied(mut occupied) => occupied.get_mut().push(entry)?,
            Entry::Vacant(vacant) => {
                vacant.insert(SnapshotHistory::new(entry));
                InsertOutcome::Created
            }
        };

        tracing::trace!(url_id = %id, ?outcome, "Recorded capture");
        Ok(outcome)
    }

    /// Latest capture date of `id` that does not exceed `requested`.
    pub fn nearest_prior_date(&self, id: &UrlId, requested: CaptureDate) -> Result<CaptureDate, Error> {
        let histories = self.histories.read();
        let history = histories.get(id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        history.nearest_prior(requested)
    }

    /// Copy of all captures recorded for `id`, oldest first.
    pub fn history(&self, id: &UrlId) -> Result<Vec<SnapshotEntry>, Error> {
        let histories = self.histories.read();
        histories
            .get(id)
            .map(|h| h.entries().to_vec())
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Number of versions recorded for `id` (0 when unknown).
    pub fn version_count(&self, id: &UrlId) -> usize {
        self.histories.read().get(id).map_or(0, SnapshotHistory::len)
    }

    /// Number of distinct URLs indexed.
    pub fn url_count(&self) -> usize {
        self.histories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> CaptureDate {
        CaptureDate::parse(s).unwrap()
    }

    fn id(url: &str) -> UrlId {
        UrlId::from_url(url).unwrap()
    }

    #[test]
    fn test_floor_between_two_captures() {
        let index = SnapshotIndex::new();
        index.insert("a.com", "2020-01-01", "c1").unwrap();
        index.insert("a.com", "2020-06-01", "c2").unwrap();

        let found = index.nearest_prior_date(&id("a.com"), date("2020-03-01")).unwrap();
        assert_eq!(found, date("2020-01-01"));
    }

    #[test]
    fn test_date_before_first_capture() {
        let index = SnapshotIndex::new();
        index.insert("a.com", "2020-01-01", "c1").unwrap();
        index.insert("a.com", "2020-06-01", "c2").unwrap();

        let result = index.nearest_prior_date(&id("a.com"), date("2019-01-01"));
        assert!(matches!(result, Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let index = SnapshotIndex::new();
        assert_eq!(index.insert("a.com", "2020-01-01", "c1").unwrap(), InsertOutcome::Created);
        assert_eq!(index.insert("a.com", "2020-01-01", "c1").unwrap(), InsertOutcome::Unchanged);
        assert_eq!(index.version_count(&id("a.com")), 1);
    }

    #[test]
    fn test_unknown_url() {
        let index = SnapshotIndex::new();
        index.insert("a.com", "2020-01-01", "c1").unwrap();

        let result = index.nearest_prior_date(&id("b.com"), date("2020-01-01"));
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(matches!(index.history(&id("b.com")), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_insert_keys_by_canonical_url() {
        let index = SnapshotIndex::new();
        index.insert("www.google.com", "2009-02-04", "f2d7").unwrap();
        index.insert("https://WWW.GOOGLE.COM/", "2010-02-04", "9a0b").unwrap();

        assert_eq!(index.url_count(), 1);
        assert_eq!(index.version_count(&id("www.google.com")), 2);
    }

    #[test]
    fn test_invalid_input_leaves_index_untouched() {
        let index = SnapshotIndex::new();
        assert!(matches!(index.insert("a.com", "not-a-date", "c1"), Err(Error::InvalidDate(_))));
        assert!(matches!(index.insert("", "2020-01-01", "c1"), Err(Error::InvalidUrl(_))));
        assert!(index.is_empty());
    }

    #[test]
    fn test_out_of_order_insert_rejected() {
        let index = SnapshotIndex::new();
        index.insert("a.com", "2020-06-01", "c2").unwrap();
        let result = index.insert("a.com", "2020-01-01", "c1");
        assert!(matches!(result, Err(Error::OutOfOrder { .. })));
        assert_eq!(index.history(&id("a.com")).unwrap().len(), 1);
    }

    #[test]
    fn test_history_is_oldest_first() {
        let index = SnapshotIndex::new();
        index.insert("www.tripadvisor.com", "2006-01-06", "c9da").unwrap();
        index.insert("www.tripadvisor.com", "2008-08-31", "43f6").unwrap();

        let history = index.history(&id("www.tripadvisor.com")).unwrap();
        assert_eq!(history[0], SnapshotEntry::new(date("2006-01-06"), "c9da"));
        assert_eq!(history[1], SnapshotEntry::new(date("2008-08-31"), "43f6"));
    }

    proptest! {
        #[test]
        fn prop_length_grows_only_on_checksum_change(checksums in prop::collection::vec(0u8..3, 1..50)) {
            let index = SnapshotIndex::new();
            let url = id("a.com");
            let epoch = date("2000-01-01").as_naive();
            let mut previous: Option<u8> = None;

            for (day, checksum) in checksums.into_iter().enumerate() {
                let before = index.version_count(&url);
                let captured_at = CaptureDate::from_naive(epoch + chrono::Days::new(day as u64));
                index.insert_entry(url.clone(), SnapshotEntry::new(captured_at, format!("c{checksum}"))).unwrap();
                let after = index.version_count(&url);

                if previous == Some(checksum) {
                    prop_assert_eq!(after, before);
                } else {
                    prop_assert_eq!(after, before + 1);
                }
                previous = Some(checksum);
            }
        }
    }
}
