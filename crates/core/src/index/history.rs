//! Per-URL capture history.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::date::CaptureDate;

/// One captured version of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub captured_at: CaptureDate,
    pub checksum: String,
}

impl SnapshotEntry {
    pub fn new(captured_at: CaptureDate, checksum: impl Into<String>) -> Self {
        Self { captured_at, checksum: checksum.into() }
    }
}

/// What an insert did to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// First capture for the URL; a new history was created.
    Created,
    /// Content changed; a new version was appended.
    Appended,
    /// Checksum matched the latest capture; nothing was stored.
    Unchanged,
}

/// Captures of one URL, oldest first.
///
/// Dates never decrease along the sequence and no two adjacent entries share
/// a checksum. A history always holds at least one entry.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: Vec<SnapshotEntry>,
}

impl SnapshotHistory {
    pub fn new(first: SnapshotEntry) -> Self {
        Self { entries: vec![first] }
    }

    /// Append a capture if its content differs from the latest one.
    ///
    /// Captures must arrive in chronological order. A changed capture dated
    /// before the latest entry is rejected and the history is left as is.
    pub fn push(&mut self, entry: SnapshotEntry) -> Result<InsertOutcome, Error> {
        if let Some(last) = self.latest() {
            if last.checksum == entry.checksum {
                return Ok(InsertOutcome::Unchanged);
            }
            if entry.captured_at < last.captured_at {
                return Err(Error::OutOfOrder { captured_at: entry.captured_at, latest: last.captured_at });
            }
        }

        self.entries.push(entry);
        Ok(InsertOutcome::Appended)
    }

    /// Resolve `requested` to the latest capture dated on or before it.
    pub fn nearest_prior(&self, requested: CaptureDate) -> Result<CaptureDate, Error> {
        let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) else {
            return Err(Error::OutOfRange { requested });
        };

        if requested < first.captured_at {
            return Err(Error::OutOfRange { requested });
        }
        if requested >= last.captured_at {
            return Ok(last.captured_at);
        }

        self.floor_index(requested)
            .map(|i| self.entries[i].captured_at)
            .ok_or(Error::OutOfRange { requested })
    }

    /// Index of the last entry whose date does not exceed `target`.
    ///
    /// When several entries share a date the later-inserted one wins.
    fn floor_index(&self, target: CaptureDate) -> Option<usize> {
        // entries[..low] are <= target, entries[high..] are > target
        let mut low = 0;
        let mut high = self.entries.len();

        while low < high {
            let mid = low + (high - low) / 2;
            if self.entries[mid].captured_at <= target {
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        low.checked_sub(1)
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    /// The most recent capture.
    pub fn latest(&self) -> Option<&SnapshotEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
