//! Bulk loading of crawler output into the index.
//!
//! A seed file is a JSON array of captures:
//!
//! ```json
//! [{ "url": "www.google.com", "date": "2009-02-04", "checksum": "f2d787451893fcf10385142f8d44fc7b" }]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::date::CaptureDate;
use crate::ident::UrlId;
use crate::index::{InsertOutcome, SnapshotEntry, SnapshotIndex};

/// One crawler observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub url: String,
    pub date: String,
    pub checksum: String,
}

/// Tally of what a seed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub created: usize,
    pub appended: usize,
    pub unchanged: usize,
}

impl SeedReport {
    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Created => self.created += 1,
            InsertOutcome::Appended => self.appended += 1,
            InsertOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

/// Read captures from a JSON seed file.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Capture>, Error> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::Seed(format!("failed to read {}: {e}", path.display())))?;

    serde_json::from_slice(&bytes).map_err(|e| Error::Seed(format!("failed to parse {}: {e}", path.display())))
}

/// Insert `captures` into `index` in chronological order.
///
/// Every URL and date is parsed up front so a malformed capture aborts the
/// run before anything is inserted. Captures of the same day keep their file
/// order.
pub fn seed_index(index: &SnapshotIndex, captures: &[Capture]) -> Result<SeedReport, Error> {
    let mut parsed = captures
        .iter()
        .map(|capture| {
            let url_id = UrlId::from_url(&capture.url)?;
            let captured_at = CaptureDate::parse(&capture.date)?;
            Ok::<_, Error>((url_id, SnapshotEntry::new(captured_at, capture.checksum.as_str())))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    parsed.sort_by_key(|(_, entry)| entry.captured_at);

    let mut report = SeedReport::default();
    for (url_id, entry) in parsed {
        report.record(index.insert_entry(url_id, entry)?);
    }

    tracing::info!(
        urls = index.url_count(),
        created = report.created,
        appended = report.appended,
        unchanged = report.unchanged,
        "Seeded snapshot index"
    );
    Ok(report)
}
