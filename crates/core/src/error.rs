//! Unified error types for rewind.
//!
//! Every variant renders with a stable upper-case code prefix so tool clients
//! can match on it without parsing prose.

use rmcp::model::{ErrorCode, ErrorData as McpError};

use crate::date::CaptureDate;

/// Unified error types for the snapshot archive.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL has no recorded history.
    #[error("NOT_FOUND: Url not found: {0}")]
    NotFound(String),

    /// The requested date precedes the earliest capture.
    #[error("OUT_OF_RANGE: Version not found for the given date {requested}")]
    OutOfRange { requested: CaptureDate },

    /// A capture arrived older than the most recent one for its URL.
    #[error("OUT_OF_ORDER: capture dated {captured_at} is older than latest capture {latest}")]
    OutOfOrder { captured_at: CaptureDate, latest: CaptureDate },

    /// URL failed canonicalization.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Date is not in `YYYY-MM-DD` form.
    #[error("INVALID_DATE: {0}")]
    InvalidDate(String),

    /// Invalid input parameters.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The content store has nothing at the resolved locator.
    #[error("CONTENT_MISSING: {0}")]
    ContentMissing(String),

    /// Content store IO failure.
    #[error("STORAGE_ERROR: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file could not be read or parsed.
    #[error("SEED_ERROR: {0}")]
    Seed(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::NotFound(_) => (-32001, err.to_string()),
            Error::OutOfRange { .. } => (-32002, err.to_string()),
            Error::OutOfOrder { .. } => (-32003, err.to_string()),
            Error::InvalidUrl(msg) | Error::InvalidDate(msg) | Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::ContentMissing(msg) => (-32004, msg.clone()),
            Error::Io(e) => (-32005, e.to_string()),
            Error::Seed(msg) => (-32006, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
