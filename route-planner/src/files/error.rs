//! File adapter error types.

use crate::domain::InvalidLocationId;
use crate::network::NetworkError;

/// Errors that can occur while loading the network from CSV.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// CSV reading failed (including I/O)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row could not be interpreted
    #[error("line {line}: {message}")]
    InvalidRow { line: u64, message: String },

    /// The row was valid but conflicts with the network
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

/// Errors that can occur while reading a route request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Request file could not be read
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),

    /// Line without a `Key:value` separator
    #[error("malformed line: {0:?}")]
    MalformedLine(String),

    /// Required field absent
    #[error("missing required field {0}")]
    MissingField(&'static str),

    /// Mode other than `driving` or `driving-walking`
    #[error("unknown mode {0:?}")]
    UnknownMode(String),

    /// Field holding an invalid location id
    #[error("invalid {field}: {source}")]
    InvalidId {
        field: &'static str,
        source: InvalidLocationId,
    },

    /// Field holding an invalid number
    #[error("invalid {field}: {value:?} is not a whole number of minutes")]
    InvalidNumber { field: &'static str, value: String },

    /// Segment list not of the form `(a,b),(c,d)`
    #[error("invalid segment list: {0:?}")]
    InvalidSegment(String),
}

/// Errors that can occur while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Report file could not be written
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
