//! Error types and result type for the download pipeline.
//!
//! Every stage of the pipeline (fetch, framing, record validation) reports
//! failures through [`DownloadError`]. Errors are fatal: the first one ends
//! the sequence it was raised from. The enum uses the `snafu` library with
//! automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use dict_download::{DownloadError, Result};
//!
//! fn check_batch_size(batch_size: usize) -> Result<usize> {
//!     if batch_size == 0 {
//!         return Err(DownloadError::invalid_parameter("batch_size must be positive"));
//!     }
//!     Ok(batch_size)
//! }
//!
//! assert!(check_batch_size(0).is_err());
//! ```
//!
//! # Error Variants
//!
//! - Transport: [`DownloadError::Request`], [`DownloadError::HttpStatus`],
//!   [`DownloadError::MissingBody`], [`DownloadError::Io`], [`DownloadError::ReaderClosed`]
//! - Timeout: [`DownloadError::Timeout`]
//! - Framing: [`DownloadError::InvalidJson`]
//! - Protocol sequence: [`DownloadError::DuplicateHeader`], [`DownloadError::MissingHeader`],
//!   [`DownloadError::UnexpectedRecord`]
//! - Schema: [`DownloadError::InvalidRecord`]

use std::io;
use std::time::Duration;

use snafu::{Backtrace, Snafu};

use crate::records::schema::SchemaError;

pub use snafu;

/// Main error type for the crate.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum DownloadError {
    /// I/O error from the underlying byte source.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// The HTTP request could not be sent or the connection failed.
    #[snafu(display("Failed to fetch {url}: {source}"))]
    Request {
        url: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The server answered with a non-success status.
    #[snafu(display("Failed to fetch {url}, status: {status}"))]
    HttpStatus {
        url: String,
        status: u16,
        backtrace: Backtrace,
    },

    /// The response has no body to stream.
    #[snafu(display("Failed to fetch {url}, body is null"))]
    MissingBody {
        url: String,
        backtrace: Backtrace,
    },

    /// A single read did not complete within the configured duration.
    #[snafu(display("Timeout waiting for {url} (after {}ms)", timeout.as_millis()))]
    Timeout {
        url: String,
        timeout: Duration,
        backtrace: Backtrace,
    },

    /// The reader thread went away without reporting a result.
    #[snafu(display("Reader for {url} closed unexpectedly"))]
    ReaderClosed {
        url: String,
        backtrace: Backtrace,
    },

    /// A non-empty line is not valid JSON.
    #[snafu(display("Could not parse JSON in database file: {line}"))]
    InvalidJson {
        line: String,
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// A second header line appeared in the stream.
    #[snafu(display("Got duplicate database header: {record}"))]
    DuplicateHeader {
        record: String,
        backtrace: Backtrace,
    },

    /// A data record appeared before the header line.
    #[snafu(display("Expected database version but got {record}"))]
    MissingHeader {
        record: String,
        backtrace: Backtrace,
    },

    /// A line is neither the header nor an object.
    #[snafu(display("Got unexpected record: {record}"))]
    UnexpectedRecord {
        record: String,
        backtrace: Backtrace,
    },

    /// A record object failed the word record schema.
    #[snafu(display("Invalid word record: {source}"))]
    InvalidRecord {
        source: SchemaError,
        backtrace: Backtrace,
    },

    /// Error parsing configuration, URLs or other structured input.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// Operation was cancelled by the progress reporter.
    #[snafu(display("User interrupted"))]
    UserInterrupted {
        backtrace: Backtrace,
    },
}

impl From<io::Error> for DownloadError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<url::ParseError> for DownloadError {
    fn from(source: url::ParseError) -> Self {
        Self::ParserError { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

impl From<std::str::Utf8Error> for DownloadError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self::ParserError { source: Box::new(source), backtrace: Backtrace::capture() }
    }
}

impl From<SchemaError> for DownloadError {
    fn from(source: SchemaError) -> Self {
        Self::InvalidRecord { source, backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl DownloadError {
    /// Creates an `InvalidParameter` error with the given message.
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `Timeout` error for the given source.
    pub fn timeout<S: Into<String>>(url: S, timeout: Duration) -> Self {
        Self::Timeout {
            url: url.into(),
            timeout,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `ReaderClosed` error for the given source.
    pub fn reader_closed<S: Into<String>>(url: S) -> Self {
        Self::ReaderClosed {
            url: url.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidJson` error naming the offending raw line.
    pub fn invalid_json<S: Into<String>>(line: S, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            line: line.into(),
            source,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `DuplicateHeader` error for the given parsed line.
    pub fn duplicate_header(record: &serde_json::Value) -> Self {
        Self::DuplicateHeader {
            record: record.to_string(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `MissingHeader` error for the record that arrived first.
    pub fn missing_header(record: &serde_json::Value) -> Self {
        Self::MissingHeader {
            record: record.to_string(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `UnexpectedRecord` error for a value that is not an object.
    pub fn unexpected_record(record: &serde_json::Value) -> Self {
        Self::UnexpectedRecord {
            record: record.to_string(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `UserInterrupted` error.
    pub fn user_interrupted() -> Self {
        Self::UserInterrupted {
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `Timeout` variant.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DownloadError::Timeout { .. })
    }

    /// Checks if this error came from record validation.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, DownloadError::InvalidRecord { .. })
    }
}

/// A specialized `Result` type for download operations.
pub type Result<T> = std::result::Result<T, DownloadError>;
