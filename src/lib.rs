//! # dict-download - Streaming Dictionary Download Pipeline
//!
//! This crate streams dictionary downloads in LJSON (line-delimited JSON) format
//! and turns them into validated word records, ready to be loaded into a
//! storage backend.
//!
//! ## Features
//!
//! - **Lazy streaming**: Bytes are read only as fast as records are consumed
//! - **Incremental decoding**: UTF-8 decoding across arbitrary chunk boundaries
//! - **Per-read timeout**: A stalled source fails instead of hanging forever
//! - **Strict validation**: Header ordering and a path-aware word record schema
//! - **HTTP(S) and local sources**: Blocking `reqwest` client or `file://` URLs
//! - **Batching and progress**: Batch adapter for bulk inserts, cancellable progress reports
//!
//! ## Quick Start
//!
//! ```no_run
//! use dict_download::{get_download_iterator, DownloadConfig};
//! use url::Url;
//!
//! # fn main() -> dict_download::Result<()> {
//! let source = Url::parse("https://example.com/words-en-1.0.0-full.jsonl")?;
//! let records = get_download_iterator(&source, &DownloadConfig::default(), None)?;
//!
//! for record in records {
//!     let record = record?;
//!     for key in record.search_keys() {
//!         println!("{} -> {}", key, record.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Loading in Batches
//!
//! ```no_run
//! use dict_download::{get_download_iterator, DownloadConfig, RecordBatches};
//! use url::Url;
//!
//! # fn main() -> dict_download::Result<()> {
//! let config = DownloadConfig::default();
//! let source = Url::parse("file:///data/words-en-1.0.0-full.jsonl")?;
//! let records = get_download_iterator(&source, &config, None)?;
//!
//! for batch in RecordBatches::new(records, config.batch_size)? {
//!     let batch = batch?;
//!     println!("Inserting {} records", batch.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Framing**: [`framing`] turns a byte source into a lazy sequence of JSON values
//! - **Records**: [`records`] defines the header and word record types and their schema checks
//! - **Download**: [`download`] opens sources, validates record order and batches records
//! - **Utilities**: [`utils`] for URL handling, local files and progress reporting
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are represented by
//! [`DownloadError`]. Errors are fatal: once an iterator yields an `Err`, it ends.
//! The crate uses the `snafu` library for error handling with context and backtraces.
//!
//! ```
//! use dict_download::{DownloadError, Result};
//!
//! fn example() -> Result<u64> {
//!     Err(DownloadError::invalid_parameter("no source given"))
//! }
//!
//! assert!(example().is_err());
//! ```

pub mod download;
pub mod error;
pub mod framing;
pub mod records;
pub mod utils;

// Re-export commonly used types for convenience
pub use download::{
    get_download_iterator, DownloadConfig, DownloadIterator, RecordBatches, RecordValidator,
};
pub use framing::{LineBuffer, LjsonStream, TimedChunkReader};
pub use records::{HeaderLine, SchemaError, WordRecord, WordSense};

// Re-export error types for convenience
pub use error::{DownloadError, Result, snafu};
