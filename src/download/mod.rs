// Download pipeline
//
// This module opens a download source, validates the record sequence and
// provides the batching adapter used for bulk loading.

pub mod batch;
pub mod config;
pub mod fetch;
pub mod validator;

pub use batch::RecordBatches;
pub use config::DownloadConfig;
pub use fetch::{get_download_iterator, open_source, DownloadIterator, SourceReader};
pub use validator::RecordValidator;
