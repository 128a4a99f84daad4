//! I/O helpers for local download sources.
//!
//! Besides HTTP(S), a download can be read from a `file://` URL, which is
//! how fixtures and pre-fetched dumps are loaded.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use url::Url;

use crate::utils::url_utils;
use crate::{DownloadError, Result};

/// Fixes Windows file paths by removing the leading slash.
///
/// Under Windows, file URLs look like "file:///C:/Users/test/words.jsonl",
/// so the leading "/" has to go to get a valid Windows path.
pub fn fix_windows_path(path: &str) -> String {
    #[cfg(windows)]
    {
        let bytes = path.as_bytes();
        if bytes.len() > 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
            return path[1..].to_string();
        }
    }
    path.to_string()
}

/// Resolves a `file://` URL to a local path.
pub fn file_url_to_path(url: &Url) -> Result<PathBuf> {
    if url.scheme() != "file" {
        return Err(DownloadError::invalid_parameter(format!(
            "Unsupported scheme: {}",
            url.scheme()
        )));
    }
    url_utils::get_decoded_path(url)
}

/// Opens a file URL and returns a buffered reader.
///
/// # Errors
///
/// Returns an error if the URL scheme is not "file" or the file cannot be opened.
pub fn open_file_url_as_reader(url: &Url) -> Result<BufReader<File>> {
    let path = file_url_to_path(url)?;
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}
