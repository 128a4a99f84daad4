//! Source URL helpers.
//!
//! Downloads are addressed by URL. These helpers decode the path of a
//! `file://` URL and pick a short display name for log lines.
//!
//! # Examples
//!
//! ```
//! use dict_download::utils::url_utils;
//! use url::Url;
//!
//! let url = Url::parse("https://example.com/data/words%20en-1.0.0-full.jsonl?v=2")?;
//! assert_eq!(url_utils::get_decoded_file_name(&url)?, "words en-1.0.0-full.jsonl");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use url::Url;

use crate::utils::io_utils::fix_windows_path;
use crate::{DownloadError, Result};

pub fn get_decoded_path(url: &Url) -> Result<PathBuf> {
    let path_str = get_decoded_path_str(url)?;
    Ok(PathBuf::from(path_str))
}

pub fn get_decoded_path_str(url: &Url) -> Result<String> {
    let path = fix_windows_path(url.path());
    let decoded_path = percent_decode_str(&path).decode_utf8()?;
    Ok(decoded_path.to_string())
}

/// Extracts and decodes the last path segment of a URL.
///
/// # Errors
///
/// Returns `InvalidParameter` if the URL path has no file name, and
/// `ParserError` if the name is not valid UTF-8 once decoded.
pub fn get_decoded_file_name(url: &Url) -> Result<String> {
    let file_name = Path::new(url.path())
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DownloadError::invalid_parameter(format!("No file name in URL: {url}")))?;
    Ok(percent_decode_str(file_name).decode_utf8()?.to_string())
}

/// Short name for a source in log messages: the file name when there is
/// one, the whole URL otherwise.
pub fn display_name(url: &Url) -> String {
    get_decoded_file_name(url).unwrap_or_else(|_| url.to_string())
}
