//! Opening a download source and assembling the pipeline.

use std::io::Read;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use snafu::{Backtrace, ResultExt};
use url::Url;

use crate::download::config::DownloadConfig;
use crate::download::validator::RecordValidator;
use crate::error::RequestSnafu;
use crate::framing::LjsonStream;
use crate::utils::io_utils;
use crate::utils::progress_report::ProgressReportFn;
use crate::utils::url_utils;
use crate::{DownloadError, Result};

/// Lazy sequence of validated word records for one download.
pub type DownloadIterator = RecordValidator<LjsonStream>;

/// Byte source of a download, owned by the pipeline's reader thread.
pub type SourceReader = Box<dyn Read + Send>;

/// Opens `source` and checks that it has a body to stream.
///
/// HTTP(S) sources are requested with a blocking client. The status is
/// checked before any data is read. `file://` sources are opened directly.
pub fn open_source(source: &Url, config: &DownloadConfig) -> Result<SourceReader> {
    match source.scheme() {
        "http" | "https" => open_http(source, config),
        "file" => {
            let reader = io_utils::open_file_url_as_reader(source)?;
            debug!("Opened local source {}", url_utils::display_name(source));
            Ok(Box::new(reader))
        }
        scheme => Err(DownloadError::invalid_parameter(format!(
            "Unsupported source scheme: {scheme}"
        ))),
    }
}

fn open_http(source: &Url, config: &DownloadConfig) -> Result<SourceReader> {
    let url = source.as_str();
    // Reads are bounded by the per-read timeout instead.
    let mut builder = Client::builder()
        .timeout(None::<Duration>)
        .connect_timeout(config.connect_timeout())
        .user_agent(config.user_agent.as_str());
    if !config.use_system_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build().context(RequestSnafu { url })?;

    let response = client.get(source.clone()).send().context(RequestSnafu { url })?;
    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
            backtrace: Backtrace::capture(),
        });
    }
    if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
        return Err(DownloadError::MissingBody {
            url: url.to_string(),
            backtrace: Backtrace::capture(),
        });
    }

    debug!(
        "Opened {} ({} bytes expected)",
        url,
        response.content_length().map(|n| n.to_string()).unwrap_or_else(|| "unknown".to_string())
    );
    Ok(Box::new(response))
}

/// Fetches `source` and returns a lazy sequence of validated word records.
///
/// Connection problems and HTTP status errors are reported here, before
/// any record is read. Everything after that (timeouts, malformed lines,
/// protocol and schema violations) surfaces as the first `Err` item of the
/// returned iterator, which then ends.
///
/// Dropping the iterator releases the source, even mid-stream.
///
/// # Arguments
///
/// * `source` - `http`, `https` or `file` URL of an LJSON download
/// * `config` - Timeouts, read buffer size and progress interval
/// * `reporter` - Optional progress callback, invoked against the record
///   count announced by the header
///
/// # Examples
///
/// ```no_run
/// use dict_download::{get_download_iterator, DownloadConfig};
/// use url::Url;
///
/// let source = Url::parse("https://example.com/words-en-1.0.0-full.jsonl")?;
/// for record in get_download_iterator(&source, &DownloadConfig::default(), None)? {
///     let record = record?;
///     println!("{}: {:?}", record.id, record.readings);
/// }
/// # Ok::<(), dict_download::DownloadError>(())
/// ```
pub fn get_download_iterator(
    source: &Url,
    config: &DownloadConfig,
    reporter: Option<ProgressReportFn>,
) -> Result<DownloadIterator> {
    config.validate()?;
    let reader = open_source(source, config)?;
    let lines = LjsonStream::new(reader, source.as_str(), config.read_timeout(), config.chunk_size)?;
    let records = RecordValidator::new(lines);
    Ok(match reporter {
        Some(reporter) => records.with_progress(
            &url_utils::display_name(source),
            config.progress_interval_percent,
            reporter,
        ),
        None => records,
    })
}
