//! Record validation over a stream of JSON values.
//!
//! [`RecordValidator`] enforces the record order of a download: one header
//! line first, then word records only. Each word record is checked against
//! the record schema before it is yielded. The first problem ends the
//! sequence.

use log::{debug, info};
use serde_json::Value;

use crate::records::{HeaderLine, WordRecord};
use crate::utils::progress_report::{ProgressReportFn, ProgressState};
use crate::{DownloadError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidatorState {
    AwaitingHeader,
    ReadingRecords,
}

struct ProgressSettings {
    state_id: String,
    interval_percent: u64,
    reporter: ProgressReportFn,
}

/// Turns parsed LJSON lines into validated word records.
pub struct RecordValidator<I> {
    lines: I,
    state: ValidatorState,
    header: Option<HeaderLine>,
    records_read: u64,
    failed: bool,
    progress_settings: Option<ProgressSettings>,
    progress: Option<ProgressState>,
}

impl<I> RecordValidator<I>
where
    I: Iterator<Item = Result<Value>>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            state: ValidatorState::AwaitingHeader,
            header: None,
            records_read: 0,
            failed: false,
            progress_settings: None,
            progress: None,
        }
    }

    /// Reports record progress once the header announces the record count.
    ///
    /// # Arguments
    ///
    /// * `state_id` - Identifier passed through to the reporter
    /// * `interval_percent` - Percentage of records between reports
    /// * `reporter` - Callback; returning `true` cancels the download
    pub fn with_progress(mut self, state_id: &str, interval_percent: u64, reporter: ProgressReportFn) -> Self {
        self.progress_settings = Some(ProgressSettings {
            state_id: state_id.to_string(),
            interval_percent,
            reporter,
        });
        self
    }

    /// The header line, once it has been read.
    pub fn header(&self) -> Option<&HeaderLine> {
        self.header.as_ref()
    }

    /// Number of word records yielded so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    fn fail(&mut self, error: DownloadError) -> Option<Result<WordRecord>> {
        self.failed = true;
        Some(Err(error))
    }

    fn accept_header(&mut self, header: HeaderLine, line: &Value) -> Option<DownloadError> {
        if self.state == ValidatorState::ReadingRecords {
            return Some(DownloadError::duplicate_header(line));
        }
        info!(
            "Reading {:?} download, version {}, {} records{}",
            header.format,
            header.version,
            header.records,
            header.part.map(|part| format!(", part {part}")).unwrap_or_default()
        );
        if let Some(settings) = &self.progress_settings {
            self.progress = Some(ProgressState::new(
                &settings.state_id,
                header.records,
                settings.interval_percent,
                Some(settings.reporter),
            ));
        }
        self.header = Some(header);
        self.state = ValidatorState::ReadingRecords;
        None
    }

    fn accept_record(&mut self, line: &Value) -> Result<WordRecord> {
        if self.state == ValidatorState::AwaitingHeader {
            return Err(DownloadError::missing_header(line));
        }
        let record = WordRecord::from_value(line)?;
        if let Some(progress) = self.progress.as_mut() {
            if progress.report(self.records_read) {
                debug!("Download of {} cancelled by reporter", progress.state_id);
                return Err(DownloadError::user_interrupted());
            }
        }
        self.records_read += 1;
        Ok(record)
    }
}

impl<I> Iterator for RecordValidator<I>
where
    I: Iterator<Item = Result<Value>>,
{
    type Item = Result<WordRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return self.fail(e),
            };

            if let Some(header) = HeaderLine::recognize(&line) {
                match self.accept_header(header, &line) {
                    Some(e) => return self.fail(e),
                    None => continue,
                }
            }

            if !line.is_object() {
                return self.fail(DownloadError::unexpected_record(&line));
            }

            return match self.accept_record(&line) {
                Ok(record) => Some(Ok(record)),
                Err(e) => self.fail(e),
            };
        }
        None
    }
}

impl<I> std::iter::FusedIterator for RecordValidator<I> where I: Iterator<Item = Result<Value>> {}
