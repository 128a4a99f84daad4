//! Line-delimited JSON over a timed chunk reader.
//!
//! [`LjsonStream`] pulls chunks from a [`TimedChunkReader`], frames them into
//! lines with a [`LineBuffer`] and parses each non-empty line as a generic
//! JSON value. The stream is lazy: a chunk is only read once every line from
//! the previous chunk has been consumed.
//!
//! Any failure (read error, timeout, malformed line) releases the reader and
//! ends the stream. The iterator returns `None` after the first error.

use std::collections::VecDeque;
use std::io::Read;
use std::time::Duration;

use serde_json::Value;

use crate::framing::line_buffer::LineBuffer;
use crate::framing::timed_reader::TimedChunkReader;
use crate::{DownloadError, Result};

pub struct LjsonStream {
    reader: TimedChunkReader,
    buffer: LineBuffer,
    lines: VecDeque<String>,
    finished: bool,
    failed: bool,
}

impl LjsonStream {
    /// Frames `source` into JSON values.
    ///
    /// # Arguments
    ///
    /// * `source` - Byte source, owned by the stream until it ends
    /// * `url` - Source reference used in timeout messages
    /// * `timeout` - Longest time a single read may take
    /// * `chunk_size` - Read buffer size
    pub fn new<R>(source: R, url: &str, timeout: Duration, chunk_size: usize) -> Result<Self>
    where
        R: Read + Send + 'static,
    {
        let reader = TimedChunkReader::spawn(source, url, timeout, chunk_size)?;
        Ok(Self::from_reader(reader))
    }

    pub fn from_reader(reader: TimedChunkReader) -> Self {
        Self {
            reader,
            buffer: LineBuffer::new(),
            lines: VecDeque::new(),
            finished: false,
            failed: false,
        }
    }

    pub fn url(&self) -> &str {
        self.reader.url()
    }

    fn fail(&mut self, error: DownloadError) -> Option<Result<Value>> {
        self.failed = true;
        self.lines.clear();
        self.reader.release();
        Some(Err(error))
    }

    fn parse_line(&mut self, line: String) -> Option<Result<Value>> {
        match serde_json::from_str::<Value>(&line) {
            Ok(value) => Some(Ok(value)),
            Err(e) => self.fail(DownloadError::invalid_json(line, e)),
        }
    }
}

impl Iterator for LjsonStream {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed {
                return None;
            }
            if let Some(line) = self.lines.pop_front() {
                return self.parse_line(line);
            }
            if self.finished {
                return None;
            }
            match self.reader.read_chunk() {
                Ok(Some(chunk)) => self.buffer.push(&chunk, &mut self.lines),
                Ok(None) => {
                    self.buffer.finish(&mut self.lines);
                    self.finished = true;
                }
                Err(e) => return self.fail(e),
            }
        }
    }
}

impl std::iter::FusedIterator for LjsonStream {}
