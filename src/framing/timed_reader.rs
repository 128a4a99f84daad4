//! Chunked reads with a per-read timeout.
//!
//! A blocking [`Read`] cannot be abandoned halfway through a call, so the
//! source is moved onto a small reader thread. The caller asks for one
//! chunk at a time and waits for the answer with `recv_timeout`. Nothing is
//! read until a chunk is requested, so the source is never read ahead of the
//! consumer.
//!
//! Releasing the reader drops the request channel. The reader thread then
//! exits and drops the source as soon as any read in flight returns.

use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use crossbeam::channel::{bounded, Receiver, RecvTimeoutError, Sender};
use log::{debug, trace, warn};

use crate::{DownloadError, Result};

pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

pub struct TimedChunkReader {
    url: String,
    timeout: Duration,
    requests: Option<Sender<()>>,
    chunks: Receiver<io::Result<Vec<u8>>>,
}

impl TimedChunkReader {
    /// Moves `source` onto a reader thread and returns the handle that
    /// requests chunks from it.
    ///
    /// # Arguments
    ///
    /// * `source` - The byte source, exclusively owned from now on
    /// * `url` - Source reference used in diagnostics
    /// * `timeout` - Longest time a single read may take
    /// * `chunk_size` - Size of the buffer handed to each `read` call
    pub fn spawn<R>(source: R, url: &str, timeout: Duration, chunk_size: usize) -> Result<Self>
    where
        R: Read + Send + 'static,
    {
        if chunk_size == 0 {
            return Err(DownloadError::invalid_parameter("chunk_size must be positive"));
        }
        let (request_tx, request_rx) = bounded::<()>(1);
        let (chunk_tx, chunk_rx) = bounded::<io::Result<Vec<u8>>>(1);
        thread::Builder::new()
            .name("ljson-reader".to_string())
            .spawn(move || read_on_request(source, chunk_size, request_rx, chunk_tx))?;
        Ok(Self {
            url: url.to_string(),
            timeout,
            requests: Some(request_tx),
            chunks: chunk_rx,
        })
    }

    /// Reads the next chunk. `Ok(None)` marks the end of the stream.
    ///
    /// On end of stream, error or timeout the reader is released, and every
    /// later call fails with `ReaderClosed`.
    pub fn read_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let Some(requests) = &self.requests else {
            return Err(DownloadError::reader_closed(&self.url));
        };
        if requests.send(()).is_err() {
            self.release();
            return Err(DownloadError::reader_closed(&self.url));
        }
        match self.chunks.recv_timeout(self.timeout) {
            Ok(Ok(chunk)) if chunk.is_empty() => {
                self.release();
                Ok(None)
            }
            Ok(Ok(chunk)) => {
                trace!("Read {} bytes from {}", chunk.len(), self.url);
                Ok(Some(chunk))
            }
            Ok(Err(e)) => {
                self.release();
                Err(e.into())
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!("No data from {} within {}ms", self.url, self.timeout.as_millis());
                self.release();
                Err(DownloadError::timeout(&self.url, self.timeout))
            }
            Err(RecvTimeoutError::Disconnected) => {
                self.release();
                Err(DownloadError::reader_closed(&self.url))
            }
        }
    }

    /// Gives up the source. Only the first call has any effect.
    pub fn release(&mut self) {
        if self.requests.take().is_some() {
            debug!("Released reader for {}", self.url);
        }
    }

    pub fn is_released(&self) -> bool {
        self.requests.is_none()
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for TimedChunkReader {
    fn drop(&mut self) {
        self.release();
    }
}

fn read_on_request<R: Read>(
    mut source: R,
    chunk_size: usize,
    requests: Receiver<()>,
    chunks: Sender<io::Result<Vec<u8>>>,
) {
    while requests.recv().is_ok() {
        let mut buf = vec![0u8; chunk_size];
        let result = loop {
            match source.read(&mut buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => break other,
            }
        };
        let finished = !matches!(result, Ok(n) if n > 0);
        let message = result.map(|n| {
            buf.truncate(n);
            buf
        });
        if chunks.send(message).is_err() || finished {
            break;
        }
    }
}
