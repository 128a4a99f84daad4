//! Batching adapter for bulk loading.
//!
//! Storage backends insert records in fixed-size batches. [`RecordBatches`]
//! groups a record sequence into batches of at most `batch_size` records,
//! followed by the remaining partial batch.

use crate::records::WordRecord;
use crate::{DownloadError, Result};

pub struct RecordBatches<I> {
    records: I,
    batch_size: usize,
    done: bool,
}

impl<I> RecordBatches<I>
where
    I: Iterator<Item = Result<WordRecord>>,
{
    /// Groups `records` into batches of `batch_size`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `batch_size` is zero.
    pub fn new(records: I, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(DownloadError::invalid_parameter("batch_size must be positive"));
        }
        Ok(Self { records, batch_size, done: false })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The wrapped record sequence, e.g. to read the download header.
    pub fn inner(&self) -> &I {
        &self.records
    }
}

impl<I> Iterator for RecordBatches<I>
where
    I: Iterator<Item = Result<WordRecord>>,
{
    type Item = Result<Vec<WordRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut batch = Vec::with_capacity(self.batch_size);
        while batch.len() < self.batch_size {
            match self.records.next() {
                Some(Ok(record)) => batch.push(record),
                Some(Err(e)) => {
                    // The partial batch is dropped with the error.
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if batch.is_empty() { None } else { Some(Ok(batch)) }
    }
}

impl<I> std::iter::FusedIterator for RecordBatches<I> where I: Iterator<Item = Result<WordRecord>> {}
