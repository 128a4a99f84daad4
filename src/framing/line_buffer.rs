//! Incremental UTF-8 decoding and line splitting.
//!
//! Chunks may end anywhere, including inside a multi-byte character or
//! between the `\r` and `\n` of a CRLF pair. [`LineBuffer`] decodes in
//! streaming mode and keeps at most one unterminated line pending between
//! chunks. Every complete line has been handed out by the time a call
//! returns.

use std::collections::VecDeque;

use encoding_rs::{CoderResult, Decoder, UTF_8};

const LINE_TERMINATORS: [char; 2] = ['\n', '\r'];

pub struct LineBuffer {
    decoder: Decoder,
    pending: String,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            decoder: UTF_8.new_decoder_with_bom_removal(),
            pending: String::new(),
        }
    }

    /// Decodes `chunk` and appends every line it completes to `lines`.
    pub fn push(&mut self, chunk: &[u8], lines: &mut VecDeque<String>) {
        let searched = self.pending.len();
        self.decode(chunk, false);
        // Earlier text holds no terminator, so only the new suffix is searched.
        let Some(last_end) = self.pending[searched..].rfind(LINE_TERMINATORS).map(|i| searched + i) else {
            return;
        };
        // Terminators are single bytes, so last_end + 1 is a char boundary.
        let tail = self.pending.split_off(last_end + 1);
        let complete = std::mem::replace(&mut self.pending, tail);
        split_lines(&complete, lines);
    }

    /// Flushes the decoder and emits the unterminated remainder, if any.
    pub fn finish(&mut self, lines: &mut VecDeque<String>) {
        self.decode(&[], true);
        let rest = std::mem::take(&mut self.pending);
        split_lines(&rest, lines);
    }

    /// Text received since the last line terminator.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    fn decode(&mut self, mut src: &[u8], last: bool) {
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(src.len())
                .unwrap_or(src.len() * 3 + 4);
            self.pending.reserve(needed);
            let (result, read, _) = self.decoder.decode_to_string(src, &mut self.pending, last);
            src = &src[read..];
            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }
    }
}

fn split_lines(text: &str, lines: &mut VecDeque<String>) {
    lines.extend(
        text.split(LINE_TERMINATORS)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    );
}
