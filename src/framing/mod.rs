// Line framing for LJSON byte streams
//
// This module turns a raw byte source into a lazy sequence of JSON values,
// one per line, with incremental decoding and a per-read timeout.

pub mod line_buffer;
pub mod timed_reader;
pub mod ljson_stream;

pub use line_buffer::LineBuffer;
pub use timed_reader::{TimedChunkReader, DEFAULT_CHUNK_SIZE};
pub use ljson_stream::LjsonStream;
