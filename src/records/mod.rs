// Record types carried by an LJSON download
//
// This module defines the header line and word record types, together with
// the structural checks that turn generic JSON values into them.

pub mod schema;
pub mod header;
pub mod word;

pub use schema::{SchemaError, SchemaResult};
pub use header::{DatabaseVersion, DownloadFormat, HeaderLine};
pub use word::{
    Accent, CrossReference, GlossType, KanjiMeta, LangSource, PitchAccent, ReadingMeta,
    WordRecord, WordSense, BITS_PER_GLOSS_TYPE,
};
