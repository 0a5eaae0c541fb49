//! chunkdb-text
//!
//! Pure text analysis: line-window chunking, term-frequency embedding
//! and cosine scoring. No I/O, no state between calls.

pub mod chunker;
pub mod embed;
pub mod similarity;

pub use chunker::{chunk_lines, ChunkerConfig, LineChunk};
pub use embed::TermEmbedder;
pub use similarity::cosine;
