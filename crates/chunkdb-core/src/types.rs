//! Domain types shared by the chunking, embedding and index crates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sparse term-frequency vector: token → occurrence count.
pub type TermVector = HashMap<String, u32>;

/// One contiguous, possibly overlapping slice of a source file's lines,
/// embedded at creation time.
///
/// - `file_path`: opaque key identifying the owning document
/// - `content`: the text of the slice, immutable once created
/// - `start_line`/`end_line`: 1-based inclusive bounds, `start_line <= end_line`
/// - `embedding`: term-frequency vector derived from `content`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub file_path: String,
    pub content: String,
    pub start_line: usize,
    pub end_line: usize,
    pub embedding: TermVector,
}

/// A ranked search result.
///
/// `score` is cosine similarity against the query vector, always in
/// `[0.0, 1.0]`. Higher is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub file_path: String,
    pub content: String,
    pub start_line: usize,
    pub end_line: usize,
    pub score: f32,
}
