//! chunkdb-index
//!
//! The mutable heart of the engine: an ordered, append-only store of
//! embedded line chunks answering top-k cosine queries with a full
//! linear scan. Single-writer-then-readers; callers needing concurrent
//! access wrap the index in a lock of their choosing.

use chunkdb_core::traits::{Embedder, SearchEngine};
use chunkdb_core::types::{ChunkRecord, ScoredChunk};
use chunkdb_text::{chunk_lines, cosine, ChunkerConfig, TermEmbedder};
use tracing::debug;

/// In-memory chunk index.
///
/// Insertion order is preserved and serves as the tie-break for
/// equal-score results; it carries no other meaning. There is no
/// deduplication: adding the same file twice appends a second full set
/// of chunks. Memory grows monotonically for the index's lifetime —
/// no eviction or capacity bound exists.
pub struct ChunkIndex {
    chunker: ChunkerConfig,
    embedder: Box<dyn Embedder>,
    chunks: Vec<ChunkRecord>,
}

impl ChunkIndex {
    /// Default windowing (50 lines, 5 overlap) with the term-frequency
    /// embedder.
    pub fn new() -> Self {
        Self::with_config(ChunkerConfig::default())
    }

    /// Custom windowing. Invalid parameter combinations are rejected at
    /// `ChunkerConfig` construction, so an index in hand always chunks
    /// with a valid, advancing window.
    pub fn with_config(chunker: ChunkerConfig) -> Self {
        Self { chunker, embedder: Box::new(TermEmbedder::new()), chunks: Vec::new() }
    }

    /// Swap in a different embedder. Existing records keep the vectors
    /// they were created with.
    pub fn with_embedder(chunker: ChunkerConfig, embedder: Box<dyn Embedder>) -> Self {
        Self { chunker, embedder, chunks: Vec::new() }
    }

    /// Number of chunks currently stored.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunks `content`, embeds each chunk once, and appends the records
    /// in chunk order. Never fails; returns the number of chunks added.
    pub fn add_file(&mut self, file_path: &str, content: &str) -> usize {
        let file_chunks = chunk_lines(content, &self.chunker);
        let added = file_chunks.len();
        for chunk in file_chunks {
            let embedding = self.embedder.embed(&chunk.content);
            self.chunks.push(ChunkRecord {
                file_path: file_path.to_string(),
                content: chunk.content,
                start_line: chunk.start_line,
                end_line: chunk.end_line,
                embedding,
            });
        }
        debug!(file_path, added, total = self.chunks.len(), "indexed file");
        added
    }

    /// Scores every stored chunk against the query and returns the top
    /// `k`, ranked by descending score. The sort is stable, so equal
    /// scores keep insertion order. `k == 0` or an empty index yields
    /// an empty result; `search` never fails.
    pub fn search(&self, query: &str, k: usize) -> Vec<ScoredChunk> {
        if k == 0 || self.chunks.is_empty() {
            return Vec::new();
        }
        let query_vec = self.embedder.embed(query);
        let mut scored: Vec<ScoredChunk> = self
            .chunks
            .iter()
            .map(|chunk| ScoredChunk {
                file_path: chunk.file_path.clone(),
                content: chunk.content.clone(),
                start_line: chunk.start_line,
                end_line: chunk.end_line,
                score: cosine(&query_vec, &chunk.embedding),
            })
            .collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }
}

impl Default for ChunkIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine for ChunkIndex {
    fn add_file(&mut self, file_path: &str, content: &str) -> usize {
        Self::add_file(self, file_path, content)
    }

    fn search(&self, query: &str, k: usize) -> Vec<ScoredChunk> {
        Self::search(self, query, k)
    }
}
