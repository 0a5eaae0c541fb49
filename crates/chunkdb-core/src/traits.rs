use crate::types::{ScoredChunk, TermVector};

/// Turns text into a sparse term-frequency vector. Implementations must
/// be pure: the same text always yields the same vector.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> TermVector;
}

/// An append-only chunk store answering ranked top-k queries.
///
/// `add_file` and `search` are total given a validly constructed engine;
/// degenerate inputs degrade to empty results rather than errors. The
/// `&mut`/`&` split enforces the single-writer-then-readers contract.
pub trait SearchEngine: Send + Sync {
    /// Chunks and embeds `content`, appending the records under
    /// `file_path`. Returns the number of chunks added.
    fn add_file(&mut self, file_path: &str, content: &str) -> usize;

    /// Returns at most `k` chunks ranked by descending score, ties
    /// broken by insertion order.
    fn search(&self, query: &str, k: usize) -> Vec<ScoredChunk>;
}
