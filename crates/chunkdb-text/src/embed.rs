use chunkdb_core::traits::Embedder;
use chunkdb_core::types::TermVector;
use regex::Regex;

/// Identifier-like tokens: a lowercase letter or underscore, then any
/// run of lowercase letters, digits or underscores, bounded on both
/// sides. Digit-leading runs (`1abc`) have no interior word boundary
/// and therefore contribute nothing.
const TOKEN_PATTERN: &str = r"\b[a-z_][a-z0-9_]*\b";

/// Bag-of-words embedder.
///
/// Case-folds the input and counts occurrences of each distinct token.
/// No stopword removal, no stemming. Pure: the same text always yields
/// the same vector.
pub struct TermEmbedder {
    token: Regex,
}

impl TermEmbedder {
    pub fn new() -> Self {
        let token = Regex::new(TOKEN_PATTERN).expect("token pattern is valid");
        Self { token }
    }
}

impl Default for TermEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for TermEmbedder {
    fn embed(&self, text: &str) -> TermVector {
        let lowered = text.to_lowercase();
        let mut counts = TermVector::new();
        for m in self.token.find_iter(&lowered) {
            *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
        }
        counts
    }
}
