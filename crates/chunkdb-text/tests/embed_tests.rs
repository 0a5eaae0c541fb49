use chunkdb_core::traits::Embedder;
use chunkdb_core::types::TermVector;
use chunkdb_text::{cosine, TermEmbedder};
use quickcheck_macros::quickcheck;
use std::collections::HashMap;

fn vector(pairs: &[(&str, u32)]) -> TermVector {
    pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
}

#[test]
fn case_folds_and_keeps_identifier_tokens() {
    let embedder = TermEmbedder::new();
    let vec = embedder.embed("The Quick fox_1 jumps!");
    // "fox_1" matches in full: digits and underscores are allowed after
    // the first character.
    assert_eq!(
        vec,
        vector(&[("the", 1), ("quick", 1), ("fox_1", 1), ("jumps", 1)])
    );
}

#[test]
fn counts_repeated_tokens() {
    let embedder = TermEmbedder::new();
    let vec = embedder.embed("foo bar foo FOO");
    assert_eq!(vec.get("foo"), Some(&3));
    assert_eq!(vec.get("bar"), Some(&1));
    assert_eq!(vec.len(), 2);
}

#[test]
fn digit_leading_runs_contribute_nothing() {
    // No word boundary exists inside "1abc", so the tail never matches.
    let embedder = TermEmbedder::new();
    assert!(embedder.embed("1abc 42 9_lives").is_empty());
}

#[test]
fn underscore_may_lead_a_token() {
    let embedder = TermEmbedder::new();
    let vec = embedder.embed("_private __init__");
    assert_eq!(vec, vector(&[("_private", 1), ("__init__", 1)]));
}

#[test]
fn non_ascii_words_contribute_nothing() {
    // Accented characters are word characters, so no boundary separates
    // them from adjacent ASCII letters.
    let embedder = TermEmbedder::new();
    assert!(embedder.embed("héllo wörld").is_empty());
    assert!(embedder.embed("...!?").is_empty());
    assert!(embedder.embed("").is_empty());
}

#[test]
fn punctuation_separates_tokens() {
    let embedder = TermEmbedder::new();
    let vec = embedder.embed("a.b(c), d-e");
    assert_eq!(
        vec,
        vector(&[("a", 1), ("b", 1), ("c", 1), ("d", 1), ("e", 1)])
    );
}

#[test]
fn cosine_of_identical_vectors_is_one() {
    let a = vector(&[("parse", 2), ("token", 3)]);
    assert!((cosine(&a, &a) - 1.0).abs() < 1e-6);
}

#[test]
fn cosine_handles_disjoint_and_empty_vectors() {
    let a = vector(&[("alpha", 1)]);
    let b = vector(&[("beta", 1)]);
    let empty = TermVector::new();
    assert_eq!(cosine(&a, &b), 0.0);
    assert_eq!(cosine(&a, &empty), 0.0);
    assert_eq!(cosine(&empty, &empty), 0.0);
}

#[test]
fn cosine_known_value() {
    // dot = 1, |a| = sqrt(2), |b| = 1
    let a = vector(&[("x", 1), ("y", 1)]);
    let b = vector(&[("x", 1)]);
    let expected = 1.0 / 2.0f32.sqrt();
    assert!((cosine(&a, &b) - expected).abs() < 1e-6);
}

#[quickcheck]
fn cosine_is_symmetric_and_bounded(a: HashMap<String, u8>, b: HashMap<String, u8>) -> bool {
    let a: TermVector = a.into_iter().map(|(t, c)| (t, u32::from(c))).collect();
    let b: TermVector = b.into_iter().map(|(t, c)| (t, u32::from(c))).collect();
    let ab = cosine(&a, &b);
    let ba = cosine(&b, &a);
    (ab - ba).abs() < 1e-6 && ab >= 0.0 && ab <= 1.0 + 1e-6
}

#[quickcheck]
fn embedding_is_deterministic(text: String) -> bool {
    let embedder = TermEmbedder::new();
    embedder.embed(&text) == embedder.embed(&text)
}
