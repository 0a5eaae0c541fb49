use chunkdb_core::types::TermVector;

/// Cosine similarity between two term-frequency vectors.
///
/// The dot product runs over the tokens common to both vectors; each
/// norm runs over all of that vector's tokens. Returns 0.0 when the
/// vectors share no token or either norm is zero, so degenerate inputs
/// never divide by zero. Symmetric and never negative. Accumulation is
/// done in f64 so the result does not depend on map iteration order.
pub fn cosine(a: &TermVector, b: &TermVector) -> f32 {
    let mut dot = 0.0f64;
    for (token, &count_a) in a {
        if let Some(&count_b) = b.get(token) {
            dot += f64::from(count_a) * f64::from(count_b);
        }
    }
    if dot == 0.0 {
        return 0.0;
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)) as f32
}

fn norm(v: &TermVector) -> f64 {
    v.values().map(|&c| f64::from(c) * f64::from(c)).sum::<f64>().sqrt()
}
