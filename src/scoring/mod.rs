//! Embedding-based similarity scoring.
//!
//! Scores are cosine similarity between L2-normalized embeddings, scaled by
//! [`SIMILARITY_SCALE`](crate::constants::SIMILARITY_SCALE) (0-100 for
//! non-negative similarity).

pub mod error;
pub mod scorer;


pub use error::ScoringError;
pub use scorer::SimilarityScorer;

/// Returns `v` scaled to unit length. A zero vector stays zero.
pub fn l2_normalize(v: &[f32]) -> Vec<f32> {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        v.to_vec()
    } else {
        v.iter().map(|x| x / norm).collect()
    }
}

/// Dot product of the normalized inputs.
///
/// Empty or dimension-mismatched vectors score `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let a = l2_normalize(a);
    let b = l2_normalize(b);

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as f64) * (y as f64))
        .sum();

    dot as f32
}
