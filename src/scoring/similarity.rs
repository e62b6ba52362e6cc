//! Cosine similarity between bag-of-words vectors.

use crate::error::Result;
use crate::scoring::vectorizer::BagOfWordsVector;

/// Cosine similarity between two vectors built against the same vocabulary.
///
/// Returns `Ok(None)` when either vector has zero norm, since the angle is
/// undefined there; callers treat such pairings as unscoreable rather than
/// as a score of zero. Identical dot and norm values always divide to the
/// same `f64`, so equal scores compare exactly equal.
pub fn cosine_similarity(a: &BagOfWordsVector, b: &BagOfWordsVector) -> Result<Option<f64>> {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(None);
    }

    let dot = a.dot(b)?;
    Ok(Some(dot / (norm_a * norm_b)))
}
