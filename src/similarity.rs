//! Vector similarity helpers for consumers of the embeddings.

use crate::errors::{EmbedError, EmbedResult};

/// Cosine similarity between two vectors of equal dimension.
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine(a: &[f32], b: &[f32]) -> EmbedResult<f32> {
    if a.len() != b.len() {
        return Err(EmbedError::Dimension(format!(
            "cosine: {} vs {} components",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [0.6f32, 0.8];
        let sim = cosine(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let sim = cosine(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let sim = cosine(&[1.0, 2.0], &[-1.0, -2.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_dimension_mismatch_is_error() {
        assert!(cosine(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_cosine_zero_vector_yields_zero() {
        let sim = cosine(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert_eq!(sim, 0.0);
    }
}
