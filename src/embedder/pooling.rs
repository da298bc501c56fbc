//! Mask-weighted mean pooling and L2 normalization.

use ndarray::{Array2, ArrayView3};

use crate::errors::{EmbedError, EmbedResult};

/// Smallest allowed mask weight sum; guards rows that are all padding.
const MIN_WEIGHT: f32 = 1e-9;

/// Collapse `[batch, seq, hidden]` token states into one L2-normalized
/// sentence vector per batch row, weighted by the attention mask so padding
/// tokens contribute nothing.
pub fn mean_pool(
    hidden: &ArrayView3<'_, f32>,
    mask: &Array2<i64>,
) -> EmbedResult<Vec<Vec<f32>>> {
    let (batch, seq, dim) = hidden.dim();
    if mask.dim() != (batch, seq) {
        return Err(EmbedError::Dimension(format!(
            "attention mask {:?} does not match hidden states [{batch}, {seq}, _]",
            mask.dim()
        )));
    }

    let mut vectors = Vec::with_capacity(batch);
    for i in 0..batch {
        let mut acc = vec![0.0f32; dim];
        let mut weight = 0.0f32;
        for j in 0..seq {
            if mask[[i, j]] == 0 {
                continue;
            }
            weight += 1.0;
            for (k, slot) in acc.iter_mut().enumerate() {
                *slot += hidden[[i, j, k]];
            }
        }
        let weight = weight.max(MIN_WEIGHT);
        for slot in acc.iter_mut() {
            *slot /= weight;
        }
        l2_normalize(&mut acc);
        vectors.push(acc);
    }
    Ok(vectors)
}

/// Scale `v` to unit length. Zero vectors are left as-is.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
