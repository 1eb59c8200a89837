//! Vector math primitives
//!
//! Pure functions over fixed-length `f32` vectors. Scores are computed in
//! `f64` so clamping and tolerance checks downstream stay simple.

use crate::error::{Error, Result};

/// Cosine similarity sentinel for mathematically undefined cases.
///
/// Returned when either operand has magnitude zero, where the cosine is
/// undefined. Reserved for this case only; provider failures must surface
/// as errors, never as this value.
pub const UNDEFINED_SIMILARITY: f64 = -1.0;

/// Dot product of two vectors.
///
/// Fails with [`Error::DimensionMismatch`] when the lengths differ; a
/// mismatched vector is a contract violation, not a silent broadcast.
pub fn dot(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum())
}

/// L2 norm of a vector. A zero vector yields exactly 0.0, never NaN.
pub fn magnitude(a: &[f32]) -> f64 {
    a.iter().map(|x| f64::from(*x) * f64::from(*x)).sum::<f64>().sqrt()
}

/// Cosine similarity of two vectors, clamped to `[-1, 1]`.
///
/// When either magnitude is zero the result is [`UNDEFINED_SIMILARITY`]
/// rather than NaN, so ranking code never has to special-case NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    let dot_product = dot(a, b)?;
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(UNDEFINED_SIMILARITY);
    }

    // Clamp absorbs floating-point drift on near-parallel vectors.
    Ok((dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Cosine similarity with a precomputed norm for the query operand.
///
/// Brute-force scans compute the query norm once and reuse it per entry.
pub fn cosine_similarity_with_norm(query: &[f32], b: &[f32], query_norm: f64) -> Result<f64> {
    let dot_product = dot(query, b)?;
    let norm_b = magnitude(b);

    if query_norm == 0.0 || norm_b == 0.0 {
        return Ok(UNDEFINED_SIMILARITY);
    }

    Ok((dot_product / (query_norm * norm_b)).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn dot_rejects_mismatched_lengths() {
        let err = dot(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn magnitude_of_zero_vector_is_zero() {
        let m = magnitude(&[0.0, 0.0, 0.0]);
        assert_eq!(m, 0.0);
        assert!(!m.is_nan());
    }

    #[test]
    fn self_similarity_is_one() {
        let v = vec![0.3_f32, -1.2, 4.5, 0.01];
        let s = cosine_similarity(&v, &v).unwrap();
        assert!((s - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = vec![1.0_f32, 2.0, 3.0];
        let b = vec![-0.5_f32, 0.25, 2.0];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert!((ab - ba).abs() < TOLERANCE);
    }

    #[test]
    fn zero_vector_similarity_is_sentinel_not_nan() {
        let zero = vec![0.0_f32; 4];
        let v = vec![1.0_f32, 2.0, 3.0, 4.0];
        assert_eq!(cosine_similarity(&zero, &v).unwrap(), UNDEFINED_SIMILARITY);
        assert_eq!(cosine_similarity(&v, &zero).unwrap(), UNDEFINED_SIMILARITY);
        assert_eq!(
            cosine_similarity(&zero, &zero).unwrap(),
            UNDEFINED_SIMILARITY
        );
    }

    #[test]
    fn opposite_vectors_score_negative_one() {
        let a = vec![1.0_f32, 0.0];
        let b = vec![-1.0_f32, 0.0];
        let s = cosine_similarity(&a, &b).unwrap();
        assert!((s + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn result_is_clamped() {
        // Values chosen so naive float accumulation can drift past 1.0
        let a = vec![1e-3_f32; 1536];
        let s = cosine_similarity(&a, &a).unwrap();
        assert!(s <= 1.0);
        assert!(s >= -1.0);
    }

    #[test]
    fn precomputed_norm_matches_direct_computation() {
        let a = vec![0.7_f32, -0.1, 2.2];
        let b = vec![1.3_f32, 0.4, -0.9];
        let direct = cosine_similarity(&a, &b).unwrap();
        let with_norm = cosine_similarity_with_norm(&a, &b, magnitude(&a)).unwrap();
        assert!((direct - with_norm).abs() < TOLERANCE);
    }
}
