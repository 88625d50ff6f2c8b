/// Consistency checking for comparison matrices.
///
/// lambda_max is estimated from the derived weights, then normalized into a
/// Consistency Ratio against the Random Index for the matrix dimension.
use crate::constants::{CONSISTENCY_THRESHOLD, MAX_SUPPORTED_DIMENSION, RANDOM_INDEX};
use crate::error::AhpError;
use crate::matrix::ComparisonMatrix;

/// Outcome of a consistency check.
///
/// Inconsistency is advisory: the ratio is always reported, and the
/// calculation that produced it proceeds regardless. Callers decide how
/// loudly to surface a ratio at or above the 0.10 threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyVerdict {
    pub is_consistent: bool,
    pub ratio: f64,
}

/// Check how far a matrix deviates from perfect transitive consistency.
///
/// `weights` must be the priority vector derived from `matrix` (see
/// `derive_weights`); passing anything else yields a meaningless ratio.
pub fn consistency_check(
    matrix: &ComparisonMatrix,
    weights: &[f64],
) -> Result<ConsistencyVerdict, AhpError> {
    let n = matrix.dim();
    if n > MAX_SUPPORTED_DIMENSION {
        return Err(AhpError::UnsupportedDimension { n });
    }

    // RI = 0 for 1x1 and 2x2 matrices: reciprocal matrices of those sizes
    // cannot be inconsistent, so CR is 0 by convention. This also covers
    // the n = 1 case where CI's (n - 1) denominator would be zero.
    if n <= 2 {
        return Ok(ConsistencyVerdict {
            is_consistent: true,
            ratio: 0.0,
        });
    }

    let product = matrix.mul_weights(weights)?;
    let mut lambda_sum = 0.0;
    for (i, (&p, &w)) in product.iter().zip(weights).enumerate() {
        if w == 0.0 {
            return Err(AhpError::DegenerateWeights { index: i });
        }
        lambda_sum += p / w;
    }
    let lambda_max = lambda_sum / n as f64;

    let ci = (lambda_max - n as f64) / (n as f64 - 1.0);
    let ratio = ci / RANDOM_INDEX[n];

    Ok(ConsistencyVerdict {
        is_consistent: ratio < CONSISTENCY_THRESHOLD,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::derive_weights;

    fn check(rows: Vec<Vec<f64>>) -> ConsistencyVerdict {
        let m = ComparisonMatrix::from_rows(rows).unwrap();
        let w = derive_weights(&m).unwrap();
        consistency_check(&m, &w).unwrap()
    }

    #[test]
    fn test_perfectly_consistent_matrix_has_zero_ratio() {
        // M[i][j] = w[i] / w[j] is transitively consistent by construction.
        let w = [0.6, 0.25, 0.15];
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|i| (0..3).map(|j| w[i] / w[j]).collect())
            .collect();
        let verdict = check(rows);
        assert!(verdict.is_consistent);
        assert!(verdict.ratio.abs() < 1e-9, "CR = {}", verdict.ratio);
    }

    #[test]
    fn test_small_matrices_always_consistent() {
        // n = 1 and n = 2 have RI = 0: CR is 0 no matter what the entries say.
        let verdict = check(vec![vec![1.0]]);
        assert!(verdict.is_consistent);
        assert_eq!(verdict.ratio, 0.0);

        // Wildly non-reciprocal 2x2 still reports CR = 0.
        let verdict = check(vec![
            vec![1.0, 9.0],
            vec![7.0, 1.0],
        ]);
        assert!(verdict.is_consistent);
        assert_eq!(verdict.ratio, 0.0);
    }

    #[test]
    fn test_intransitive_judgments_flagged_inconsistent() {
        // A > B, B > C, but C > A: a preference cycle.
        let verdict = check(vec![
            vec![1.0, 3.0, 1.0 / 3.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![3.0, 1.0 / 3.0, 1.0],
        ]);
        assert!(!verdict.is_consistent);
        assert!(verdict.ratio >= CONSISTENCY_THRESHOLD);
    }

    #[test]
    fn test_unsupported_dimension() {
        let rows = vec![vec![1.0; 8]; 8];
        let m = ComparisonMatrix::from_rows(rows).unwrap();
        let w = derive_weights(&m).unwrap();
        let err = consistency_check(&m, &w).unwrap_err();
        assert_eq!(err, AhpError::UnsupportedDimension { n: 8 });
    }

    #[test]
    fn test_degenerate_weights() {
        let m = ComparisonMatrix::from_rows(vec![
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ])
        .unwrap();
        let err = consistency_check(&m, &[0.5, 0.0, 0.5]).unwrap_err();
        assert_eq!(err, AhpError::DegenerateWeights { index: 1 });
    }
}
