/// Priority weight extraction.
use crate::error::AhpError;
use crate::matrix::ComparisonMatrix;

/// Derive the priority weight vector of a comparison matrix:
/// column-normalize, then take row-wise means.
///
/// This is the standard AHP approximation to the principal eigenvector.
/// Exact eigen-decomposition would produce slightly different numbers, so
/// the approximation is kept for parity with established AHP outputs.
///
/// The result sums to 1.0 within floating-point tolerance and every entry
/// is non-negative.
pub fn derive_weights(matrix: &ComparisonMatrix) -> Result<Vec<f64>, AhpError> {
    let normalized = matrix.normalized()?;
    let n = matrix.dim();
    Ok(normalized
        .iter()
        .map(|row| row.iter().sum::<f64>() / n as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let m = ComparisonMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![0.5, 1.0, 2.0, 3.0],
            vec![0.33, 0.5, 1.0, 2.0],
            vec![0.25, 0.33, 0.5, 1.0],
        ])
        .unwrap();
        let weights = derive_weights(&m).unwrap();
        assert_eq!(weights.len(), 4);
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}");
        assert!(weights.iter().all(|&w| w >= 0.0));
    }

    #[test]
    fn test_weights_order_matches_dominance() {
        // Row 0 dominates every comparison, row 2 loses every comparison.
        let m = ComparisonMatrix::from_rows(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![0.2, 1.0 / 3.0, 1.0],
        ])
        .unwrap();
        let weights = derive_weights(&m).unwrap();
        assert!(weights[0] > weights[1]);
        assert!(weights[1] > weights[2]);
    }

    #[test]
    fn test_weights_recover_consistent_matrix() {
        // M[i][j] = w[i] / w[j] for a known w: the approximation is exact here.
        let w = [0.5, 0.3, 0.2];
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|i| (0..3).map(|j| w[i] / w[j]).collect())
            .collect();
        let m = ComparisonMatrix::from_rows(rows).unwrap();
        let derived = derive_weights(&m).unwrap();
        for (d, expected) in derived.iter().zip(w) {
            assert!((d - expected).abs() < 1e-12, "derived {d}, expected {expected}");
        }
    }

    #[test]
    fn test_single_item_weight_is_one() {
        let m = ComparisonMatrix::from_rows(vec![vec![1.0]]).unwrap();
        assert_eq!(derive_weights(&m).unwrap(), vec![1.0]);
    }
}
