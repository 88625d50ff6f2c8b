/// Validated pairwise comparison matrix.
///
/// Square, with strictly positive finite entries: entry (i, j) answers
/// "how many times more important is item i than item j". Reciprocity
/// (entry(j, i) == 1/entry(i, j)) is not enforced — real judgment data
/// deviates from it, and the consistency check exists to measure exactly
/// that deviation.
use crate::error::AhpError;

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Validate raw rows into a comparison matrix.
    ///
    /// Rejects empty input, ragged/non-square shapes, and entries that are
    /// not strictly positive finite numbers.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let n = rows.len();
        if n == 0 {
            return Err(AhpError::InvalidMatrix("matrix has no rows".to_string()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AhpError::InvalidMatrix(format!(
                    "matrix is not square: {} rows but row {} has {} entries",
                    n,
                    i,
                    row.len(),
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(AhpError::InvalidMatrix(format!(
                        "entry ({i}, {j}) is {value}; judgments must be strictly positive finite numbers",
                    )));
                }
            }
        }
        Ok(ComparisonMatrix { rows })
    }

    /// Matrix dimension n (the matrix is n x n).
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    pub fn entry(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.dim();
        let mut sums = vec![0.0; n];
        for row in &self.rows {
            for (sum, &value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }

    /// Divide every entry by its column sum, so each column of the result
    /// sums to 1. A zero column sum is impossible for a constructed matrix
    /// (entries are strictly positive) but is still guarded: normalization
    /// must never emit NaN.
    pub fn normalized(&self) -> Result<Vec<Vec<f64>>, AhpError> {
        let sums = self.column_sums();
        if let Some(j) = sums.iter().position(|&s| s <= 0.0) {
            return Err(AhpError::InvalidMatrix(format!(
                "column {j} sums to zero; cannot normalize",
            )));
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.iter().zip(&sums).map(|(&v, &s)| v / s).collect())
            .collect())
    }

    /// Matrix-vector product `M · w`, used by the consistency check.
    pub fn mul_weights(&self, weights: &[f64]) -> Result<Vec<f64>, AhpError> {
        let n = self.dim();
        if weights.len() != n {
            return Err(AhpError::DimensionMismatch(format!(
                "weight vector has {} entries for a {n}x{n} matrix",
                weights.len(),
            )));
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.iter().zip(weights).map(|(&m, &w)| m * w).sum())
            .collect())
    }

    /// Reorder rows and columns by the same permutation: entry (i, j) of
    /// the result is entry (perm[i], perm[j]) of the original. Lets callers
    /// reorder their item lists without re-entering judgments.
    pub fn permuted(&self, perm: &[usize]) -> Result<Self, AhpError> {
        let n = self.dim();
        if perm.len() != n {
            return Err(AhpError::DimensionMismatch(format!(
                "permutation has {} entries for a {n}x{n} matrix",
                perm.len(),
            )));
        }
        let mut seen = vec![false; n];
        for &p in perm {
            if p >= n || seen[p] {
                return Err(AhpError::DimensionMismatch(format!(
                    "invalid permutation entry {p} for a {n}x{n} matrix",
                )));
            }
            seen[p] = true;
        }
        let rows = perm
            .iter()
            .map(|&i| perm.iter().map(|&j| self.rows[i][j]).collect())
            .collect();
        Ok(ComparisonMatrix { rows })
    }
}
