/// Fatal error taxonomy for the AHP engine.
///
/// Every variant aborts a calculation before any partial result escapes.
/// Judgment inconsistency (CR ≥ 0.10) is deliberately absent: it is a
/// warning carried in `ConsistencyVerdict`, never an error.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    /// Non-square matrix, non-positive or non-finite entry, or a zero
    /// column sum during normalization.
    #[error("invalid comparison matrix: {0}")]
    InvalidMatrix(String),

    /// No Random Index is tabulated for this matrix dimension.
    #[error("no random index for a {n}x{n} matrix (supported dimensions: 1 to 7)")]
    UnsupportedDimension { n: usize },

    /// A derived weight of zero cannot be used as a divisor in the
    /// lambda_max estimate.
    #[error("derived weight for item {index} is zero; consistency check is undefined")]
    DegenerateWeights { index: usize },

    /// Name lists, matrix dimensions, or the per-criterion matrix family
    /// disagree with each other.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}
