/// ahp-core: Pure-computation Analytic Hierarchy Process engine.
///
/// Pairwise comparison matrices → priority weight vectors → consistency-checked
/// ranking of alternatives. No IO, no filesystem — just math. The caller
/// supplies every matrix and name list; nothing is hardcoded.
///
/// Weights use the column-normalize-then-row-mean approximation to the
/// principal eigenvector, the standard AHP shortcut. Judgment inconsistency
/// (CR ≥ 0.10) is advisory and never aborts a calculation; malformed input
/// (non-square matrices, zero columns, unsupported dimensions) is a typed
/// fatal error.
///
/// # Quick start
///
/// ```rust
/// use std::collections::HashMap;
/// use ahp_core::{calculate, ComparisonMatrix, Decision};
///
/// let criteria_matrix = ComparisonMatrix::from_rows(vec![
///     vec![1.0, 3.0],
///     vec![1.0 / 3.0, 1.0],
/// ]).unwrap();
///
/// let mut alternative_matrices = HashMap::new();
/// alternative_matrices.insert("Price".to_string(), ComparisonMatrix::from_rows(vec![
///     vec![1.0, 2.0],
///     vec![0.5, 1.0],
/// ]).unwrap());
/// alternative_matrices.insert("Quality".to_string(), ComparisonMatrix::from_rows(vec![
///     vec![1.0, 0.25],
///     vec![4.0, 1.0],
/// ]).unwrap());
///
/// let decision = Decision {
///     criteria: vec!["Price".to_string(), "Quality".to_string()],
///     alternatives: vec!["Laptop A".to_string(), "Laptop B".to_string()],
///     criteria_matrix,
///     alternative_matrices,
/// };
///
/// let result = calculate(&decision).unwrap();
/// assert!(result.consistency.is_consistent);
///
/// for (rank, (name, score)) in result.ranking().iter().enumerate() {
///     println!("{}. {} ({:.4})", rank + 1, name, score);
/// }
/// ```

pub mod consistency;
pub mod constants;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod weights;

// Re-export primary public API at crate root.
pub use consistency::{consistency_check, ConsistencyVerdict};
pub use engine::{calculate, AhpResult, Decision};
pub use error::AhpError;
pub use matrix::ComparisonMatrix;
pub use weights::derive_weights;
