/// AHP calculation orchestrator.
///
/// A `Decision` is the complete, externally supplied configuration: ordered
/// criterion and alternative names plus every pairwise comparison matrix.
/// `calculate` is a pure function of it — callers speak names, internals
/// use `0..n` indices in name-list order.
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::consistency::{consistency_check, ConsistencyVerdict};
use crate::error::AhpError;
use crate::matrix::ComparisonMatrix;
use crate::weights::derive_weights;

/// Input for one AHP calculation. Never mutated by the engine.
#[derive(Debug, Clone)]
pub struct Decision {
    /// Criterion names, in criteria-matrix row/column order.
    pub criteria: Vec<String>,
    /// Alternative names, in alternative-matrix row/column order.
    pub alternatives: Vec<String>,
    /// Pairwise comparison of the criteria against each other.
    pub criteria_matrix: ComparisonMatrix,
    /// One alternatives-vs-alternatives matrix per criterion, keyed by
    /// criterion name.
    pub alternative_matrices: HashMap<String, ComparisonMatrix>,
}

/// Result of one AHP calculation: every weight keyed by name, plus the
/// consistency verdicts. Constructed once, immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpResult {
    /// Priority weight per criterion. Sums to 1.
    pub criteria_weights: BTreeMap<String, f64>,
    /// Per-criterion priority weight per alternative. Each inner map sums to 1.
    pub alternative_weights: BTreeMap<String, BTreeMap<String, f64>>,
    /// Aggregated score per alternative. Sums to 1.
    pub final_scores: BTreeMap<String, f64>,
    /// Verdict for the criteria matrix.
    pub consistency: ConsistencyVerdict,
    /// Advisory verdict for each per-criterion alternative matrix.
    pub alternative_consistency: BTreeMap<String, ConsistencyVerdict>,
}

impl AhpResult {
    /// Alternatives sorted by final score, highest first. Ties break by
    /// name so the order is deterministic.
    pub fn ranking(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .final_scores
            .iter()
            .map(|(name, &score)| (name.clone(), score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}

/// Run the full AHP pipeline on a decision.
///
/// Fatal conditions (shape mismatches, unsupported dimensions, degenerate
/// weights) abort with no partial result. Inconsistent judgments do not:
/// the ranking is still produced and the verdicts report the ratios.
pub fn calculate(decision: &Decision) -> Result<AhpResult, AhpError> {
    check_unique("criterion", &decision.criteria)?;
    check_unique("alternative", &decision.alternatives)?;

    let n_criteria = decision.criteria.len();
    if decision.criteria_matrix.dim() != n_criteria {
        return Err(AhpError::DimensionMismatch(format!(
            "criteria matrix is {d}x{d} but there are {n_criteria} criteria",
            d = decision.criteria_matrix.dim(),
        )));
    }
    if decision.alternative_matrices.len() != n_criteria {
        return Err(AhpError::DimensionMismatch(format!(
            "{} alternative matrices supplied for {n_criteria} criteria",
            decision.alternative_matrices.len(),
        )));
    }

    let criteria_weights = derive_weights(&decision.criteria_matrix)?;
    let consistency = consistency_check(&decision.criteria_matrix, &criteria_weights)?;

    let n_alternatives = decision.alternatives.len();
    let mut final_scores = vec![0.0; n_alternatives];
    let mut alternative_weights = BTreeMap::new();
    let mut alternative_consistency = BTreeMap::new();

    for (i, criterion) in decision.criteria.iter().enumerate() {
        let matrix = decision
            .alternative_matrices
            .get(criterion)
            .ok_or_else(|| {
                AhpError::DimensionMismatch(format!(
                    "no alternative matrix for criterion \"{criterion}\"",
                ))
            })?;
        if matrix.dim() != n_alternatives {
            return Err(AhpError::DimensionMismatch(format!(
                "alternative matrix for \"{criterion}\" is {d}x{d} but there are {n_alternatives} alternatives",
                d = matrix.dim(),
            )));
        }

        let weights = derive_weights(matrix)?;
        alternative_consistency.insert(criterion.clone(), consistency_check(matrix, &weights)?);

        // final_scores += criteria_weight[i] * alt_weights, element-wise.
        for (score, &w) in final_scores.iter_mut().zip(&weights) {
            *score += criteria_weights[i] * w;
        }
        alternative_weights.insert(criterion.clone(), named(&decision.alternatives, &weights));
    }

    Ok(AhpResult {
        criteria_weights: named(&decision.criteria, &criteria_weights),
        alternative_weights,
        final_scores: named(&decision.alternatives, &final_scores),
        consistency,
        alternative_consistency,
    })
}

fn check_unique(kind: &str, names: &[String]) -> Result<(), AhpError> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(AhpError::DimensionMismatch(format!(
                "duplicate {kind} name \"{name}\"",
            )));
        }
    }
    Ok(())
}

fn named(names: &[String], values: &[f64]) -> BTreeMap<String, f64> {
    names
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect()
}
