/// Scenario file loading and creation for the ahp CLI.
///
/// A scenario is a complete decision: criterion and alternative names plus
/// all pairwise comparison matrices. TOML is the default format; JSON is
/// accepted when the content starts with '{'.
use std::collections::HashMap;
use std::path::Path;

use ahp_core::{AhpError, ComparisonMatrix, Decision};
use serde::Deserialize;

use crate::bail;

#[derive(Deserialize)]
pub struct Scenario {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub criteria_matrix: Vec<Vec<f64>>,
    pub alternative_matrices: HashMap<String, Vec<Vec<f64>>>,
}

impl Scenario {
    /// Validate raw rows into an engine input. Shape errors surface here;
    /// name/matrix cross-checks happen inside `calculate`.
    pub fn into_decision(self) -> Result<Decision, AhpError> {
        let criteria_matrix = ComparisonMatrix::from_rows(self.criteria_matrix)?;
        let mut alternative_matrices = HashMap::with_capacity(self.alternative_matrices.len());
        for (name, rows) in self.alternative_matrices {
            alternative_matrices.insert(name, ComparisonMatrix::from_rows(rows)?);
        }
        Ok(Decision {
            criteria: self.criteria,
            alternatives: self.alternatives,
            criteria_matrix,
            alternative_matrices,
        })
    }
}

/// Parse scenario text: JSON if it starts with '{', TOML otherwise.
pub fn parse_scenario(content: &str) -> Result<Scenario, String> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') {
        serde_json::from_str(trimmed).map_err(|e| format!("invalid JSON scenario: {e}"))
    } else {
        toml::from_str(content).map_err(|e| format!("invalid TOML scenario: {e}"))
    }
}

pub fn load_scenario(path: &Path) -> Scenario {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read scenario {}: {e}", path.display())));
    parse_scenario(&content)
        .unwrap_or_else(|e| bail(format!("Failed to parse {}: {e}", path.display())))
}

/// The hospital-selection scenario: four criteria over three hospitals.
/// Ships as the `init` template so users start from a working example.
const SAMPLE_SCENARIO: &str = r#"# ahp scenario
# Entry (i, j) of a matrix answers: "how many times more important (or
# preferable) is item i than item j?" Diagonals are 1. Matrices must be
# square, entries strictly positive, and at most 7x7 (the Random Index
# table used by the consistency check stops there).

criteria = ["Fasilitas", "Tenaga Medis", "Aksesibilitas", "Biaya"]
alternatives = ["RSCM", "RS Premier Bintaro", "RS Pondok Indah"]

# Criteria compared against each other. Rows/columns follow the order of
# `criteria` above.
criteria_matrix = [
    [1.00, 2.00, 3.00, 4.00],
    [0.50, 1.00, 2.00, 3.00],
    [0.33, 0.50, 1.00, 2.00],
    [0.25, 0.33, 0.50, 1.00],
]

# One alternatives-vs-alternatives matrix per criterion. Rows/columns
# follow the order of `alternatives` above.
[alternative_matrices]
"Fasilitas" = [
    [1.00, 1.50, 2.00],
    [0.67, 1.00, 1.50],
    [0.50, 0.67, 1.00],
]
"Tenaga Medis" = [
    [1.00, 2.00, 2.50],
    [0.50, 1.00, 1.50],
    [0.40, 0.67, 1.00],
]
"Aksesibilitas" = [
    [1.00, 0.80, 1.50],
    [1.25, 1.00, 1.80],
    [0.67, 0.56, 1.00],
]
"Biaya" = [
    [1.00, 0.80, 0.80],
    [1.25, 1.00, 1.00],
    [1.25, 1.00, 1.00],
]
"#;

/// Write the sample scenario file. Errors if it already exists.
pub fn create_sample_scenario(path: &Path) {
    if path.exists() {
        bail(format!("Scenario file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                bail(format!("Failed to create directory {}: {e}", parent.display()))
            });
        }
    }

    std::fs::write(path, SAMPLE_SCENARIO)
        .unwrap_or_else(|e| bail(format!("Failed to write scenario to {}: {e}", path.display())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_scenario_parses_and_runs() {
        let scenario = parse_scenario(SAMPLE_SCENARIO).unwrap();
        assert_eq!(scenario.criteria.len(), 4);
        assert_eq!(scenario.alternatives.len(), 3);

        let decision = scenario.into_decision().unwrap();
        let result = ahp_core::calculate(&decision).unwrap();

        assert!(result.consistency.is_consistent);
        assert_eq!(result.ranking()[0].0, "RSCM");
    }

    #[test]
    fn test_json_scenario_parses() {
        let json = r#"{
            "criteria": ["Cost", "Speed"],
            "alternatives": ["A", "B"],
            "criteria_matrix": [[1.0, 2.0], [0.5, 1.0]],
            "alternative_matrices": {
                "Cost": [[1.0, 3.0], [0.3333, 1.0]],
                "Speed": [[1.0, 0.5], [2.0, 1.0]]
            }
        }"#;
        let scenario = parse_scenario(json).unwrap();
        let decision = scenario.into_decision().unwrap();
        let result = ahp_core::calculate(&decision).unwrap();
        let sum: f64 = result.final_scores.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_garbage_input_reports_parse_error() {
        assert!(parse_scenario("{ not json").is_err());
        assert!(parse_scenario("criteria = 12").is_err());
    }

    #[test]
    fn test_bad_matrix_shape_reports_engine_error() {
        let toml = r#"
criteria = ["A", "B"]
alternatives = ["X", "Y", "Z"]
criteria_matrix = [[1.0, 2.0, 3.0], [0.5, 1.0, 2.0]]

[alternative_matrices]
"A" = [[1.0]]
"B" = [[1.0]]
"#;
        let scenario = parse_scenario(toml).unwrap();
        let err = scenario.into_decision().unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(_)));
    }
}
