/// Output formatting: terminal table and JSON.
use std::collections::BTreeMap;

use ahp_core::AhpResult;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRankedAlternative {
    rank: usize,
    name: String,
    score: f64,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    criteria_weights: &'a BTreeMap<String, f64>,
    alternative_weights: &'a BTreeMap<String, BTreeMap<String, f64>>,
    final_scores: &'a BTreeMap<String, f64>,
    #[serde(rename = "CR")]
    cr: f64,
    is_consistent: bool,
    ranking: Vec<JsonRankedAlternative>,
}

/// Print the ranking and criteria weights as a formatted terminal table.
pub fn print_table(result: &AhpResult) {
    let ranking = result.ranking();

    // Find the widest alternative name for padding
    let name_width = ranking
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(11)
        .max(11); // at least "Alternative"

    println!(" # | {:<name_width$} |  Score", "Alternative");
    println!("---|-{}-|--------", "-".repeat(name_width));

    for (i, (name, score)) in ranking.iter().enumerate() {
        println!("{:>2} | {:<name_width$} | {:>6.4}", i + 1, name, score);
    }

    println!("\nCriteria weights:");
    for (name, weight) in &result.criteria_weights {
        println!("  {weight:.4}  {name}");
    }

    println!(
        "\nConsistency ratio: {:.4} ({})",
        result.consistency.ratio,
        if result.consistency.is_consistent {
            "acceptable, below 0.10"
        } else {
            "inconsistent, at or above 0.10"
        },
    );
}

/// Print the full result as JSON, in the engine's keyed shape.
pub fn print_json(result: &AhpResult) {
    let ranking = result
        .ranking()
        .into_iter()
        .enumerate()
        .map(|(i, (name, score))| JsonRankedAlternative {
            rank: i + 1,
            name,
            score,
        })
        .collect();

    let output = JsonOutput {
        criteria_weights: &result.criteria_weights,
        alternative_weights: &result.alternative_weights,
        final_scores: &result.final_scores,
        cr: result.consistency.ratio,
        is_consistent: result.consistency.is_consistent,
        ranking,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
