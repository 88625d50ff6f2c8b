mod config;
mod output;

use clap::Parser;
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "ahp",
    version,
    about = "Rank decision alternatives with the Analytic Hierarchy Process"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an AHP calculation on a scenario file
    Run(RunArgs),
    /// Create a sample scenario file to edit
    Init(InitArgs),
}

#[derive(Parser)]
struct RunArgs {
    /// Scenario file: TOML, or JSON when the content starts with '{'
    scenario: PathBuf,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Show scenario shape before computing
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser)]
struct InitArgs {
    /// Where to write the sample scenario
    #[arg(default_value = "ahp.toml")]
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Init(args) => {
            config::create_sample_scenario(&args.path);
            println!("Created sample scenario at {}", args.path.display());
            println!(
                "Edit the names and matrices, then run: ahp run {}",
                args.path.display(),
            );
        }
    }
}

fn run(args: RunArgs) {
    let scenario = config::load_scenario(&args.scenario);

    if args.verbose {
        eprintln!(
            "Scenario: {} criteria, {} alternatives, {} comparison matrices",
            scenario.criteria.len(),
            scenario.alternatives.len(),
            scenario.alternative_matrices.len() + 1,
        );
    }

    let decision = scenario.into_decision().unwrap_or_else(|e| bail(e));
    let result = ahp_core::calculate(&decision).unwrap_or_else(|e| bail(e));

    // Inconsistency is advisory: warn, but always print the ranking.
    if !result.consistency.is_consistent {
        eprintln!(
            "Warning: criteria judgments are inconsistent (CR = {:.4}, threshold 0.10). \
             The ranking below may not reflect coherent preferences.",
            result.consistency.ratio,
        );
    }
    for (criterion, verdict) in &result.alternative_consistency {
        if !verdict.is_consistent {
            eprintln!(
                "Warning: alternative judgments under \"{criterion}\" are inconsistent (CR = {:.4}).",
                verdict.ratio,
            );
        }
    }

    if args.json {
        output::print_json(&result);
    } else {
        output::print_table(&result);
    }
}
