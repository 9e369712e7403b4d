mod render;

use clap::{Parser, Subcommand};
use pivotab_solver::{PivotRecord, Problem, SolveError, SolveObserver, Solver, TableauSnapshot};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pivotab")]
#[command(about = "Step-by-step tableau simplex for maximization problems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem file and print each tableau on the way
    Solve {
        /// JSON problem file
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
        /// Only print the final solution
        #[arg(short, long)]
        quiet: bool,
    },
    /// Validate a problem file and report its shape
    Check {
        /// JSON problem file
        file: PathBuf,
    },
}

/// Prints every tableau and pivot decision to stdout
struct ConsoleSink;

impl SolveObserver for ConsoleSink {
    fn tableau(&mut self, snapshot: &TableauSnapshot) {
        if snapshot.deltas.is_none() {
            println!("Initial tableau:");
        }
        println!("{}", render::render(snapshot));
    }

    fn pivot(&mut self, record: &PivotRecord) {
        println!("Iteration {}:", record.iteration);
        println!("Max delta: {:.2}", record.max_delta);
        println!("Min ratio: {:.2}", record.ratio);
        println!(
            "x{} enters the basis, x{} leaves (row {})",
            record.entering + 1,
            record.leaving + 1,
            record.leaving_row + 1
        );
        println!(
            "Divide row {} by {:.2}",
            record.leaving_row + 1,
            record.pivot_element
        );
        println!();
    }
}

fn read_problem(file: &PathBuf) -> Problem {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::from_str(&source) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error parsing problem: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            format,
            quiet,
        } => {
            let problem = read_problem(&file);

            let solver = Solver::new();
            let result = if quiet {
                solver.solve(&problem)
            } else {
                solver.solve_with(&problem, &mut ConsoleSink)
            };

            match result {
                Ok(solution) => {
                    if format == "json" {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&solution)
                                .unwrap_or_else(|e| format!("Error: {}", e))
                        );
                        return;
                    }
                    println!("Status: OPTIMAL");
                    println!("Objective value: {:.2}", solution.objective_value);
                    println!("Iterations: {}", solution.iterations);
                    println!();
                    println!("Variables:");
                    for (i, value) in solution.values.iter().enumerate() {
                        println!("  x{:<3} {:10.2}", i + 1, value);
                    }
                }
                Err(SolveError::Unbounded { entering }) => {
                    println!("Status: UNBOUNDED");
                    println!(
                        "No constraint limits x{}; the objective has no finite maximum.",
                        entering + 1
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Solve error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { file } => {
            let problem = read_problem(&file);

            match problem.validate() {
                Ok(()) => {
                    println!("✓ {} is valid", file.display());
                    println!("  {} variables", problem.num_variables());
                    println!("  {} constraints", problem.num_constraints());

                    for (i, constraint) in problem.constraints.iter().enumerate() {
                        if constraint.rhs < 0.0 {
                            println!(
                                "  warning: constraint {} has a negative right-hand side; \
                                 the all-slack starting basis will not be feasible",
                                i + 1
                            );
                        }
                    }
                }
                Err(e) => {
                    eprintln!("✗ {} has errors:", file.display());
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
