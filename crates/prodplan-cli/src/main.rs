use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prodplan_planner::{PlanError, PlanningParameters, ProductionPlan};

#[derive(Parser)]
#[command(name = "prodplan")]
#[command(about = "Multi-period production planning via linear programming", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a planning problem from a JSON parameters file
    Solve {
        /// File containing the planning parameters
        file: PathBuf,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Run the illustrative six-month example
    Demo,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { file, format } => {
            let source = match std::fs::read_to_string(&file) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading file: {}", e);
                    std::process::exit(1);
                }
            };

            let params: PlanningParameters = match serde_json::from_str(&source) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing parameters: {}", e);
                    std::process::exit(1);
                }
            };

            match prodplan_planner::solve(&params) {
                Ok(plan) => {
                    if format == "json" {
                        match serde_json::to_string_pretty(&plan) {
                            Ok(json) => println!("{}", json),
                            Err(e) => {
                                eprintln!("Error serializing plan: {}", e);
                                std::process::exit(1);
                            }
                        }
                    } else {
                        print_plan(&plan);
                    }
                }
                Err(e) => report_failure(e),
            }
        }
        Commands::Demo => {
            // The classic six-month computer production example: regular
            // pace at 50/unit capped at 150, overtime at 75/unit capped at
            // 60, storage at 5/unit/month.
            let params = PlanningParameters::new(
                vec![80, 180, 135, 240, 95, 139],
                50.0,
                5.0,
                75.0,
                150.0,
                60.0,
            );

            match prodplan_planner::solve(&params) {
                Ok(plan) => print_plan(&plan),
                Err(e) => report_failure(e),
            }
        }
    }
}

fn print_plan(plan: &ProductionPlan) {
    println!("Status: OPTIMAL");
    println!("Total production cost: {}", plan.total_cost);
    println!();
    println!(
        "{:>6} {:>9} {:>10} {:>7} {:>8}",
        "period", "regular", "overtime", "stock", "orders"
    );
    for (i, p) in plan.periods.iter().enumerate() {
        println!(
            "{:>6} {:>9} {:>10} {:>7} {:>8}",
            i + 1,
            p.regular_units,
            p.overtime_units,
            p.stock_carried,
            p.orders_fulfilled
        );
    }
}

fn report_failure(error: PlanError) {
    match error {
        PlanError::InvalidParameters(e) => {
            eprintln!("Invalid parameters: {}", e);
        }
        PlanError::Infeasible => {
            eprintln!("Status: INFEASIBLE");
            eprintln!("No production plan satisfies all demand within the capacity limits.");
        }
        PlanError::Unbounded => {
            eprintln!("Status: UNBOUNDED");
            eprintln!("The model is unbounded; this indicates a formulation defect.");
        }
        PlanError::Solver(msg) => {
            eprintln!("Solver error: {}", msg);
        }
    }
    std::process::exit(1);
}
