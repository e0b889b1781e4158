mod cli;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wireplan", about = "Parallel wire-group planner for a 10-channel load bank")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an allocation plan from a YAML scenario file.
    Plan {
        /// Path to the scenario file.
        scenario: String,
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Plan { scenario, json } => cli::plan::run(&scenario, json),
    }
}
