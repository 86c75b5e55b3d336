//! Command-line interface for robust route selection.
//!
//! The `select` subcommand reads a scenario file and a path catalogue, runs
//! the exhaustive selector and prints the winning route as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod select;

pub use error::CliError;

use select::{SelectArgs, run_select};

const ARG_SCENARIO: &str = "scenario";
const ARG_CATALOGUE: &str = "catalogue";
const ARG_CATALOGUE_FORMAT: &str = "catalogue-format";
const ARG_CAPACITY: &str = "capacity";
const ARG_MODE: &str = "mode";
const ARG_MATERIALISE_LIMIT: &str = "materialise-limit";
const ARG_MAX_CUSTOMERS: &str = "max-customers";
const ARG_SEED: &str = "seed";
const ENV_SCENARIO: &str = "ROBUST_ROUTE_CMDS_SELECT_SCENARIO";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, inputs cannot be read
/// or the selector rejects the scenario.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Select(args) => run_select(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "robust-route",
    about = "Pick the delivery route least exposed to disruption",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Select the minimum-cost feasible route for a scenario.
    Select(SelectArgs),
}

#[cfg(test)]
mod tests;
