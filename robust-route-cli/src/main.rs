//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use robust_route_cli::CliError;

fn main() {
    match robust_route_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("robust-route: {err}");
            std::process::exit(1);
        }
    }
}
