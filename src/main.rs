//! DECKPDF CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! batch conversion flow, and exit with appropriate status.
//! For programmatic use, prefer the library API (`deckpdf::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
