//! minires CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the resize, and exit
//! with a failure status on any error. For programmatic use, prefer the
//! library API (`minires::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
