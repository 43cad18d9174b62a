//! Connection tester - conformance harness for connection finder programs
//!
//! Derives expected answers from a connection fixture, runs the program
//! under test once per (origin, destination) pair, and stops at the first
//! answer that doesn't match.

use clap::Parser;
use conn_tester::{cli, commands::Commands, common::logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conn-tester", about = "Conformance harness for connection finders")]
#[command(version, long_about = None)]
struct Cli {
    /// Configuration file (default: the platform config dir's conn-tester/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.command, cli.config.as_deref()).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
