//! CLI command definitions
//!
//! Defines the clap commands for the connection tester CLI.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run every test case against the subject program
    Run {
        #[command(flatten)]
        selection: CaseArgs,

        /// Program under test (default: ./conn, or [subject] program from config)
        #[arg(long, short)]
        program: Option<PathBuf>,

        /// Seconds a single invocation may run before it counts as a failure
        #[arg(long)]
        timeout: Option<u64>,

        /// Print every passing case
        #[arg(long, short)]
        verbose: bool,
    },

    /// List the test cases a run would evaluate, without running anything
    Cases {
        #[command(flatten)]
        selection: CaseArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the parsed fixture
    Graph {
        /// Connection fixture (default: euro.txt, or [fixture] path from config)
        #[arg(long, short)]
        fixture: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options that decide which cases end up in the registry
#[derive(Args, Debug, Default)]
pub struct CaseArgs {
    /// Connection fixture (default: euro.txt, or [fixture] path from config)
    #[arg(long, short)]
    pub fixture: Option<PathBuf>,

    /// Extra YAML case file, evaluated after the built-in cases.
    /// Can be specified multiple times
    #[arg(long = "cases", short = 'c')]
    pub case_files: Vec<PathBuf>,

    /// Skip the cases derived from the fixture
    #[arg(long)]
    pub only_literal: bool,

    /// Keep only cases starting at this location
    #[arg(long)]
    pub from: Option<String>,
}
