//! CLI command handling
//!
//! Loads configuration, builds the case registry, and dispatches to the
//! runner or one of the listing commands.

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::commands::{CaseArgs, Commands};
use crate::common::config::Config;
use crate::common::Result;
use crate::graph::{sea, Adjacency, Location, Mode};
use crate::testing::{run_cases, CaseFile, Registry, RunOptions, Selection, SubjectProcess, TestCase};

/// Dispatch a CLI command
///
/// Returns whether the command succeeded; only `run` can report a failure
/// without an error.
pub async fn dispatch(command: Commands, config_path: Option<&Path>) -> Result<bool> {
    let config = Config::load(config_path)?;

    match command {
        Commands::Run {
            selection,
            program,
            timeout,
            verbose,
        } => {
            let registry = build_registry(&config, &selection)?;

            let program = program.unwrap_or_else(|| config.subject.program.clone());
            let timeout = Duration::from_secs(timeout.unwrap_or(config.timeouts.subject_secs));
            let subject = SubjectProcess::resolve(&program, timeout)?;

            println!(
                "{} {} ({} cases)",
                "Testing".blue().bold(),
                subject.program().display().to_string().white().bold(),
                registry.len()
            );

            let report = run_cases(&subject, &registry, &RunOptions { verbose }).await?;
            if !report.passed {
                tracing::info!(
                    run = report.cases_run,
                    total = report.cases_total,
                    "Run halted at first failure"
                );
            }
            Ok(report.passed)
        }

        Commands::Cases { selection, json } => {
            let registry = build_registry(&config, &selection)?;
            if json {
                println!("{}", serde_json::to_string_pretty(registry.cases())?);
            } else {
                for case in registry.cases() {
                    print_case(case);
                }
                println!("{} cases", registry.len());
            }
            Ok(true)
        }

        Commands::Graph { fixture, json } => {
            let fixture = fixture.unwrap_or_else(|| config.fixture.path.clone());
            let adjacency = Adjacency::load(&fixture)?;
            let summary = GraphSummary {
                fixture: &fixture,
                origins: adjacency.origin_count(),
                edges: adjacency.edge_count(),
                seas: sea::seas_present(&adjacency),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
            Ok(true)
        }
    }
}

/// Parse the fixture and assemble the registry the command line asks for
///
/// Case files from the config come first, then those given with `--cases`.
fn build_registry(config: &Config, args: &CaseArgs) -> Result<Registry> {
    let fixture = args
        .fixture
        .clone()
        .unwrap_or_else(|| config.fixture.path.clone());
    let adjacency = Adjacency::load(&fixture)?;

    let paths: Vec<&PathBuf> = config.cases.files.iter().chain(&args.case_files).collect();
    let case_files = paths
        .into_iter()
        .map(|path| CaseFile::load(path))
        .collect::<Result<Vec<_>>>()?;

    let selection = Selection {
        only_literal: args.only_literal,
        from: args.from.as_deref().map(Location::from),
    };
    Ok(Registry::build(&adjacency, &case_files, &selection))
}

#[derive(Serialize)]
struct GraphSummary<'a> {
    fixture: &'a Path,
    origins: usize,
    edges: usize,
    seas: Vec<&'a Location>,
}

fn print_summary(summary: &GraphSummary<'_>) {
    println!("Fixture: {}", summary.fixture.display());
    println!("  Origins: {}", summary.origins);
    println!("  Edges:   {}", summary.edges);
    if summary.seas.is_empty() {
        println!("  Seas:    none");
    } else {
        let seas: Vec<&str> = summary.seas.iter().map(|s| s.as_str()).collect();
        println!("  Seas:    {}", seas.join(", "));
    }
}

fn print_case(case: &TestCase) {
    let modes = if case.expect.is_empty() {
        "none".dimmed().to_string()
    } else {
        case.expect
            .iter()
            .map(|m| Mode::token(*m))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let source = format!("{:?}", case.source).to_lowercase();
    println!("{} -> {}: {} {}", case.from, case.to, modes, source.dimmed());
}
