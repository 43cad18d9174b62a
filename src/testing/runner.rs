//! Test runner implementation
//!
//! Evaluates registry cases one at a time, in order, and stops at the first
//! failure. Nothing is aggregated: a run either passes every case or reports
//! exactly one failing case.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::common::Result;

use super::cases::{Registry, TestCase};
use super::compare::{compare, Comparison};
use super::oracle::{Oracle, Outcome};

/// Runner settings
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Print a line for every passing case instead of a progress bar
    pub verbose: bool,
}

/// Why a case failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Mismatch {
        case: TestCase,
        expected: String,
        actual: String,
    },
    Timeout {
        case: TestCase,
        after: Duration,
    },
}

impl Failure {
    pub fn case(&self) -> &TestCase {
        match self {
            Failure::Mismatch { case, .. } | Failure::Timeout { case, .. } => case,
        }
    }
}

/// Result of a run
#[derive(Debug)]
pub struct RunReport {
    pub passed: bool,
    pub cases_run: usize,
    pub cases_total: usize,
    pub failure: Option<Failure>,
}

/// Check one case against the oracle
pub async fn evaluate<O: Oracle + ?Sized>(oracle: &O, case: &TestCase) -> Result<Option<Failure>> {
    let outcome = oracle.query(&case.from, &case.to).await?;
    let failure = match outcome {
        Outcome::Completed { stdout, .. } => match compare(&case.expect, &stdout) {
            Comparison::Pass => None,
            Comparison::Mismatch { expected, actual } => Some(Failure::Mismatch {
                case: case.clone(),
                expected,
                actual,
            }),
        },
        Outcome::TimedOut { after } => Some(Failure::Timeout {
            case: case.clone(),
            after,
        }),
    };
    Ok(failure)
}

/// Run every case in registry order, halting at the first failure
///
/// Errors (a subject that can't be launched, a broken pipe) abort the run
/// immediately; a failing case is reported and returned in the report.
pub async fn run_cases<O: Oracle + ?Sized>(
    oracle: &O,
    registry: &Registry,
    options: &RunOptions,
) -> Result<RunReport> {
    let cases_total = registry.len();
    let progress = progress_bar(cases_total, options.verbose);

    for (i, case) in registry.cases().iter().enumerate() {
        tracing::trace!(from = %case.from, to = %case.to, "Evaluating case");

        let failure = match evaluate(oracle, case).await {
            Ok(failure) => failure,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        if let Some(failure) = failure {
            progress.finish_and_clear();
            report_failure(&failure);
            return Ok(RunReport {
                passed: false,
                cases_run: i + 1,
                cases_total,
                failure: Some(failure),
            });
        }

        if options.verbose {
            println!("  {} {} -> {}", "✓".green(), case.from, case.to);
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    println!("{}", "Passed".green().bold());
    tracing::info!(cases = cases_total, "All cases passed");

    Ok(RunReport {
        passed: true,
        cases_run: cases_total,
        cases_total,
        failure: None,
    })
}

fn progress_bar(total: usize, verbose: bool) -> ProgressBar {
    if verbose {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template("  [{bar:40.cyan/blue}] {pos}/{len} cases ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}

/// Print the failing case with both normalized sides
fn report_failure(failure: &Failure) {
    let case = failure.case();
    eprintln!(
        "{} {} -> {} failed:",
        "✗".red().bold(),
        case.from.to_string().white().bold(),
        case.to.to_string().white().bold()
    );
    match failure {
        Failure::Mismatch {
            expected, actual, ..
        } => {
            eprintln!("{}", "Expected:".cyan());
            eprintln!("{expected}");
            eprintln!("{}", "Got:".cyan());
            eprintln!("{actual}");
        }
        Failure::Timeout { after, .. } => {
            eprintln!(
                "{}",
                format!("Subject did not exit within {:.1}s", after.as_secs_f64()).yellow()
            );
        }
    }
}
