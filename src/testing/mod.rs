//! Conformance testing against a subject program
//!
//! Builds the case registry, asks the subject about each case, and compares
//! what it prints with what the fixture says it should print.

mod cases;
pub mod compare;
pub mod oracle;
mod runner;

pub use cases::*;
pub use oracle::{Oracle, Outcome, SubjectProcess};
pub use runner::{evaluate, run_cases, Failure, RunOptions, RunReport};
