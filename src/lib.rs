//! Connection tester - conformance harness for connection finder programs
//!
//! This library parses connection fixtures, derives the cases a correct
//! connection finder must answer, and checks a subject program against them.

pub mod cli;
pub mod commands;
pub mod common;
pub mod graph;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use graph::{Adjacency, Location, Mode};
