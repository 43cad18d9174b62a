//! Output comparison
//!
//! Both sides are reduced to their connection lines, sorted and joined with
//! `\n`, so the subject may print connections in any order. Anything else
//! (a missing header, stray whitespace, a misspelt label) is a mismatch.

use crate::graph::Mode;

/// What a subject prints when two locations are not connected
pub const NO_CONNECTION: &str = "No direct connection";

/// Result of comparing one case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Pass,
    Mismatch { expected: String, actual: String },
}

impl Comparison {
    pub fn is_pass(&self) -> bool {
        matches!(self, Comparison::Pass)
    }
}

/// Sort lines and join them with `\n`
pub fn normalize_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut lines: Vec<&str> = lines.into_iter().collect();
    lines.sort_unstable();
    lines.join("\n")
}

/// Normalized form of an expected mode multiset
pub fn normalize_expected(modes: &[Mode]) -> String {
    let normalized = normalize_lines(modes.iter().map(|mode| mode.label()));
    if normalized.is_empty() {
        NO_CONNECTION.to_string()
    } else {
        normalized
    }
}

/// Normalized form of a subject's stdout
///
/// The first line is a header and is always dropped, as are empty lines.
/// Lines are taken verbatim otherwise.
pub fn normalize_actual(stdout: &str) -> String {
    normalize_lines(stdout.split('\n').skip(1).filter(|line| !line.is_empty()))
}

pub fn compare(expected: &[Mode], stdout: &str) -> Comparison {
    let expected = normalize_expected(expected);
    let actual = normalize_actual(stdout);
    if expected == actual {
        Comparison::Pass
    } else {
        Comparison::Mismatch { expected, actual }
    }
}
