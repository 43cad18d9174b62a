//! Test cases and the registry they are evaluated from
//!
//! The registry is the literal cases first, then cases from YAML case files,
//! then the cases derived from the fixture by the sea transit expander.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::common::{Error, Result};
use crate::graph::{sea, Adjacency, Location, Mode};

/// Where a test case came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSource {
    /// Built into the harness
    Literal,
    /// Loaded from a YAML case file
    Scenario,
    /// Generated from the fixture
    Derived,
}

/// One (origin, destination) query and the modes the subject should report
///
/// `expect` is a multiset: order is irrelevant to the comparison but
/// duplicates are significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub from: Location,
    pub to: Location,
    pub expect: Vec<Mode>,
    pub source: CaseSource,
}

impl TestCase {
    pub fn new(from: &str, to: &str, expect: &[Mode], source: CaseSource) -> Self {
        Self {
            from: Location::from(from),
            to: Location::from(to),
            expect: expect.to_vec(),
            source,
        }
    }
}

use Mode::{Boat, Rail, Road};

const LITERAL_CASES: &[(&str, &str, &[Mode])] = &[
    ("London", "Manchester", &[Rail, Road]),
    ("London", "English Channel", &[Boat]),
    ("Le Havre", "English Channel", &[Boat]),
    ("Leipzig", "Hamburg", &[Road]),
    ("Paris", "Marseilles", &[Rail]),
    ("Santander", "Nantes", &[Boat]),
    ("Rome", "Naples", &[Rail, Road, Boat]),
    ("Black Sea", "Ionian Sea", &[Boat]),
    ("Munich", "Berlin", &[]),
    ("London", "Castle Dracula", &[]),
    // Edge cases
    ("Mediterranean Sea", "Ionian Sea", &[Boat]),
    ("English Channel", "Nantes", &[]),
    ("London", "London", &[Boat]),
    ("Paris", "Paris", &[]),
];

/// The built-in cases, in their fixed order
pub fn literal_cases() -> Vec<TestCase> {
    LITERAL_CASES
        .iter()
        .map(|(from, to, expect)| TestCase::new(from, to, expect, CaseSource::Literal))
        .collect()
}

/// A YAML file of extra cases
///
/// ```yaml
/// name: Iberia
/// description: Ports on the Bay of Biscay
/// cases:
///   - from: Santander
///     to: Bordeaux
///     expect: [boat]
///   - from: Madrid
///     to: Bordeaux
/// ```
#[derive(Deserialize, Debug)]
pub struct CaseFile {
    /// Name shown when the file is loaded
    pub name: String,
    /// Optional description of what the cases cover
    pub description: Option<String>,
    pub cases: Vec<CaseSpec>,
}

/// A single case in a YAML case file
#[derive(Deserialize, Debug)]
pub struct CaseSpec {
    pub from: Location,
    pub to: Location,
    /// Omitted means "no connection"
    #[serde(default)]
    pub expect: Vec<Mode>,
}

impl CaseFile {
    /// Load a case file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        let file = Self::parse(&content).map_err(|e| Error::ScenarioParse {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            name = %file.name,
            cases = file.cases.len(),
            "Loaded case file"
        );
        Ok(file)
    }

    /// Parse a case file from YAML text
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    fn to_cases(&self) -> impl Iterator<Item = TestCase> + '_ {
        self.cases.iter().map(|spec| TestCase {
            from: spec.from.clone(),
            to: spec.to.clone(),
            expect: spec.expect.clone(),
            source: CaseSource::Scenario,
        })
    }
}

/// Which registry entries to keep
#[derive(Debug, Default, Clone)]
pub struct Selection {
    /// Skip the derived cases
    pub only_literal: bool,
    /// Keep only cases starting here
    pub from: Option<Location>,
}

impl Selection {
    fn keeps(&self, case: &TestCase) -> bool {
        self.from.as_ref().map_or(true, |from| &case.from == from)
    }
}

/// Ordered list of cases for one run
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    /// Assemble the registry: literal cases, then case files in order, then
    /// derived cases. No deduplication happens between the groups.
    pub fn build(adjacency: &Adjacency, case_files: &[CaseFile], selection: &Selection) -> Self {
        let mut cases = literal_cases();
        for file in case_files {
            cases.extend(file.to_cases());
        }
        if !selection.only_literal {
            cases.extend(sea::expand(adjacency));
        }
        cases.retain(|case| selection.keeps(case));

        tracing::info!(count = cases.len(), "Registered test cases");
        Self { cases }
    }

    /// Registry of exactly these cases
    pub fn from_cases(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
