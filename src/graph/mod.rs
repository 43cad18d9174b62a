//! Connection graph
//!
//! Locations, transport modes, and the directed adjacency structure parsed
//! from a connection fixture. The graph is built once and never mutated;
//! everything downstream borrows it.

mod adjacency;
pub mod sea;

pub use adjacency::Adjacency;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A named node in the connection graph (a city or a body of water)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// How two locations are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Road,
    Rail,
    Boat,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Road, Mode::Rail, Mode::Boat];

    /// Parse the token used in fixtures (`road`, `rail`, `boat`)
    ///
    /// Matching is exact: `Road` or ` road` are rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "road" => Some(Mode::Road),
            "rail" => Some(Mode::Rail),
            "boat" => Some(Mode::Boat),
            _ => None,
        }
    }

    /// Fixture token for this mode
    pub fn token(self) -> &'static str {
        match self {
            Mode::Road => "road",
            Mode::Rail => "rail",
            Mode::Boat => "boat",
        }
    }

    /// Line a subject program prints for this mode
    pub fn label(self) -> &'static str {
        match self {
            Mode::Road => "Road connection",
            Mode::Rail => "Rail connection",
            Mode::Boat => "Boat connection",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
