//! Error types for the connection tester
//!
//! Every variant here is fatal for a run. Content mismatches and subject
//! timeouts are not errors: they are failing outcomes reported by the
//! runner (see `testing::runner`).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the connection tester
#[derive(Error, Debug)]
pub enum Error {
    // === Fixture Errors ===
    #[error("Failed to read fixture '{}': {source}", path.display())]
    FixtureUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Subject Errors ===
    #[error("Subject program '{0}' not found. Pass --program or set [subject] program in the config file")]
    SubjectNotFound(String),

    #[error("Failed to launch subject program '{}': {source}", program.display())]
    SubjectLaunch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Invalid test case file '{path}': {error}")]
    ScenarioParse { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a fixture read error
    pub fn fixture_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FixtureUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a subject launch error
    pub fn subject_launch(program: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SubjectLaunch {
            program: program.into(),
            source,
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
