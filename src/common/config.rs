//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Program under test
    #[serde(default)]
    pub subject: SubjectConfig,

    /// Connection fixture
    #[serde(default)]
    pub fixture: FixtureConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Extra test case files
    #[serde(default)]
    pub cases: CasesConfig,
}

/// Configuration for the subject program
#[derive(Debug, Deserialize)]
pub struct SubjectConfig {
    /// Path or name of the executable to test
    #[serde(default = "default_program")]
    pub program: PathBuf,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> PathBuf {
    PathBuf::from("./conn")
}

/// Configuration for the connection fixture
#[derive(Debug, Deserialize)]
pub struct FixtureConfig {
    /// Path to the fixture text file
    #[serde(default = "default_fixture")]
    pub path: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            path: default_fixture(),
        }
    }
}

fn default_fixture() -> PathBuf {
    PathBuf::from("euro.txt")
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// How long a single subject invocation may run
    #[serde(default = "default_subject_timeout")]
    pub subject_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            subject_secs: default_subject_timeout(),
        }
    }
}

fn default_subject_timeout() -> u64 {
    5
}

/// Additional YAML case files, evaluated after the literal cases
#[derive(Debug, Deserialize, Default)]
pub struct CasesConfig {
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, or the default config file
    ///
    /// Returns default configuration if no explicit path is given and the
    /// default file doesn't exist. An explicit path that is missing is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
