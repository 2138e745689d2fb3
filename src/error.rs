//! Error types for the README scorer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while listing, walking, scoring or reporting.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Not a directory: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to run git in {}: {source}", .dir.display())]
    GitSpawn {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git ls-files failed in {}: {stderr}", .dir.display())]
    GitFailed { dir: PathBuf, stderr: String },

    #[error("Failed to read README {}: {source}", .path.display())]
    ReadmeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list subdirectories of {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(
        "Coverage counters inconsistent after {}: described {described} > found {found}",
        .dir.display()
    )]
    InvariantViolation {
        dir: PathBuf,
        described: u64,
        found: u64,
    },

    #[error("No files to score under {}", .0.display())]
    NoFiles(PathBuf),

    #[error("Failed to read HTML header {}: {source}", .path.display())]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ScoreError {
    fn from(err: config::ConfigError) -> Self {
        ScoreError::ConfigError(err.to_string())
    }
}
