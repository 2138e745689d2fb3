//! Configuration System
//!
//! Layered configuration for the scorer: built-in defaults, a global user file,
//! a per-tree `.readme-scorer.toml`, then `READMESCORE_*` environment variables.
//! The scoring section carries the README names and exclusion lists that drive
//! the walk; the logging section feeds [`crate::logging::init_logging`].

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// File classification and README lookup
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inputs to the walker and the file lister.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// README file names in priority order; the first one tracked in a directory wins
    #[serde(default = "default_readme_names")]
    pub readme_names: Vec<String>,

    /// Administrative file names that never need describing
    #[serde(default = "default_exclude_files")]
    pub exclude_files: Vec<String>,

    /// Extensions considered self-explanatory (leading dot optional)
    #[serde(default = "default_exclude_extensions")]
    pub exclude_extensions: Vec<String>,

    /// Version-control metadata directory skipped during traversal
    #[serde(default = "default_vcs_dir")]
    pub vcs_dir: String,

    /// Visit subdirectories in name order instead of filesystem order
    #[serde(default = "default_true")]
    pub sort_subdirectories: bool,
}

fn default_readme_names() -> Vec<String> {
    ["README", "readme", "README.md", "readme.md"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_files() -> Vec<String> {
    // README names must not appear here
    [".gitignore", ".gitattributes", "__init__.py"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_extensions() -> Vec<String> {
    [".png", ".pyc"].iter().map(|s| s.to_string()).collect()
}

fn default_vcs_dir() -> String {
    ".git".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            readme_names: default_readme_names(),
            exclude_files: default_exclude_files(),
            exclude_extensions: default_exclude_extensions(),
            vcs_dir: default_vcs_dir(),
            sort_subdirectories: default_true(),
        }
    }
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.readme_names.is_empty() {
            return Err("At least one README name is required".to_string());
        }
        if let Some(name) = self
            .readme_names
            .iter()
            .find(|name| self.exclude_files.contains(name))
        {
            return Err(format!(
                "README name '{}' is also listed in exclude_files",
                name
            ));
        }
        if self.vcs_dir.trim().is_empty() {
            return Err("vcs_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Serializes tests that read or write process environment variables.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
