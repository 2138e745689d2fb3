//! Which tracked files need describing.

use crate::config::ScoringConfig;
use std::path::Path;

/// Exclusion policy applied to tracked file names.
///
/// A name is not countable when it lives below a subdirectory, is an
/// administrative file, is blank, or has a self-explanatory extension.
#[derive(Debug, Clone)]
pub struct FilePolicy {
    exclude_files: Vec<String>,
    exclude_extensions: Vec<String>,
}

impl FilePolicy {
    pub fn new(exclude_files: Vec<String>, exclude_extensions: Vec<String>) -> Self {
        let exclude_extensions = exclude_extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
        Self {
            exclude_files,
            exclude_extensions,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(
            config.exclude_files.clone(),
            config.exclude_extensions.clone(),
        )
    }

    /// True if `name` is a direct child that should be counted.
    pub fn is_countable(&self, name: &str) -> bool {
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            return false;
        }
        if self.exclude_files.iter().any(|excluded| excluded == name) {
            return false;
        }
        if name.trim().is_empty() {
            return false;
        }
        match Path::new(name).extension() {
            Some(ext) => !self
                .exclude_extensions
                .iter()
                .any(|excluded| ext == excluded.as_str()),
            None => true,
        }
    }
}

impl Default for FilePolicy {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}
