//! File Lister: tracked names directly under a directory, filtered by policy.

use super::git::TrackedFileSource;
use super::policy::FilePolicy;
use crate::error::ScoreError;
use std::path::Path;

/// Composes a [`TrackedFileSource`] with a [`FilePolicy`].
#[derive(Debug, Clone)]
pub struct FileLister<S> {
    source: S,
    policy: FilePolicy,
}

impl<S: TrackedFileSource> FileLister<S> {
    pub fn new(source: S, policy: FilePolicy) -> Self {
        Self { source, policy }
    }

    /// Countable file names directly under `dir`, in the source's order.
    ///
    /// Source failures are returned as-is; an untracked directory is an error,
    /// never an empty listing.
    pub fn list(&self, dir: &Path) -> Result<Vec<String>, ScoreError> {
        let files = self.source.tracked_files(dir)?;
        Ok(files
            .into_iter()
            .filter(|name| self.policy.is_countable(name))
            .collect())
    }
}
