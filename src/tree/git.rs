//! Tracked-file enumeration backed by `git ls-files`.

use crate::error::ScoreError;
use std::path::Path;
use std::process::Command;
use tracing::trace;

/// Answers "which files are tracked under this directory".
///
/// Names are relative to `dir`. Implementations may return nested paths and
/// blank entries; the [`FilePolicy`](super::policy::FilePolicy) filters them.
pub trait TrackedFileSource {
    fn tracked_files(&self, dir: &Path) -> Result<Vec<String>, ScoreError>;
}

/// Runs `git ls-files -z` with `dir` as the working directory.
#[derive(Debug, Clone)]
pub struct GitLsFiles {
    program: String,
}

impl GitLsFiles {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitLsFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackedFileSource for GitLsFiles {
    fn tracked_files(&self, dir: &Path) -> Result<Vec<String>, ScoreError> {
        let output = Command::new(&self.program)
            .args(["ls-files", "-z"])
            .current_dir(dir)
            .output()
            .map_err(|source| ScoreError::GitSpawn {
                dir: dir.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScoreError::GitFailed {
                dir: dir.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let files = parse_ls_files(&output.stdout);
        trace!(dir = %dir.display(), count = files.len(), "Listed tracked files");
        Ok(files)
    }
}

/// Split NUL-separated `ls-files -z` output, keeping order.
pub fn parse_ls_files(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect()
}
