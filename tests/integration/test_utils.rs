//! Shared test utilities for integration tests
//!
//! Builds throwaway git repositories so the real `git ls-files` source is exercised.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// True when a `git` executable can be run.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// True when `dir` already sits inside some git work tree.
pub fn inside_work_tree(dir: &Path) -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(dir)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary git repository; files are tracked by staging them.
pub struct GitRepo {
    dir: TempDir,
}

impl GitRepo {
    /// Initialize a repository, or `None` when git is not installed.
    pub fn init() -> Option<Self> {
        if !git_available() {
            eprintln!("git not available; skipping");
            return None;
        }
        let dir = TempDir::new().unwrap();
        let output = Command::new("git")
            .args(["init", "--quiet"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        Some(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    /// Stage everything currently in the work tree.
    pub fn track_all(&self) {
        let output = Command::new("git")
            .args(["add", "-A"])
            .current_dir(self.dir.path())
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git add failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
