//! Coverage walker: recursive README coverage over a source tree.

use super::git::TrackedFileSource;
use super::lister::FileLister;
use super::policy::FilePolicy;
use crate::config::ScoringConfig;
use crate::coverage::Coverage;
use crate::error::ScoreError;
use crate::report::ReportBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// True if `readme_text` mentions `name` wrapped in backticks on a single line.
///
/// The match is verbatim and case-sensitive; relative paths are not resolved.
pub fn is_described(readme_text: &str, name: &str) -> bool {
    let needle = format!("`{}`", name);
    readme_text.lines().any(|line| line.contains(&needle))
}

/// Depth-first walker that threads a [`Coverage`] and an optional report.
pub struct CoverageWalker<S> {
    lister: FileLister<S>,
    readme_names: Vec<String>,
    vcs_dir: String,
    sort_subdirectories: bool,
}

impl<S: TrackedFileSource> CoverageWalker<S> {
    /// Create a walker listing files through `source`, configured by `config`.
    pub fn new(source: S, config: &ScoringConfig) -> Self {
        Self {
            lister: FileLister::new(source, FilePolicy::from_config(config)),
            readme_names: config.readme_names.clone(),
            vcs_dir: config.vcs_dir.clone(),
            sort_subdirectories: config.sort_subdirectories,
        }
    }

    /// Walk `path` and all its descendants, adding to `coverage`.
    ///
    /// When `report` is present every directory and counted file is recorded in
    /// it; its layer is back at its starting value when this returns, error or not.
    pub fn walk(
        &self,
        path: &Path,
        coverage: &mut Coverage,
        report: Option<&mut dyn ReportBuilder>,
    ) -> Result<(), ScoreError> {
        let mut report = report;
        self.visit(path, coverage, &mut report)
    }

    fn visit(
        &self,
        path: &Path,
        coverage: &mut Coverage,
        report: &mut Option<&mut dyn ReportBuilder>,
    ) -> Result<(), ScoreError> {
        let files = self.lister.list(path)?;

        match self.find_readme(&files) {
            Some(readme) => self.count_described(path, readme, &files, coverage, report)?,
            None => {
                debug!(dir = %path.display(), files = ?files, "No README found");
                coverage.record_undescribed(files.len());
                if let Some(r) = report.as_mut() {
                    for file in &files {
                        r.add_excluded_file(file);
                    }
                }
            }
        }
        coverage.ensure_consistent(path)?;

        for subdir in self.subdirectories(path)? {
            let name = subdir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if let Some(r) = report.as_mut() {
                r.add_directory(&name);
                r.increment_layer();
            }
            let result = self.visit(&subdir, coverage, report);
            if let Some(r) = report.as_mut() {
                r.decrement_layer();
            }
            result?;
            coverage.ensure_consistent(&subdir)?;
        }

        Ok(())
    }

    /// First configured README name present in `files`.
    fn find_readme<'a>(&'a self, files: &[String]) -> Option<&'a str> {
        self.readme_names
            .iter()
            .find(|name| files.iter().any(|file| file == *name))
            .map(|name| name.as_str())
    }

    fn count_described(
        &self,
        dir: &Path,
        readme: &str,
        files: &[String],
        coverage: &mut Coverage,
        report: &mut Option<&mut dyn ReportBuilder>,
    ) -> Result<(), ScoreError> {
        let readme_path = dir.join(readme);
        let text = fs::read_to_string(&readme_path).map_err(|source| ScoreError::ReadmeRead {
            path: readme_path.clone(),
            source,
        })?;

        let mut described = 0usize;
        for file in files.iter().filter(|file| file.as_str() != readme) {
            let hit = is_described(&text, file);
            coverage.record_file(hit);
            if hit {
                described += 1;
            }
            if let Some(r) = report.as_mut() {
                if hit {
                    r.add_included_file(file);
                } else {
                    r.add_excluded_file(file);
                }
            }
        }

        debug!(
            dir = %dir.display(),
            readme = readme,
            described = described,
            found = files.len() - 1,
            "Scored directory"
        );
        Ok(())
    }

    /// Immediate subdirectories of `path`, minus the VCS metadata directory.
    /// Symlinks to directories are not followed, so link cycles cannot recurse.
    fn subdirectories(&self, path: &Path) -> Result<Vec<PathBuf>, ScoreError> {
        let mut walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);
        if self.sort_subdirectories {
            walker = walker.sort_by_file_name();
        }

        let mut dirs = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| ScoreError::DirectoryRead {
                path: path.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            if entry.file_name() == self.vcs_dir.as_str() {
                continue;
            }
            dirs.push(entry.into_path());
        }
        Ok(dirs)
    }
}
