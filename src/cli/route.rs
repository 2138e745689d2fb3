//! CLI route: run context. Builds the walker from configuration and renders output.

use crate::cli::parse::Cli;
use crate::cli::presentation::format_score_line;
use crate::config::{ConfigLoader, ScorerConfig};
use crate::coverage::Coverage;
use crate::error::ScoreError;
use crate::report::{HtmlReport, ReportBuilder, TextReport};
use crate::tree::git::GitLsFiles;
use crate::tree::walker::CoverageWalker;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: resolved scan root and loaded configuration.
pub struct RunContext {
    root: PathBuf,
    config: ScorerConfig,
}

impl RunContext {
    /// Resolve `root` and load configuration (explicit file, or the layered defaults).
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ScoreError> {
        if !root.is_dir() {
            return Err(ScoreError::InvalidPath(root));
        }
        let root = dunce::canonicalize(&root).map_err(|_| ScoreError::InvalidPath(root))?;

        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load(&root)?,
        };

        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Walk the tree and write the stdout output to `out`.
    ///
    /// Reports are emitted before the score is computed: the HTML file is written
    /// and the `--tree` listing reaches `out` even when the tree holds no countable
    /// files and the run then fails with [`ScoreError::NoFiles`].
    pub fn execute<W: Write>(&self, cli: &Cli, out: &mut W) -> Result<(), ScoreError> {
        info!(root = %self.root.display(), "Scoring README coverage");
        let walker = CoverageWalker::new(GitLsFiles::new(), &self.config.scoring);
        let mut coverage = Coverage::new();

        if let Some(out_path) = &cli.html {
            let mut report = match &cli.html_header {
                Some(header) => HtmlReport::with_prologue(read_header(header)?),
                None => HtmlReport::new(),
            };
            walker.walk(&self.root, &mut coverage, Some(&mut report))?;
            let document = report.finalize(coverage.described(), coverage.found());
            std::fs::write(out_path, document).map_err(|source| ScoreError::ReportWrite {
                path: out_path.clone(),
                source,
            })?;
            info!(report = %out_path.display(), "HTML report written");
        } else if cli.tree {
            let mut report = TextReport::new();
            walker.walk(&self.root, &mut coverage, Some(&mut report))?;
            let tree = report.finalize(coverage.described(), coverage.found());
            out.write_all(tree.as_bytes()).map_err(ScoreError::Output)?;
        } else {
            walker.walk(&self.root, &mut coverage, None)?;
        }

        info!(
            described = coverage.described(),
            found = coverage.found(),
            "Walk complete"
        );

        let score = format_score_line(&coverage, &self.root)?;
        writeln!(out, "{}", score).map_err(ScoreError::Output)
    }
}

fn read_header(path: &Path) -> Result<String, ScoreError> {
    std::fs::read_to_string(path).map_err(|source| ScoreError::HeaderRead {
        path: path.to_path_buf(),
        source,
    })
}
