//! Presentation: the score summary printed by the CLI.

use crate::coverage::Coverage;
use crate::error::ScoreError;
use std::path::Path;

/// `README score: 50.00% (1 / 2)`, or [`ScoreError::NoFiles`] when nothing was found.
pub fn format_score_line(coverage: &Coverage, root: &Path) -> Result<String, ScoreError> {
    let score = coverage
        .percentage()
        .ok_or_else(|| ScoreError::NoFiles(root.to_path_buf()))?;
    Ok(format!(
        "README score: {:.2}% ({} / {})",
        score,
        coverage.described(),
        coverage.found()
    ))
}
