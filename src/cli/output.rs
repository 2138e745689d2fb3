//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ScoreError;

/// Map domain errors to a single line for stderr.
pub fn map_error(e: &ScoreError) -> String {
    match e {
        ScoreError::NoFiles(path) => format!(
            "README score undefined: no files to score under {}",
            path.display()
        ),
        ScoreError::InvariantViolation { .. } => format!("Internal error: {}", e),
        _ => format!("Error: {}", e),
    }
}
