//! Coverage accumulator threaded through the directory walk.

use crate::error::ScoreError;
use std::path::Path;

/// Running totals of files found and files described by a README.
///
/// Both counters only ever grow. `described <= found` holds after every
/// update made through this type; [`Coverage::ensure_consistent`] re-checks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage {
    found: u64,
    described: u64,
}

impl Coverage {
    /// Fresh accumulator for a root call.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(&self) -> u64 {
        self.found
    }

    pub fn described(&self) -> u64 {
        self.described
    }

    /// Count one file, described or not.
    pub fn record_file(&mut self, described: bool) {
        self.found += 1;
        if described {
            self.described += 1;
        }
    }

    /// Count `count` files from a directory without a README.
    pub fn record_undescribed(&mut self, count: usize) {
        self.found += count as u64;
    }

    /// Fail with [`ScoreError::InvariantViolation`] if described exceeds found.
    pub fn ensure_consistent(&self, dir: &Path) -> Result<(), ScoreError> {
        if self.described > self.found {
            return Err(ScoreError::InvariantViolation {
                dir: dir.to_path_buf(),
                described: self.described,
                found: self.found,
            });
        }
        Ok(())
    }

    /// `100 * described / found`, or `None` when nothing was found.
    pub fn percentage(&self) -> Option<f64> {
        if self.found == 0 {
            return None;
        }
        Some(100.0 * self.described as f64 / self.found as f64)
    }

    #[cfg(test)]
    pub(crate) fn from_counts(found: u64, described: u64) -> Self {
        Self { found, described }
    }
}

/// Integer-truncated percentage used in report summaries.
pub fn truncated_percentage(described: u64, found: u64) -> Option<u64> {
    if found == 0 {
        None
    } else {
        Some(100 * described / found)
    }
}
