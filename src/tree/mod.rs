//! Source tree traversal
//!
//! Lists tracked files per directory, classifies which of them need describing,
//! and walks the tree accumulating README coverage.

pub mod git;
pub mod lister;
pub mod policy;
pub mod walker;
