//! README Scorer
//!
//! Walks a version-controlled source tree and measures how many tracked files are
//! mentioned, backtick-quoted, in the README of their own directory.

pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod logging;
pub mod report;
pub mod tree;
