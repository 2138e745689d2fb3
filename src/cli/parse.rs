//! CLI parse: clap types for the scorer. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Calculate README score on a given directory
#[derive(Parser, Debug)]
#[command(name = "readme-scorer")]
#[command(about = "Calculate README score on a given directory")]
pub struct Cli {
    /// The file directory of interest
    pub path: PathBuf,

    /// Write a nested HTML coverage report to this file
    #[arg(long, value_name = "FILE", conflicts_with = "tree")]
    pub html: Option<PathBuf>,

    /// File whose contents replace the default HTML prologue
    #[arg(long, value_name = "FILE", requires = "html")]
    pub html_header: Option<PathBuf>,

    /// Print the coverage tree before the score line
    #[arg(long)]
    pub tree: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
