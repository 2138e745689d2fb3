//! Integration tests for the README scorer

mod cli_binary;
mod html_report;
mod test_utils;
