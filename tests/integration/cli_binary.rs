//! Integration tests for the `readme-scorer` binary.

use super::test_utils::GitRepo;
use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&OsStr]) -> Output {
    let bin = env!("CARGO_BIN_EXE_readme-scorer");
    Command::new(bin)
        .args(args)
        .env_remove("READMESCORE_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_prints_score_line() {
    let Some(repo) = GitRepo::init() else { return };
    repo.write("a.py", "");
    repo.write("b.py", "");
    repo.write("README", "`a.py` description\n");
    repo.track_all();

    let output = run(&[repo.root().as_os_str()]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "README score: 50.00% (1 / 2)\n"
    );
}

#[test]
fn test_zero_files_is_reported_not_crashed() {
    let Some(repo) = GitRepo::init() else { return };

    let output = run(&[repo.root().as_os_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no files to score"), "stderr={}", stderr);
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_invalid_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = run(&[missing.as_os_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a directory"));
}

#[test]
fn test_html_flag_writes_report() {
    let Some(repo) = GitRepo::init() else { return };
    repo.write("a.py", "");
    repo.write("README.md", "`a.py`\n");
    repo.track_all();
    let out_dir = TempDir::new().unwrap();
    let report_path = out_dir.path().join("report.html");

    let output = run(&[
        repo.root().as_os_str(),
        OsStr::new("--html"),
        report_path.as_os_str(),
    ]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "README score: 100.00% (1 / 1)\n"
    );
    let html = fs::read_to_string(&report_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("README Coverage: 100% "));
    assert!(html.contains("<h4 class='included_file'><pre>├──a.py</pre></h4>"));
}

#[test]
fn test_html_header_replaces_prologue() {
    let Some(repo) = GitRepo::init() else { return };
    repo.write("a.py", "");
    repo.track_all();
    let out_dir = TempDir::new().unwrap();
    let header = out_dir.path().join("header.html");
    fs::write(&header, "<html><body class='custom'>").unwrap();
    let report_path = out_dir.path().join("report.html");

    let output = run(&[
        repo.root().as_os_str(),
        OsStr::new("--html"),
        report_path.as_os_str(),
        OsStr::new("--html-header"),
        header.as_os_str(),
    ]);
    assert!(output.status.success());
    let html = fs::read_to_string(&report_path).unwrap();
    assert!(html.starts_with("<html><body class='custom'><h2>README Coverage: 0% </h2>"));
}

#[test]
fn test_tree_flag_prints_tree_then_score() {
    let Some(repo) = GitRepo::init() else { return };
    repo.write("a.py", "");
    repo.write("sub/b.py", "");
    repo.write("sub/README", "`b.py`\n");
    repo.track_all();

    let output = run(&[repo.root().as_os_str(), OsStr::new("--tree")]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "README coverage: 50% (1 / 2)\n\
├── [ ] a.py\n\
├── sub/\n    \
├── [x] b.py\n\
README score: 50.00% (1 / 2)\n"
    );
}

#[test]
fn test_tree_flag_prints_tree_when_no_files() {
    let Some(repo) = GitRepo::init() else { return };
    repo.write("logo.png", "");
    repo.track_all();

    let output = run(&[repo.root().as_os_str(), OsStr::new("--tree")]);
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "README coverage: undefined (0 / 0)\n"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no files to score"), "stderr={}", stderr);
}
