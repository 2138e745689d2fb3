//! HTML report generation
//!
//! Produces a single self-contained page: caller-supplied (or default) prologue,
//! a coverage summary, then one `<h4>` per directory or file, indented with tabs.

use super::{EntryKind, EntryLog, ReportBuilder};
use crate::coverage::truncated_percentage;

/// Prologue used when the caller does not supply one.
pub const DEFAULT_PROLOGUE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>README Coverage</title>
<style>
h4 { margin: 0; font-weight: normal; }
pre { margin: 0; }
.direct { color: #37474f; font-weight: bold; }
.included_file { color: #2e7d32; }
.excluded_file { color: #c62828; }
</style>
</head>
<body>
"#;

/// Nested HTML listing of a walk.
#[derive(Debug, Clone)]
pub struct HtmlReport {
    prologue: String,
    log: EntryLog,
}

impl HtmlReport {
    pub fn new() -> Self {
        Self::with_prologue(DEFAULT_PROLOGUE)
    }

    /// Use `prologue` verbatim as everything before the summary.
    pub fn with_prologue(prologue: impl Into<String>) -> Self {
        Self {
            prologue: prologue.into(),
            log: EntryLog::new(),
        }
    }

    fn render_summary(described: u64, found: u64) -> String {
        let headline = match truncated_percentage(described, found) {
            Some(pct) => format!("<h2>README Coverage: {}% </h2>", pct),
            None => "<h2>README Coverage: undefined</h2>".to_string(),
        };
        format!(
            "{}<h3>Total Found={}, Total Described={}</h3>\n",
            headline, found, described
        )
    }

    fn render_entries(&self) -> String {
        let mut body = String::new();
        for entry in self.log.entries() {
            body.push_str(&format!(
                "<h4 class='{}'><pre>{}├──{}</pre></h4>\n",
                entry.kind.css_class(),
                "\t".repeat(entry.layer),
                html_escape(&entry.name)
            ));
        }
        body
    }
}

impl Default for HtmlReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder for HtmlReport {
    fn add_directory(&mut self, name: &str) {
        self.log.push(EntryKind::Directory, name);
    }

    fn add_included_file(&mut self, name: &str) {
        self.log.push(EntryKind::IncludedFile, name);
    }

    fn add_excluded_file(&mut self, name: &str) {
        self.log.push(EntryKind::ExcludedFile, name);
    }

    fn increment_layer(&mut self) {
        self.log.increment();
    }

    fn decrement_layer(&mut self) {
        self.log.decrement();
    }

    fn layer(&self) -> usize {
        self.log.layer()
    }

    fn finalize(&self, described: u64, found: u64) -> String {
        format!(
            "{}{}{}</body></html>",
            self.prologue,
            Self::render_summary(described, found),
            self.render_entries()
        )
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
