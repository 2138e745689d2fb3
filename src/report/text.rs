//! Plain-text tree rendering of a walk, for terminal output.

use super::{EntryKind, EntryLog, ReportBuilder};
use crate::coverage::truncated_percentage;

const INDENT: &str = "    ";

#[derive(Debug, Clone, Default)]
pub struct TextReport {
    log: EntryLog,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for TextReport {
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
        let mut out = match truncated_percentage(described, found) {
            Some(pct) => format!("README coverage: {}% ({} / {})\n", pct, described, found),
            None => format!("README coverage: undefined ({} / {})\n", described, found),
        };
        for entry in self.log.entries() {
            let line = match entry.kind {
                EntryKind::Directory => format!("{}/", entry.name),
                EntryKind::IncludedFile => format!("[x] {}", entry.name),
                EntryKind::ExcludedFile => format!("[ ] {}", entry.name),
            };
            out.push_str(&INDENT.repeat(entry.layer));
            out.push_str("├── ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
