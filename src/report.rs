//! Report builders
//!
//! A report mirrors the walk: every directory visited and every counted file,
//! indented by recursion depth. The walker only talks to [`ReportBuilder`], so
//! any implementation can be threaded through it.

pub mod html;
pub mod text;

pub use html::HtmlReport;
pub use text::TextReport;

/// Category of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    IncludedFile,
    ExcludedFile,
}

impl EntryKind {
    /// Class attribute used by the HTML report.
    pub fn css_class(&self) -> &'static str {
        match self {
            EntryKind::Directory => "direct",
            EntryKind::IncludedFile => "included_file",
            EntryKind::ExcludedFile => "excluded_file",
        }
    }
}

/// One recorded line of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub kind: EntryKind,
    pub name: String,
    pub layer: usize,
}

/// Stateful sink the walker feeds while it recurses.
pub trait ReportBuilder {
    fn add_directory(&mut self, name: &str);
    fn add_included_file(&mut self, name: &str);
    fn add_excluded_file(&mut self, name: &str);
    fn increment_layer(&mut self);
    fn decrement_layer(&mut self);
    /// Current indentation depth.
    fn layer(&self) -> usize;
    /// Render the finished document with its coverage summary.
    fn finalize(&self, described: u64, found: u64) -> String;
}

/// Entry list plus current depth, shared by the concrete builders.
#[derive(Debug, Clone, Default)]
pub struct EntryLog {
    entries: Vec<ReportEntry>,
    layer: usize,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EntryKind, name: &str) {
        self.entries.push(ReportEntry {
            kind,
            name: name.to_string(),
            layer: self.layer,
        });
    }

    pub fn increment(&mut self) {
        self.layer += 1;
    }

    pub fn decrement(&mut self) {
        self.layer = self.layer.saturating_sub(1);
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }
}
