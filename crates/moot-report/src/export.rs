use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;

/// Export seam. The compiled document is handed over wholesale; a PDF
/// emitter would implement this same trait.
pub trait ReportSink {
    /// Write the document under the `<stem>_report.*` naming convention
    /// and return the path written.
    fn emit(&self, document: &Document, stem: &str) -> anyhow::Result<PathBuf>;
}

/// Plain-text sink: one file, pages separated by form feeds.
pub struct TextFileSink {
    dir: PathBuf,
}

impl TextFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportSink for TextFileSink {
    fn emit(&self, document: &Document, stem: &str) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{stem}_report.txt"));

        let body = document
            .pages
            .iter()
            .map(|p| p.lines.join("\n"))
            .collect::<Vec<String>>()
            .join("\n\u{0c}\n");
        fs::write(&path, body)?;

        tracing::info!(path = %path.display(), pages = document.page_count(), "report written");
        Ok(path)
    }
}

/// Convenience for callers that only have a directory path.
pub fn write_report(document: &Document, dir: &Path, stem: &str) -> anyhow::Result<PathBuf> {
    TextFileSink::new(dir).emit(document, stem)
}
