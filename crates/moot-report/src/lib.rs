mod document;
mod export;
mod normalize;
mod paginate;

pub use document::{Document, Page};
pub use export::{write_report, ReportSink, TextFileSink};
pub use normalize::{flatten_markdown, source_to_text};
pub use paginate::{compile, LINES_PER_PAGE, LINE_BUDGET, REPORT_TITLE};
