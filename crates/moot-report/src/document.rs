/// One page of a compiled report: ordered lines, bounded by the pagination
/// geometry. Never mutated after compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<String>,
}

/// The paginated, backend-independent representation of a compiled report,
/// ready for export. Produced fresh on each compilation; ownership moves
/// wholesale to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}
