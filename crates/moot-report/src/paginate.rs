use serde_json::Value;

use crate::document::{Document, Page};
use crate::normalize::{flatten_markdown, source_to_text};

/// Fixed title on the first page of every compiled report.
pub const REPORT_TITLE: &str = "Consultation Report";

// Page geometry: character cells per physical line, minus a margin on each
// side, gives the wrap budget. Line count per page is fixed.
const PAGE_WIDTH: usize = 100;
const MARGIN: usize = 5;
pub const LINE_BUDGET: usize = PAGE_WIDTH - 2 * MARGIN;
pub const LINES_PER_PAGE: usize = 40;

/// Compile a report source into a paginated document.
///
/// Deterministic: identical `source` and `date` yield byte-identical pages.
/// The date is the only external input; the caller supplies it.
pub fn compile(source: &Value, date: time::Date) -> Document {
    let text = source_to_text(source);
    let flat = flatten_markdown(&text);

    // First page carries the generated header, counted against its budget.
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!("Generated: {}", format_date(date)),
        String::new(),
    ];
    for line in &flat {
        lines.extend(wrap_line(line, LINE_BUDGET));
    }

    let mut pages = Vec::new();
    for chunk in lines.chunks(LINES_PER_PAGE) {
        pages.push(Page {
            lines: chunk.to_vec(),
        });
    }

    tracing::debug!(pages = pages.len(), "report compiled");
    Document { pages }
}

fn format_date(date: time::Date) -> String {
    let fmt = time::format_description::parse("[year]-[month]-[day]")
        .expect("date format description should parse");
    date.format(&fmt).expect("date formatting should not fail")
}

/// Wrap one flattened line to the character budget at word boundaries,
/// carrying the leading indent onto continuation lines. Unbreakable runs
/// are hard-split.
fn wrap_line(line: &str, budget: usize) -> Vec<String> {
    if line.chars().count() <= budget {
        return vec![line.to_string()];
    }

    let indent_end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    let indent = &line[..indent_end];
    let avail = budget.saturating_sub(indent.chars().count()).max(1);

    let mut out = Vec::new();
    let mut current = String::new();
    for word in line[indent_end..].split_whitespace() {
        for piece in split_word(word, avail) {
            let sep = usize::from(!current.is_empty());
            if current.chars().count() + sep + piece.chars().count() > avail {
                out.push(format!("{indent}{current}"));
                current = piece;
            } else {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(&piece);
            }
        }
    }
    if !current.is_empty() {
        out.push(format!("{indent}{current}"));
    }
    out
}

/// Split a word into chunks of at most `avail` characters.
fn split_word(word: &str, avail: usize) -> Vec<String> {
    if word.chars().count() <= avail {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(avail)
        .map(|c| c.iter().collect::<String>())
        .collect()
}
