//! Normalization: any report source down to plain text lines.
//!
//! The backend's report is lightweight markdown (emphasis, tables, lists,
//! headings, strikethrough) or arbitrary structured JSON. Both reduce to a
//! flat line sequence the paginator can wrap — reading order and line
//! breaks preserved, markup gone.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use moot_core::canon::canonical_json_string;

/// Inline markup, replaced in order: images/links reduce to their text,
/// then emphasis, strikethrough, and code markers drop.
static INLINE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap(), "${1}"),
        (Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap(), "${1}"),
        (Regex::new(r"\*\*([^*]+)\*\*").unwrap(), "${1}"),
        (Regex::new(r"__([^_]+)__").unwrap(), "${1}"),
        (Regex::new(r"~~([^~]+)~~").unwrap(), "${1}"),
        (Regex::new(r"\*([^*]+)\*").unwrap(), "${1}"),
        (Regex::new(r"\b_([^_]+)_\b").unwrap(), "${1}"),
        (Regex::new(r"`([^`]+)`").unwrap(), "${1}"),
    ]
});

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").unwrap());
static TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?\s*$").unwrap());

/// Normalize a report source to a single string. Textual sources pass
/// through; anything structured serializes canonically (stable key order)
/// so compilation never fails on non-text input.
pub fn source_to_text(source: &Value) -> String {
    match source {
        Value::String(s) => s.clone(),
        other => canonical_json_string(other),
    }
}

/// Flatten lightweight markdown to plain hierarchical text lines.
pub fn flatten_markdown(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut in_fence = false;

    for raw_line in text.lines() {
        let trimmed = raw_line.trim_start();

        // Fence markers drop; fenced content passes through verbatim.
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            out.push(raw_line.to_string());
            continue;
        }

        if let Some(caps) = HEADING.captures(trimmed) {
            let level = caps[1].len();
            let text = strip_inline(&caps[2]);
            out.push(format!("{}{}", "  ".repeat(level - 1), text.trim_end()));
            continue;
        }

        if TABLE_SEPARATOR.is_match(raw_line) && raw_line.contains('-') && raw_line.contains('|') {
            continue;
        }

        if trimmed.starts_with('|') {
            out.push(flatten_table_row(raw_line));
            continue;
        }

        if let Some(caps) = BULLET.captures(raw_line) {
            out.push(format!("{}- {}", &caps[1], strip_inline(&caps[2])));
            continue;
        }

        // Blockquote markers reduce to their text.
        let unquoted = trimmed
            .strip_prefix('>')
            .map(|rest| rest.trim_start_matches('>').trim_start());
        if let Some(rest) = unquoted {
            out.push(strip_inline(rest));
            continue;
        }

        out.push(strip_inline(raw_line));
    }

    out
}

fn strip_inline(line: &str) -> String {
    let mut output = line.to_string();
    for (pat, replacement) in INLINE_PATTERNS.iter() {
        output = pat.replace_all(&output, *replacement).to_string();
    }
    output
}

/// A table row becomes its cells joined with two spaces.
fn flatten_table_row(line: &str) -> String {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| strip_inline(cell.trim()))
        .collect::<Vec<String>>()
        .join("  ")
}
