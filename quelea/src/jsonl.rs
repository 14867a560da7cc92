//! JSONL manifest rendering utilities.
//!
//! Converts manifest entries into newline-delimited JSON, one object per line.

use eyre::{Context, Result};
use quelea_align::manifest::ManifestEntry;

/// Serialize entries to JSON lines.
pub fn to_lines(entries: &[ManifestEntry]) -> Result<Vec<String>> {
    entries
        .iter()
        .map(|entry| serde_json::to_string(entry).wrap_err("failed to serialize manifest entry"))
        .collect()
}

/// Format lines as file content, one JSON object per line.
pub fn render(lines: &[String]) -> String {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    content
}

/// Display preview of manifest lines (first and last entries).
pub fn preview_lines(lines: &[String], head_count: usize, tail_count: usize) -> String {
    let total = lines.len();

    if total <= head_count + tail_count {
        render(lines)
    } else {
        let mut out = Vec::new();
        out.extend(lines[0..head_count].iter().cloned());
        out.push("...".to_string());
        out.extend(lines[(total - tail_count)..total].iter().cloned());
        out.join("\n") + "\n"
    }
}
