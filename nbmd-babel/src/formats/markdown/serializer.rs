//! Markdown serialization (cells → Markdown)
//!
//! Prose cells are emitted verbatim, code cells become fenced blocks, and the
//! results are joined with a single blank line.

use crate::cell::{Cell, DEFAULT_LANGUAGE};
use tracing::debug;

/// Separator placed between consecutive serialized cells.
pub const CELL_SEPARATOR: &str = "\n\n";

/// Opening and closing code fence marker.
pub const FENCE_MARKER: &str = "```";

/// Serialize cells to a single Markdown string.
///
/// Returns an empty string for an empty slice.
pub fn serialize_to_markdown(cells: &[Cell]) -> String {
    let parts: Vec<String> = cells.iter().map(cell_to_markdown).collect();
    debug!(cells = parts.len(), "serialized cells to markdown");
    parts.join(CELL_SEPARATOR)
}

fn cell_to_markdown(cell: &Cell) -> String {
    match cell {
        Cell::Prose { content } => content.clone(),
        Cell::Code { language, content } => fenced_block(language, content),
    }
}

/// Wrap `body` in a fence tagged with `language` (or the plaintext sentinel).
pub fn fenced_block(language: &str, body: &str) -> String {
    let language = if language.is_empty() {
        DEFAULT_LANGUAGE
    } else {
        language
    };
    format!("{FENCE_MARKER}{language}\n{body}\n{FENCE_MARKER}")
}
