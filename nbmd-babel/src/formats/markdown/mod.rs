//! Markdown format implementation
//!
//! Flat Markdown is what lands on the clipboard when cells are copied, and what
//! is read back when Markdown is pasted into a notebook.
//!
//! # Cell Mapping Table
//!
//! | Cell    | Markdown                  | Export Notes              | Import Notes                      |
//! |---------|---------------------------|---------------------------|-----------------------------------|
//! | Prose   | Text                      | Content verbatim          | Trimmed span between fences       |
//! | Code    | Fenced block (```lang)    | Missing tag → `plaintext` | Recognized tag → code cell        |
//! | -       | Fenced block, unknown tag | -                         | Kept verbatim inside a prose cell |
//! | -       | Fenced block, blank body  | -                         | Dropped                           |
//!
//! Cells are joined with one blank line on export.
//!
//! # Lossy Conversions
//!
//! Export and import are not exact inverses:
//! - Leading and trailing whitespace of prose and code is trimmed on import
//! - Adjacent prose cells merge into one prose cell on import
//! - Code cells with an unrecognized language come back as prose
//! - Code cells with blank content disappear
//!
//! # Library Choice
//!
//! The fence dialect is deliberately narrower than CommonMark (no tildes, no
//! indented blocks, unterminated fences stay prose), so a CommonMark parser would
//! accept more than we want. A single multi-line `regex` pattern captures the
//! dialect exactly.

pub mod parser;
pub mod serializer;

use crate::cell::{Cell, RecognizedLanguages};
use crate::error::FormatError;
use crate::format::Format;

pub use parser::parse_from_markdown;
pub use serializer::serialize_to_markdown;

/// Format implementation for Markdown
///
/// Carries the set of languages that parse into real code cells.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    recognized: RecognizedLanguages,
}

impl MarkdownFormat {
    pub fn new(recognized: RecognizedLanguages) -> Self {
        MarkdownFormat { recognized }
    }

    pub fn recognized(&self) -> &RecognizedLanguages {
        &self.recognized
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with fenced code blocks"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Cell>, FormatError> {
        Ok(parse_from_markdown(source, &self.recognized))
    }

    fn serialize(&self, cells: &[Cell]) -> Result<String, FormatError> {
        Ok(serialize_to_markdown(cells))
    }
}
