//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing text into cells and serializing cells
//! back into text.

use crate::cell::Cell;
use crate::error::FormatError;

/// Trait for cell formats
///
/// Implementors provide bidirectional conversion between a string representation and a
/// sequence of [`Cell`]s. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<Cell>, FormatError> {
///         Ok(vec![Cell::prose(source)])
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "ipynb")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → cells)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (cells → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into cells
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Vec<Cell>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize cells into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _cells: &[Cell]) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
