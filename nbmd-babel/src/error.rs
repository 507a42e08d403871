//! Error types for format operations

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Insertion point lies past the end of the document
    #[error("Cannot insert cells at index {index}: document has {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
}
