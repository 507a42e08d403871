//! Host collaborator interfaces
//!
//! The conversions in this crate never touch a real editor. Whatever embeds them
//! (an editor extension, the `nbmd` command line) provides the notebook, the
//! clipboard, the configuration and a place to show messages through the traits
//! below. Clipboard and document edits are asynchronous on every host we target,
//! so those methods are `async`.

use crate::cell::Cell;
use crate::error::FormatError;
use async_trait::async_trait;
use std::ops::Range;

/// A half-open range of cell indices, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: usize,
    pub end: usize,
}

impl CellRange {
    pub fn new(start: usize, end: usize) -> Self {
        CellRange { start, end }
    }

    /// A range covering exactly one cell, or `None` when `index` is `usize::MAX`.
    pub fn single(index: usize) -> Option<Self> {
        index.checked_add(1).map(|end| CellRange::new(index, end))
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The indices of this range that exist in a notebook of `len` cells.
    pub fn within(&self, len: usize) -> Range<usize> {
        self.start.min(len)..self.end.min(len)
    }
}

/// Failures reported by host services.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("edit rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The notebook currently open in the host editor.
#[async_trait]
pub trait NotebookEditor: Send + Sync {
    /// Current selections, in the order the host reports them.
    fn selections(&self) -> &[CellRange];

    /// Every cell of the notebook, projected into [`Cell`]s.
    fn cells(&self) -> Vec<Cell>;

    fn cell_count(&self) -> usize {
        self.cells().len()
    }

    /// Insert `cells` before `index` as one edit. Either every cell lands or none does.
    async fn insert_cells(&mut self, index: usize, cells: Vec<Cell>) -> Result<(), HostError>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn read_text(&self) -> Result<String, HostError>;
    async fn write_text(&self, text: &str) -> Result<(), HostError>;
}

/// User configuration as seen by the paste action.
pub trait Configuration: Send + Sync {
    /// Configured recognized languages; `None` when the setting is absent.
    fn recognized_languages(&self) -> Option<Vec<String>>;
}

impl Configuration for Option<Vec<String>> {
    fn recognized_languages(&self) -> Option<Vec<String>> {
        self.clone()
    }
}

/// Where user-facing messages go.
pub trait Feedback: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}
