//! Jupyter notebook format implementation
//!
//! Reads and writes `.ipynb` documents (nbformat 4). This is the document model
//! the command-line host edits when cells are pasted, and a convert target for
//! Markdown.
//!
//! # Cell Mapping
//!
//! | Notebook cell | Cell  | Notes                                                           |
//! |---------------|-------|-----------------------------------------------------------------|
//! | markdown      | Prose | Source joined verbatim                                          |
//! | raw           | Prose | Exported back as markdown                                       |
//! | code          | Code  | `metadata.vscode.languageId`, then kernel language, `plaintext` |
//!
//! Outputs and execution counts are not part of [`Cell`] and are dropped by
//! [`IpynbFormat::parse`]; [`Notebook`] itself keeps them when edited in place.

pub mod notebook;

use crate::cell::Cell;
use crate::error::FormatError;
use crate::format::Format;

pub use notebook::{Notebook, NotebookCell, NotebookCellType, Source};

/// Format implementation for Jupyter notebooks
#[derive(Debug, Clone, Copy, Default)]
pub struct IpynbFormat;

impl Format for IpynbFormat {
    fn name(&self) -> &str {
        "ipynb"
    }

    fn description(&self) -> &str {
        "Jupyter notebook (nbformat 4)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["ipynb"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Cell>, FormatError> {
        Ok(Notebook::from_json(source)?.to_cells())
    }

    fn serialize(&self, cells: &[Cell]) -> Result<String, FormatError> {
        Notebook::from_cells(cells).to_json()
    }
}
