//! Jupyter notebook document model (nbformat 4)
//!
//! Only the parts of the document that matter for cell conversion are typed.
//! Everything else (outputs, execution counts, attachments, unknown top-level
//! keys) is carried through `extra` maps so that a notebook can be loaded,
//! edited and written back without losing data.

use crate::cell::{Cell, DEFAULT_LANGUAGE};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const NBFORMAT: u32 = 4;
const NBFORMAT_MINOR: u32 = 5;

/// Minor version from which cells must carry an `id`.
const CELL_IDS_SINCE_MINOR: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<NotebookCell>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default = "default_nbformat")]
    pub nbformat: u32,
    #[serde(default = "default_nbformat_minor")]
    pub nbformat_minor: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_nbformat() -> u32 {
    NBFORMAT
}

fn default_nbformat_minor() -> u32 {
    NBFORMAT_MINOR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotebookCellType {
    Markdown,
    Code,
    Raw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookCell {
    pub cell_type: NotebookCellType,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cell source, stored either as one string or as a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl Source {
    /// Split text into line entries, each keeping its trailing newline.
    pub fn from_text(text: &str) -> Self {
        Source::Lines(text.split_inclusive('\n').map(str::to_string).collect())
    }

    pub fn text(&self) -> String {
        match self {
            Source::Lines(lines) => lines.concat(),
            Source::Text(text) => text.clone(),
        }
    }
}

impl Notebook {
    /// An empty nbformat 4.5 notebook.
    pub fn new() -> Self {
        Notebook {
            cells: Vec::new(),
            metadata: Map::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
            extra: Map::new(),
        }
    }

    pub fn from_json(source: &str) -> Result<Self, FormatError> {
        serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("Invalid notebook JSON: {e}")))
    }

    /// Serialize with the one-space indentation Jupyter itself writes.
    pub fn to_json(&self) -> Result<String, FormatError> {
        let mut output = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
        self.serialize(&mut serializer).map_err(|e| {
            FormatError::SerializationError(format!("Notebook serialization failed: {e}"))
        })?;
        let mut json = String::from_utf8(output).map_err(|e| {
            FormatError::SerializationError(format!("UTF-8 conversion failed: {e}"))
        })?;
        json.push('\n');
        Ok(json)
    }

    /// Build a notebook holding `cells`, tagging it with the first code language.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut notebook = Notebook::new();
        if let Some(language) = cells.iter().find_map(Cell::language) {
            notebook
                .metadata
                .insert("language_info".to_string(), json!({ "name": language }));
        }
        notebook.cells = notebook.notebook_cells(cells);
        notebook
    }

    /// Kernel language declared in the notebook metadata.
    pub fn language(&self) -> Option<&str> {
        let from_language_info = self
            .metadata
            .get("language_info")
            .and_then(|info| info.get("name"))
            .and_then(Value::as_str);
        let from_kernelspec = self
            .metadata
            .get("kernelspec")
            .and_then(|spec| spec.get("language"))
            .and_then(Value::as_str);
        from_language_info
            .or(from_kernelspec)
            .filter(|language| !language.is_empty())
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Project every notebook cell into a [`Cell`].
    pub fn to_cells(&self) -> Vec<Cell> {
        let notebook_language = self.language();
        self.cells
            .iter()
            .map(|cell| cell.to_cell(notebook_language))
            .collect()
    }

    /// Insert `cells` before position `index` (`index == cell_count()` appends).
    pub fn insert_cells(&mut self, index: usize, cells: &[Cell]) -> Result<(), FormatError> {
        if index > self.cells.len() {
            return Err(FormatError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            });
        }

        let new_cells = self.notebook_cells(cells);
        self.cells.splice(index..index, new_cells);
        Ok(())
    }

    /// Build notebook cells for `cells`, with ids unused by this notebook when
    /// its format version has them.
    fn notebook_cells(&self, cells: &[Cell]) -> Vec<NotebookCell> {
        let mut new_cells = Vec::with_capacity(cells.len());
        for cell in cells {
            let mut notebook_cell = NotebookCell::from_cell(cell);
            if self.nbformat_minor >= CELL_IDS_SINCE_MINOR {
                let id = self.fresh_cell_id(&new_cells);
                notebook_cell.extra.insert("id".to_string(), Value::String(id));
            }
            new_cells.push(notebook_cell);
        }
        new_cells
    }

    fn fresh_cell_id(&self, pending: &[NotebookCell]) -> String {
        let taken = |candidate: &str| {
            self.cells
                .iter()
                .chain(pending)
                .any(|cell| cell.id() == Some(candidate))
        };
        let mut counter = self.cells.len() + pending.len();
        loop {
            let candidate = format!("nbmd-{counter}");
            if !taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl NotebookCell {
    pub fn from_cell(cell: &Cell) -> Self {
        match cell {
            Cell::Prose { content } => NotebookCell {
                cell_type: NotebookCellType::Markdown,
                source: Source::from_text(content),
                metadata: Map::new(),
                extra: Map::new(),
            },
            Cell::Code { language, content } => {
                let mut metadata = Map::new();
                metadata.insert("vscode".to_string(), json!({ "languageId": language }));
                let mut extra = Map::new();
                extra.insert("execution_count".to_string(), Value::Null);
                extra.insert("outputs".to_string(), Value::Array(Vec::new()));
                NotebookCell {
                    cell_type: NotebookCellType::Code,
                    source: Source::from_text(content),
                    metadata,
                    extra,
                }
            }
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.extra.get("id").and_then(Value::as_str)
    }

    /// Language recorded on the cell by an editor, if any.
    pub fn language_id(&self) -> Option<&str> {
        self.metadata
            .get("vscode")
            .and_then(|vscode| vscode.get("languageId"))
            .and_then(Value::as_str)
            .filter(|language| !language.is_empty())
    }

    /// Project into a [`Cell`]. Raw cells are treated as prose.
    pub fn to_cell(&self, notebook_language: Option<&str>) -> Cell {
        let content = self.source.text();
        match self.cell_type {
            NotebookCellType::Markdown | NotebookCellType::Raw => Cell::prose(content),
            NotebookCellType::Code => {
                let language = self
                    .language_id()
                    .or(notebook_language)
                    .unwrap_or(DEFAULT_LANGUAGE);
                Cell::code(language, content)
            }
        }
    }
}
