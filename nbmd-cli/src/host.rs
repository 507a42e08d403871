//! Terminal host for the copy/paste actions
//!
//! A `.ipynb` file on disk plays the open notebook editor, the clipboard is a
//! file or the process's stdio, and messages go to stderr so stdout stays
//! clean for Markdown.

use async_trait::async_trait;
use nbmd_babel::formats::ipynb::Notebook;
use nbmd_babel::host::{CellRange, Clipboard, Feedback, HostError, NotebookEditor};
use nbmd_babel::Cell;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Parse a `--select` value: `N` selects one cell, `A..B` the half-open range.
pub fn parse_selection(raw: &str) -> Result<CellRange, String> {
    let parse_index = |text: &str| {
        text.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid cell index '{text}' in selection '{raw}'"))
    };

    match raw.split_once("..") {
        Some((start, end)) => {
            let start = parse_index(start)?;
            let end = parse_index(end)?;
            if end < start {
                return Err(format!("selection '{raw}' ends before it starts"));
            }
            Ok(CellRange::new(start, end))
        }
        None => {
            let index = parse_index(raw)?;
            CellRange::single(index)
                .ok_or_else(|| format!("cell index '{raw}' is too large"))
        }
    }
}

/// A notebook file opened for editing.
#[derive(Debug)]
pub struct NotebookFile {
    path: PathBuf,
    notebook: Notebook,
    selections: Vec<CellRange>,
}

impl NotebookFile {
    pub async fn open(
        path: impl AsRef<Path>,
        selections: Vec<CellRange>,
    ) -> Result<Self, HostError> {
        let path = path.as_ref().to_path_buf();
        let source = tokio::fs::read_to_string(&path).await?;
        let notebook = Notebook::from_json(&source)?;
        Ok(NotebookFile {
            path,
            notebook,
            selections,
        })
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }
}

#[async_trait]
impl NotebookEditor for NotebookFile {
    fn selections(&self) -> &[CellRange] {
        &self.selections
    }

    fn cells(&self) -> Vec<Cell> {
        self.notebook.to_cells()
    }

    fn cell_count(&self) -> usize {
        self.notebook.cell_count()
    }

    async fn insert_cells(&mut self, index: usize, cells: Vec<Cell>) -> Result<(), HostError> {
        // Edit a copy so a failed write leaves the in-memory notebook as it was.
        let mut updated = self.notebook.clone();
        updated.insert_cells(index, &cells)?;
        let json = updated.to_json()?;
        tokio::fs::write(&self.path, json).await?;
        self.notebook = updated;
        Ok(())
    }
}

/// Clipboard backed by a plain text file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileClipboard { path: path.into() }
    }
}

#[async_trait]
impl Clipboard for FileClipboard {
    async fn read_text(&self) -> Result<String, HostError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            HostError::Clipboard(format!("cannot read '{}': {e}", self.path.display()))
        })
    }

    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        tokio::fs::write(&self.path, text).await.map_err(|e| {
            HostError::Clipboard(format!("cannot write '{}': {e}", self.path.display()))
        })
    }
}

/// Clipboard that reads stdin and writes stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioClipboard;

#[async_trait]
impl Clipboard for StdioClipboard {
    async fn read_text(&self) -> Result<String, HostError> {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        Ok(text)
    }

    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Prints user-facing messages to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalFeedback;

impl Feedback for TerminalFeedback {
    fn info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}
