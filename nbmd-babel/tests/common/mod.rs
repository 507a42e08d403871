//! In-memory host used by the action tests.

use async_trait::async_trait;
use nbmd_babel::actions::Severity;
use nbmd_babel::host::{CellRange, Clipboard, Feedback, HostError, NotebookEditor};
use nbmd_babel::Cell;
use std::path::PathBuf;
use std::sync::Mutex;

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[derive(Debug, Default)]
pub struct MemoryEditor {
    pub selections: Vec<CellRange>,
    pub cells: Vec<Cell>,
    pub reject_edits: bool,
}

impl MemoryEditor {
    pub fn new(cells: Vec<Cell>) -> Self {
        MemoryEditor {
            cells,
            ..Default::default()
        }
    }

    pub fn select(mut self, ranges: &[CellRange]) -> Self {
        self.selections = ranges.to_vec();
        self
    }
}

#[async_trait]
impl NotebookEditor for MemoryEditor {
    fn selections(&self) -> &[CellRange] {
        &self.selections
    }

    fn cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    async fn insert_cells(&mut self, index: usize, cells: Vec<Cell>) -> Result<(), HostError> {
        if self.reject_edits {
            return Err(HostError::Rejected("document is read-only".to_string()));
        }
        if index > self.cells.len() {
            return Err(HostError::Rejected(format!(
                "index {index} is past the end of the notebook"
            )));
        }
        self.cells.splice(index..index, cells);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Mutex<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        MemoryClipboard {
            contents: Mutex::new(text.to_string()),
            ..Default::default()
        }
    }

    pub fn text(&self) -> String {
        self.contents.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read_text(&self) -> Result<String, HostError> {
        if self.fail_reads {
            return Err(HostError::Clipboard("read denied".to_string()));
        }
        Ok(self.text())
    }

    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        if self.fail_writes {
            return Err(HostError::Clipboard("write denied".to_string()));
        }
        *self.contents.lock().unwrap() = text.to_string();
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingFeedback {
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Feedback for RecordingFeedback {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Severity::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Severity::Error, message.to_string()));
    }
}
