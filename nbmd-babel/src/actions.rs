//! User actions: copy selection as Markdown, paste Markdown as cells
//!
//! Each action gathers its input from the host, runs one of the pure
//! conversions, and hands the complete result back to the host. Every run ends
//! in exactly one user-visible message, produced by [`report`] from the action's
//! result. The conversion always finishes before any host write starts, so a
//! failed write never leaves a partial edit behind.

use crate::cell::{Cell, RecognizedLanguages};
use crate::formats::markdown::{parse_from_markdown, serialize_to_markdown};
use crate::host::{CellRange, Clipboard, Configuration, Feedback, HostError, NotebookEditor};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Why an action stopped early. `Display` is the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("No active Notebook Editor found.")]
    NoActiveEditor,
    #[error("No cells selected to copy.")]
    NothingSelected,
    #[error("No cells effectively selected.")]
    NoEffectiveSelection,
    #[error("No valid cells found in selection.")]
    NoValidCells,
    #[error("Failed to copy selected cells to clipboard.")]
    ClipboardWrite(#[source] HostError),
    #[error("Failed to read from clipboard.")]
    ClipboardRead(#[source] HostError),
    #[error("Clipboard is empty.")]
    ClipboardEmpty,
    #[error("Could not parse any cells from clipboard content.")]
    NothingParsed,
    #[error("Failed to parse or paste cells from Markdown. Check console for details.")]
    Insert(#[source] HostError),
}

impl ActionError {
    pub fn severity(&self) -> Severity {
        match self {
            ActionError::NoActiveEditor
            | ActionError::ClipboardWrite(_)
            | ActionError::ClipboardRead(_)
            | ActionError::Insert(_) => Severity::Error,
            ActionError::NothingSelected
            | ActionError::NoEffectiveSelection
            | ActionError::NoValidCells
            | ActionError::ClipboardEmpty
            | ActionError::NothingParsed => Severity::Info,
        }
    }
}

/// A finished action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completed {
    Copied { cells: usize },
    Pasted { cells: usize, index: usize },
}

impl fmt::Display for Completed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completed::Copied { .. } => write!(f, "Selected cells copied as Markdown."),
            Completed::Pasted { .. } => write!(f, "Cells pasted from Markdown."),
        }
    }
}

pub type ActionResult = Result<Completed, ActionError>;

/// Serialize the selected cells of `editor` and put the Markdown on the clipboard.
pub async fn copy_as_markdown<E, C>(editor: Option<&E>, clipboard: &C) -> ActionResult
where
    E: NotebookEditor + ?Sized,
    C: Clipboard + ?Sized,
{
    let editor = editor.ok_or(ActionError::NoActiveEditor)?;
    let selected = selected_cells(editor.selections(), &editor.cells())?;

    let markdown = serialize_to_markdown(&selected);

    clipboard.write_text(&markdown).await.map_err(|e| {
        error!(error = %e, "failed to copy to clipboard");
        ActionError::ClipboardWrite(e)
    })?;

    info!(cells = selected.len(), "copied cells as markdown");
    Ok(Completed::Copied {
        cells: selected.len(),
    })
}

/// Parse the clipboard as Markdown and insert the cells into `editor`.
///
/// Cells go after the first selection, or at the end of the notebook when
/// nothing is selected. Recognized languages are read from `config` on every
/// call, so a changed setting applies to the next paste.
pub async fn paste_from_markdown<E, C, K>(
    editor: Option<&mut E>,
    clipboard: &C,
    config: &K,
) -> ActionResult
where
    E: NotebookEditor + ?Sized,
    C: Clipboard + ?Sized,
    K: Configuration + ?Sized,
{
    let editor = editor.ok_or(ActionError::NoActiveEditor)?;

    let text = clipboard.read_text().await.map_err(|e| {
        error!(error = %e, "failed to read from clipboard");
        ActionError::ClipboardRead(e)
    })?;

    if text.trim().is_empty() {
        return Err(ActionError::ClipboardEmpty);
    }

    let recognized = RecognizedLanguages::from_config(config.recognized_languages());
    let cells = parse_from_markdown(&text, &recognized);
    if cells.is_empty() {
        return Err(ActionError::NothingParsed);
    }

    let index = insertion_index(editor.selections(), editor.cell_count());
    let count = cells.len();

    editor.insert_cells(index, cells).await.map_err(|e| {
        error!(error = %e, index, "failed to paste cells from markdown");
        ActionError::Insert(e)
    })?;

    info!(cells = count, index, "pasted cells from markdown");
    Ok(Completed::Pasted {
        cells: count,
        index,
    })
}

/// Resolve selections to the cells they cover: deduplicated, in document order,
/// out-of-range indices ignored.
pub fn selected_cells(selections: &[CellRange], cells: &[Cell]) -> Result<Vec<Cell>, ActionError> {
    let nothing_selected = match selections {
        [] => true,
        [only] => only.is_empty(),
        _ => false,
    };
    if nothing_selected {
        return Err(ActionError::NothingSelected);
    }

    if selections.iter().all(CellRange::is_empty) {
        return Err(ActionError::NoEffectiveSelection);
    }

    let indices: BTreeSet<usize> = selections
        .iter()
        .flat_map(|range| range.within(cells.len()))
        .collect();
    let selected: Vec<Cell> = indices
        .into_iter()
        .filter_map(|index| cells.get(index).cloned())
        .collect();
    if selected.is_empty() {
        return Err(ActionError::NoValidCells);
    }

    Ok(selected)
}

/// End of the first selection, or `cell_count` when nothing is selected.
pub fn insertion_index(selections: &[CellRange], cell_count: usize) -> usize {
    selections
        .first()
        .map_or(cell_count, |selection| selection.end)
}

/// Show the outcome of an action as exactly one message and return its severity.
pub fn report<F>(result: &ActionResult, feedback: &F) -> Severity
where
    F: Feedback + ?Sized,
{
    match result {
        Ok(done) => {
            feedback.info(&done.to_string());
            Severity::Info
        }
        Err(err) => {
            let message = err.to_string();
            let severity = err.severity();
            match severity {
                Severity::Info => feedback.info(&message),
                Severity::Error => feedback.error(&message),
            }
            severity
        }
    }
}
