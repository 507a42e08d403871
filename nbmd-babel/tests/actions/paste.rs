use crate::common::{MemoryClipboard, MemoryEditor, RecordingFeedback};
use nbmd_babel::actions::{paste_from_markdown, report, ActionError, Completed, Severity};
use nbmd_babel::host::CellRange;
use nbmd_babel::Cell;

const CLIPBOARD: &str = "Intro\n\n```python\nprint(1)\n```\n\n```rust\nfn main() {}\n```";

fn editor() -> MemoryEditor {
    MemoryEditor::new(vec![Cell::prose("first"), Cell::prose("second")])
}

fn unset() -> Option<Vec<String>> {
    None
}

#[tokio::test]
async fn pastes_after_first_selection() {
    let mut editor = editor().select(&[CellRange::new(0, 1), CellRange::new(1, 2)]);
    let clipboard = MemoryClipboard::with_text(CLIPBOARD);
    let feedback = RecordingFeedback::default();

    let result = paste_from_markdown(Some(&mut editor), &clipboard, &unset()).await;
    report(&result, &feedback);

    assert_eq!(result.unwrap(), Completed::Pasted { cells: 3, index: 1 });
    assert_eq!(
        editor.cells,
        vec![
            Cell::prose("first"),
            Cell::prose("Intro"),
            Cell::code("python", "print(1)"),
            Cell::prose("```rust\nfn main() {}\n```"),
            Cell::prose("second"),
        ]
    );
    assert_eq!(
        feedback.messages(),
        vec![(Severity::Info, "Cells pasted from Markdown.".to_string())]
    );
}

#[tokio::test]
async fn pastes_at_end_without_selection() {
    let mut editor = editor();
    let clipboard = MemoryClipboard::with_text("```python\nx\n```");

    let result = paste_from_markdown(Some(&mut editor), &clipboard, &unset()).await;

    assert_eq!(result.unwrap(), Completed::Pasted { cells: 1, index: 2 });
    assert_eq!(editor.cells[2], Cell::code("python", "x"));
}

#[tokio::test]
async fn configured_languages_are_honored() {
    let mut editor = editor();
    let clipboard = MemoryClipboard::with_text(CLIPBOARD);
    let config = Some(vec!["rust".to_string()]);

    paste_from_markdown(Some(&mut editor), &clipboard, &config)
        .await
        .unwrap();

    assert_eq!(
        &editor.cells[2..],
        &[
            Cell::prose("Intro"),
            Cell::prose("```python\nprint(1)\n```"),
            Cell::code("rust", "fn main() {}"),
        ]
    );
}

#[tokio::test]
async fn empty_language_list_recognizes_nothing() {
    let mut editor = editor();
    let clipboard = MemoryClipboard::with_text("```python\nx\n```");
    let config: Option<Vec<String>> = Some(vec![]);

    paste_from_markdown(Some(&mut editor), &clipboard, &config)
        .await
        .unwrap();

    assert_eq!(editor.cells[2], Cell::prose("```python\nx\n```"));
}

#[tokio::test]
async fn missing_editor_is_an_error() {
    let clipboard = MemoryClipboard::with_text(CLIPBOARD);
    let feedback = RecordingFeedback::default();

    let result = paste_from_markdown(None::<&mut MemoryEditor>, &clipboard, &unset()).await;
    let severity = report(&result, &feedback);

    assert_eq!(severity, Severity::Error);
    assert_eq!(
        feedback.messages(),
        vec![(Severity::Error, "No active Notebook Editor found.".to_string())]
    );
}

#[tokio::test]
async fn clipboard_read_failure_is_an_error() {
    let mut editor = editor();
    let clipboard = MemoryClipboard {
        fail_reads: true,
        ..Default::default()
    };
    let feedback = RecordingFeedback::default();

    let result = paste_from_markdown(Some(&mut editor), &clipboard, &unset()).await;
    report(&result, &feedback);

    assert!(matches!(result, Err(ActionError::ClipboardRead(_))));
    assert_eq!(editor.cells.len(), 2);
    assert_eq!(
        feedback.messages(),
        vec![(Severity::Error, "Failed to read from clipboard.".to_string())]
    );
}

#[tokio::test]
async fn blank_clipboard_is_informational() {
    let mut editor = editor();
    let clipboard = MemoryClipboard::with_text("  \n\t ");
    let feedback = RecordingFeedback::default();

    let result = paste_from_markdown(Some(&mut editor), &clipboard, &unset()).await;
    let severity = report(&result, &feedback);

    assert_eq!(severity, Severity::Info);
    assert_eq!(
        feedback.messages(),
        vec![(Severity::Info, "Clipboard is empty.".to_string())]
    );
}

#[tokio::test]
async fn only_blank_fences_parse_to_nothing() {
    let mut editor = editor();
    let clipboard = MemoryClipboard::with_text("```python\n   \n```");
    let feedback = RecordingFeedback::default();

    let result = paste_from_markdown(Some(&mut editor), &clipboard, &unset()).await;
    report(&result, &feedback);

    assert_eq!(editor.cells.len(), 2);
    assert_eq!(
        feedback.messages(),
        vec![(
            Severity::Info,
            "Could not parse any cells from clipboard content.".to_string()
        )]
    );
}

#[tokio::test]
async fn rejected_insert_leaves_document_untouched() {
    let mut editor = editor();
    editor.reject_edits = true;
    let clipboard = MemoryClipboard::with_text(CLIPBOARD);
    let feedback = RecordingFeedback::default();

    let result = paste_from_markdown(Some(&mut editor), &clipboard, &unset()).await;
    let severity = report(&result, &feedback);

    assert_eq!(severity, Severity::Error);
    assert_eq!(editor.cells, vec![Cell::prose("first"), Cell::prose("second")]);
    assert_eq!(
        feedback.messages(),
        vec![(
            Severity::Error,
            "Failed to parse or paste cells from Markdown. Check console for details."
                .to_string()
        )]
    );
}

#[tokio::test]
async fn stale_selection_past_the_end_is_rejected() {
    let mut editor = editor().select(&[CellRange::new(4, 6)]);
    let clipboard = MemoryClipboard::with_text("text");

    let result = paste_from_markdown(Some(&mut editor), &clipboard, &unset()).await;

    assert!(matches!(result, Err(ActionError::Insert(_))));
    assert_eq!(editor.cells.len(), 2);
}
