//! Markdown parsing (Markdown → cells)
//!
//! Only the simplified fence dialect is understood: a line opening with exactly
//! three backticks and an optional `[A-Za-z0-9_-]+` tag, a non-empty body, and the
//! first later line consisting of exactly three backticks. Tilde fences, indented
//! code blocks and unterminated fences are ordinary prose.
//!
//! The opening line must end in a bare `\n`. Line anchors inside the body and on
//! the closing fence also accept `\r\n` and `\r` endings, so text with mixed line
//! endings still pairs fences the way a JavaScript multiline regex would.

use crate::cell::{Cell, RecognizedLanguages, DEFAULT_LANGUAGE};
use crate::formats::markdown::serializer::fenced_block;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static FENCED_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^```([A-Za-z0-9_-]+)?\n([\s\S]+?)^```$")
        .expect("fenced code pattern is valid")
});

/// Parse Markdown text into cells.
///
/// Text around fences becomes trimmed prose cells (blank spans are skipped).
/// Fences whose body is blank are dropped. A fence whose language is in
/// `recognized` becomes a code cell; any other fence is kept verbatim as a prose
/// cell so nothing is lost on paste.
pub fn parse_from_markdown(source: &str, recognized: &RecognizedLanguages) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut last_index = 0;
    let mut spans = 0usize;

    for captures in FENCED_CODE.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        spans += 1;

        push_prose(&mut cells, &source[last_index..whole.start()]);

        let language = captures
            .get(1)
            .map_or(DEFAULT_LANGUAGE, |tag| tag.as_str());
        let body = captures.get(2).map_or("", |body| body.as_str()).trim();

        if !body.is_empty() {
            cells.push(fence_to_cell(language, body, recognized));
        }

        last_index = whole.end();
    }

    push_prose(&mut cells, &source[last_index..]);

    debug!(spans, cells = cells.len(), "parsed markdown into cells");
    cells
}

fn fence_to_cell(language: &str, body: &str, recognized: &RecognizedLanguages) -> Cell {
    if recognized.contains(language) {
        Cell::code(language, body)
    } else {
        Cell::prose(fenced_block(language, body))
    }
}

fn push_prose(cells: &mut Vec<Cell>, span: &str) {
    let text = span.trim();
    if !text.is_empty() {
        cells.push(Cell::prose(text));
    }
}
