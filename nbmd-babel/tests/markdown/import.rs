//! Import tests for Markdown format (Markdown → cells)

use crate::common::fixture;
use nbmd_babel::format::Format;
use nbmd_babel::formats::MarkdownFormat;
use nbmd_babel::{parse, Cell, RecognizedLanguages};

fn python() -> RecognizedLanguages {
    RecognizedLanguages::default()
}

#[test]
fn test_empty_input_yields_no_cells() {
    assert!(parse("", &python()).is_empty());
    assert!(parse("   \n\n\t", &python()).is_empty());
}

#[test]
fn test_plain_prose_is_trimmed() {
    let cells = parse("\n\n  Just some text.\nSecond line.  \n", &python());
    assert_eq!(cells, vec![Cell::prose("Just some text.\nSecond line.")]);
}

#[test]
fn test_mixed_document_preserves_order() {
    let cells = parse("intro\n```python\nprint(1)\n```\noutro", &python());
    assert_eq!(
        cells,
        vec![
            Cell::prose("intro"),
            Cell::code("python", "print(1)"),
            Cell::prose("outro"),
        ]
    );
}

#[test]
fn test_unrecognized_language_stays_prose() {
    let cells = parse("```rust\nfn x(){}\n```", &RecognizedLanguages::none());
    assert_eq!(cells, vec![Cell::prose("```rust\nfn x(){}\n```")]);
}

#[test]
fn test_language_match_is_case_sensitive() {
    let cells = parse("```Python\nprint(1)\n```", &python());
    assert_eq!(cells, vec![Cell::prose("```Python\nprint(1)\n```")]);
}

#[test]
fn test_whitespace_only_fence_is_dropped() {
    assert!(parse("```python\n   \n```", &python()).is_empty());
    let cells = parse("before\n```python\n\n\n```\nafter", &python());
    assert_eq!(cells, vec![Cell::prose("before"), Cell::prose("after")]);
}

#[test]
fn test_untagged_fence_uses_plaintext() {
    let recognized = RecognizedLanguages::new(["plaintext"]);
    assert_eq!(
        parse("```\nhi\n```", &recognized),
        vec![Cell::code("plaintext", "hi")]
    );

    // Not recognized: reconstructed with the sentinel tag
    assert_eq!(
        parse("```\nhi\n```", &python()),
        vec![Cell::prose("```plaintext\nhi\n```")]
    );
}

#[test]
fn test_code_body_is_trimmed_but_inner_whitespace_kept() {
    let cells = parse("```python\n\n  if x:\n      y()\n\n```", &python());
    assert_eq!(cells, vec![Cell::code("python", "if x:\n      y()")]);
}

#[test]
fn test_first_closing_fence_ends_block() {
    let source = "```python\na = 1\n```\nmiddle\n```\nb = 2\n```";
    let cells = parse(source, &python());
    assert_eq!(
        cells,
        vec![
            Cell::code("python", "a = 1"),
            Cell::prose("middle"),
            Cell::prose("```plaintext\nb = 2\n```"),
        ]
    );
}

#[test]
fn test_unterminated_fence_is_prose() {
    let source = "text\n```python\nprint(1)\n";
    let cells = parse(source, &python());
    assert_eq!(cells, vec![Cell::prose("text\n```python\nprint(1)")]);
}

#[test]
fn test_closing_fence_must_be_exactly_three_backticks() {
    let source = "```python\nprint(1)\n````\nprint(2)\n```";
    let cells = parse(source, &python());
    assert_eq!(
        cells,
        vec![Cell::code("python", "print(1)\n````\nprint(2)")]
    );
}

#[test]
fn test_indented_and_tilde_fences_are_not_code() {
    let source = "  ```python\n  x\n  ```\n~~~python\ny\n~~~";
    let cells = parse(source, &python());
    assert_eq!(cells, vec![Cell::prose(source.trim())]);
}

#[test]
fn test_tag_followed_by_space_is_not_a_fence() {
    let source = "```python title\nx\n```";
    assert_eq!(parse(source, &python()), vec![Cell::prose(source)]);
}

#[test]
fn test_empty_fence_body_does_not_match() {
    // The body needs at least one character, so these fences pair up differently.
    let source = "```\n```";
    assert_eq!(parse(source, &python()), vec![Cell::prose(source)]);
}

#[test]
fn test_crlf_opening_fence_does_not_match() {
    let source = "```python\r\nprint(1)\r\n```";
    assert_eq!(parse(source, &python()), vec![Cell::prose(source)]);
}

#[test]
fn test_crlf_closing_fence_matches() {
    let source = "```python\nprint(1)\r\n```\r\nafter";
    assert_eq!(
        parse(source, &python()),
        vec![Cell::code("python", "print(1)"), Cell::prose("after")]
    );

    let lone_cr = "```python\nprint(1)\n```\r";
    assert_eq!(
        parse(lone_cr, &python()),
        vec![Cell::code("python", "print(1)")]
    );
}

#[test]
fn test_tag_characters() {
    let recognized = RecognizedLanguages::new(["objective-c_2"]);
    assert_eq!(
        parse("```objective-c_2\n@end\n```", &recognized),
        vec![Cell::code("objective-c_2", "@end")]
    );
}

#[test]
fn test_mixed_fixture() {
    let cells = parse(&fixture("mixed.md"), &python());
    assert_eq!(
        cells,
        vec![
            Cell::prose("# Analysis\n\nSome intro text."),
            Cell::code("python", "import math\nprint(math.pi)"),
            Cell::prose("A shell example:"),
            Cell::prose("```bash\nls -la\n```"),
            Cell::prose("```plaintext\nuntagged\n```"),
            Cell::prose("Closing remarks."),
        ]
    );
}

#[test]
fn test_mixed_fixture_with_more_languages() {
    let recognized = RecognizedLanguages::new(["python", "bash", "plaintext"]);
    let cells = parse(&fixture("mixed.md"), &recognized);
    assert_eq!(
        cells,
        vec![
            Cell::prose("# Analysis\n\nSome intro text."),
            Cell::code("python", "import math\nprint(math.pi)"),
            Cell::prose("A shell example:"),
            Cell::code("bash", "ls -la"),
            Cell::code("plaintext", "untagged"),
            Cell::prose("Closing remarks."),
        ]
    );
}

#[test]
fn test_format_trait_uses_its_languages() {
    let format = MarkdownFormat::new(RecognizedLanguages::new(["sql"]));
    assert!(format.supports_parsing());
    assert_eq!(
        format.parse("```sql\nSELECT 1;\n```").unwrap(),
        vec![Cell::code("sql", "SELECT 1;")]
    );
    assert!(MarkdownFormat::default().recognized().contains("python"));
}
