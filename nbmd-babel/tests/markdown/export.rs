//! Export tests for Markdown format (cells → Markdown)

use insta::assert_snapshot;
use nbmd_babel::format::Format;
use nbmd_babel::formats::markdown::serializer::{fenced_block, CELL_SEPARATOR};
use nbmd_babel::formats::MarkdownFormat;
use nbmd_babel::{serialize, Cell};

#[test]
fn test_empty_selection_serializes_to_empty_string() {
    assert_eq!(serialize(&[]), "");
}

#[test]
fn test_prose_is_emitted_verbatim() {
    let cells = vec![Cell::prose("  # Title\n\n*emphasis*  ")];
    assert_eq!(serialize(&cells), "  # Title\n\n*emphasis*  ");
}

#[test]
fn test_code_cell_becomes_fence() {
    let cells = vec![Cell::code("python", "print(1)")];
    assert_eq!(serialize(&cells), "```python\nprint(1)\n```");
}

#[test]
fn test_code_without_language_uses_plaintext() {
    // Bypass the constructor so the tag really is empty.
    let cells = vec![Cell::Code {
        language: String::new(),
        content: "raw".to_string(),
    }];
    assert_eq!(serialize(&cells), "```plaintext\nraw\n```");
    assert_eq!(fenced_block("", "raw"), "```plaintext\nraw\n```");
}

#[test]
fn test_code_content_is_not_trimmed_on_export() {
    let cells = vec![Cell::code("python", "\n  x = 1\n")];
    assert_eq!(serialize(&cells), "```python\n\n  x = 1\n\n```");
}

#[test]
fn test_cells_are_joined_by_one_blank_line() {
    let cells = vec![
        Cell::prose("one"),
        Cell::code("python", "two"),
        Cell::prose("three"),
    ];
    let markdown = serialize(&cells);
    assert_eq!(markdown.matches(CELL_SEPARATOR).count(), 2);
    assert!(!markdown.ends_with('\n'));
}

#[test]
fn test_mixed_selection_snapshot() {
    let cells = vec![
        Cell::prose("# Loading data"),
        Cell::code("python", "import pandas as pd\ndf = pd.read_csv(\"data.csv\")"),
        Cell::prose("Then query it:"),
        Cell::code("sql", "SELECT * FROM df;"),
    ];

    assert_snapshot!(serialize(&cells), @r#"
# Loading data

```python
import pandas as pd
df = pd.read_csv("data.csv")
```

Then query it:

```sql
SELECT * FROM df;
```
"#);
}

#[test]
fn test_format_trait_serialize() {
    let format = MarkdownFormat::default();
    assert!(format.supports_serialization());
    let output = format.serialize(&[Cell::prose("a"), Cell::prose("b")]).unwrap();
    assert_eq!(output, "a\n\nb");
}
