//! Notebook cells ⇄ Markdown
//!
//!     This crate converts an ordered selection of notebook cells (prose and code) into one flat
//!     Markdown string, and parses Markdown text back into typed cells ready to be inserted into a
//!     notebook. It is what powers "copy selection as Markdown" and "paste Markdown as cells".
//!
//!     This is a pure lib, that is, it powers nbmd-cli but is shell agnostic: no code here
//!     supposes a shell environment, be it std print, env vars, or a real clipboard. Hosts plug in
//!     through the traits in ./host.rs.
//!
//!     The file structure :
//!     .
//!     ├── cell.rs                 # Cell and RecognizedLanguages
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── host.rs                 # Editor, clipboard, configuration, feedback traits
//!     ├── actions.rs              # Copy / paste actions over a host
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # Markdown → cells
//!     │   │   ├── serializer.rs   # cells → Markdown
//!     │   │   └── mod.rs
//!     │   └── ipynb               # Jupyter notebook documents
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Core Algorithms
//!
//!     Serialization emits prose verbatim and code as ```lang fenced blocks, joined by one blank
//!     line. Parsing scans for line-anchored triple-backtick fences, turns the text in between into
//!     trimmed prose cells, and applies the recognized-language policy to each fence: recognized
//!     languages become code cells, anything else stays a literal fenced block inside a prose cell.
//!     Both directions are total functions; nothing in the conversion can fail.
//!
//!     The two directions are not inverses: whitespace at the edges is trimmed, consecutive prose
//!     merges, and unrecognized code comes back as prose.

pub mod actions;
pub mod cell;
pub mod error;
pub mod format;
pub mod formats;
pub mod host;
pub mod registry;

pub use actions::{copy_as_markdown, paste_from_markdown, report, ActionError, Completed, Severity};
pub use cell::{Cell, CellKind, RecognizedLanguages, DEFAULT_LANGUAGE};
pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::{parse_from_markdown, serialize_to_markdown};
pub use registry::FormatRegistry;

/// Serialize cells to Markdown.
pub fn serialize(cells: &[Cell]) -> String {
    serialize_to_markdown(cells)
}

/// Parse Markdown into cells, keeping only `recognized` languages as code.
pub fn parse(text: &str, recognized: &RecognizedLanguages) -> Vec<Cell> {
    parse_from_markdown(text, recognized)
}
