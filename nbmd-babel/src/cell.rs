//! Cell data model
//!
//! A [`Cell`] is the unit exchanged between notebooks and Markdown text. Cells are
//! built fresh by a parser (or projected from a host notebook) and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Language tag used for code that does not declare one.
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// Language id hosts attach to prose cells.
pub const MARKDOWN_LANGUAGE: &str = "markdown";

/// Language recognized when no configuration is present.
pub const DEFAULT_RECOGNIZED_LANGUAGE: &str = "python";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Prose,
    Code,
}

/// A single unit of notebook content.
///
/// Prose cells never carry a language; code cells always do (possibly
/// [`DEFAULT_LANGUAGE`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cell {
    Prose { content: String },
    Code { language: String, content: String },
}

impl Cell {
    pub fn prose(content: impl Into<String>) -> Self {
        Cell::Prose {
            content: content.into(),
        }
    }

    /// Build a code cell. An empty language falls back to [`DEFAULT_LANGUAGE`].
    pub fn code(language: impl Into<String>, content: impl Into<String>) -> Self {
        let language = language.into();
        let language = if language.is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            language
        };
        Cell::Code {
            language,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Prose { .. } => CellKind::Prose,
            Cell::Code { .. } => CellKind::Code,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Cell::Prose { content } | Cell::Code { content, .. } => content,
        }
    }

    /// The code language, or `None` for prose.
    pub fn language(&self) -> Option<&str> {
        match self {
            Cell::Prose { .. } => None,
            Cell::Code { language, .. } => Some(language),
        }
    }

    /// The language id a host editor expects for this cell (`markdown` for prose).
    pub fn host_language(&self) -> &str {
        self.language().unwrap_or(MARKDOWN_LANGUAGE)
    }
}

/// Language tags that paste as real code cells.
///
/// Membership is case-sensitive. Tags outside the set are kept as literal
/// fenced blocks inside prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedLanguages {
    tags: BTreeSet<String>,
}

impl RecognizedLanguages {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecognizedLanguages {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// A set that recognizes nothing.
    pub fn none() -> Self {
        RecognizedLanguages {
            tags: BTreeSet::new(),
        }
    }

    /// Resolve a configured value. `None` means "unset" and yields the default
    /// set; an explicit empty list stays empty.
    pub fn from_config(configured: Option<Vec<String>>) -> Self {
        match configured {
            Some(tags) => Self::new(tags),
            None => Self::default(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl Default for RecognizedLanguages {
    fn default() -> Self {
        Self::new([DEFAULT_RECOGNIZED_LANGUAGE])
    }
}
