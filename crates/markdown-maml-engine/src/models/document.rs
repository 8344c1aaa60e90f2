use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Flat `key: value` metadata read from a leading `---` block.
pub type FrontMatter = HashMap<String, String>;

/// Root of a parsed document.
///
/// Blocks appear in source order. A `Document` is built once per parse call
/// and is not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Headings in document order, as `(level, text)` pairs.
    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Discriminant of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Heading,
    CodeBlock,
    Paragraph,
}

/// A top-level block of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// ATX (`## Text`) or setext (`Text` over `===`/`---`) heading.
    Heading {
        /// Always within `1..=6`; setext headings are 1 (`=`) or 2 (`-`).
        level: u8,
        text: String,
    },
    /// Verbatim text between two fence lines. The fence lines and any
    /// language tag are not part of `text`.
    CodeBlock { text: String },
    /// Inline content of a run of prose lines.
    Paragraph { spans: Vec<Span> },
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::CodeBlock { .. } => BlockKind::CodeBlock,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// Spans of a paragraph; empty for every other block.
    pub fn spans(&self) -> &[Span] {
        match self {
            Block::Paragraph { spans } => spans,
            _ => &[],
        }
    }
}

/// An inline run inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    Text(String),
    Emphasis(String),
    Strong(String),
    /// `[text](uri)`. An empty `uri` marks a placeholder link that a
    /// downstream consumer resolves.
    Hyperlink { text: String, uri: String },
    /// Explicit line break between two runs. Never merged into text.
    HardBreak,
}

impl Span {
    /// Text carried by the span; `None` for [`Span::HardBreak`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Span::Text(t) | Span::Emphasis(t) | Span::Strong(t) => Some(t),
            Span::Hyperlink { text, .. } => Some(text),
            Span::HardBreak => None,
        }
    }
}
