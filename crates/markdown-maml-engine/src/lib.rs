//! Parser for the restricted markdown dialect used to author MAML help
//! pages (cmdlet reference documentation).
//!
//! The output is a [`Document`] tree of headings, code blocks and
//! paragraphs, plus an optional flat [`FrontMatter`] map. Rendering is left
//! to consumers.

pub mod error;
pub mod models;
pub mod parsing;

pub use error::ParseError;
pub use models::{Block, BlockKind, Document, FrontMatter, Span};
pub use parsing::{
    MarkdownParser, ParseOptions, ParsedMarkdown, extract_front_matter, parse, parse_bytes,
    parse_chunks, parse_document,
};
