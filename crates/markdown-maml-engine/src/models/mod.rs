pub mod document;

pub use document::{Block, BlockKind, Document, FrontMatter, Span};
