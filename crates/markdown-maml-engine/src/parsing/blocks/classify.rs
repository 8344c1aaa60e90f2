use crate::parsing::rope::LineRef;

use super::{
    kinds::{CodeFence, Heading},
    open::{BlockOpen, try_open_leaf},
};

/// What a single line looks like in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// ATX heading or code fence.
    Open(BlockOpen),
    /// A run of `=` or `-`. Only meaningful directly below a prose line.
    Underline { level: u8 },
    /// Candidate paragraph content.
    Plain,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    pub line: LineRef,
    pub kind: LineKind,
    /// Set when the line would close an open code block.
    pub closes_fence: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, line: LineRef) -> LineClass {
        let content = line.content();
        let closes_fence = CodeFence::sig(content).is_some_and(|sig| CodeFence::closes(&sig));

        let kind = if content.trim().is_empty() {
            LineKind::Blank
        } else if let Some(open) = try_open_leaf(content) {
            LineKind::Open(open)
        } else if let Some(level) = Heading::underline_level(content) {
            LineKind::Underline { level }
        } else {
            LineKind::Plain
        };

        LineClass {
            line,
            kind,
            closes_fence,
        }
    }
}
