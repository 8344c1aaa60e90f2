use crate::{
    models::Block,
    parsing::{ParseOptions, inline::parse_paragraph, rope::LineRef},
};

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, ParagraphLine},
    open::BlockOpen,
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<ParagraphLine>,
        /// Blank lines were seen since the last paragraph line. Whether they
        /// end the paragraph depends on the next non-blank line.
        pending_blank: bool,
    },
    Fence {
        opened_at: usize,
        lines: Vec<String>,
    },
}

/// Block assembly state machine.
///
/// Lines are pushed one at a time. Decisions that need lookahead (a blank
/// run inside a paragraph, a setext underline) are deferred until the line
/// that settles them arrives, so every line is looked at once.
pub struct BlockBuilder {
    paragraph_gap: String,
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            paragraph_gap: options.paragraph_gap.clone(),
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match c.kind {
            LineKind::Blank => self.mark_blank(),
            LineKind::Open(open) => {
                self.flush_paragraph();
                self.open_leaf(open, &c.line);
            }
            LineKind::Underline { level } => self.underline(level, &c.line),
            LineKind::Plain => self.extend_paragraph(&c.line),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_paragraph();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, block: Block) {
        log::trace!("emit {:?} block #{}", block.kind(), self.out.len());
        self.out.push(block);
    }

    fn open_leaf(&mut self, open: BlockOpen, line: &LineRef) {
        match open {
            BlockOpen::Heading { level, text } => self.emit(Block::Heading { level, text }),
            BlockOpen::FencedCode { tag } => {
                log::trace!("code fence opened at line {} (tag {tag:?})", line.number);
                self.leaf = LeafState::Fence {
                    opened_at: line.number,
                    lines: vec![],
                };
            }
        }
    }

    fn consume_fence_line(&mut self, c: LineClass) {
        if c.closes_fence {
            if let LeafState::Fence { lines, .. } =
                std::mem::replace(&mut self.leaf, LeafState::None)
            {
                self.emit(Block::CodeBlock {
                    text: CodeFence::content(&lines),
                });
            }
            return;
        }
        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.line.text);
        }
    }

    fn mark_blank(&mut self) {
        if let LeafState::Paragraph { pending_blank, .. } = &mut self.leaf {
            *pending_blank = true;
        }
    }

    /// A prose line followed directly by an underline becomes a heading.
    /// Anywhere else the underline is ordinary paragraph text.
    fn underline(&mut self, level: u8, line: &LineRef) {
        let heading_text = match &mut self.leaf {
            LeafState::Paragraph {
                lines,
                pending_blank: false,
            } => lines.pop().map(|l| l.text),
            _ => None,
        };

        match heading_text {
            Some(text) => {
                self.flush_paragraph();
                self.emit(Block::Heading { level, text });
            }
            None => self.extend_paragraph(line),
        }
    }

    fn extend_paragraph(&mut self, line: &LineRef) {
        match &mut self.leaf {
            LeafState::Paragraph {
                lines,
                pending_blank,
            } => {
                lines.push(ParagraphLine::new(line.content(), *pending_blank));
                *pending_blank = false;
            }
            _ => {
                self.leaf = LeafState::Paragraph {
                    lines: vec![ParagraphLine::new(line.content(), false)],
                    pending_blank: false,
                };
            }
        }
    }

    /// Ends the open paragraph, dropping any blank run still pending.
    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        match prev {
            LeafState::Paragraph { lines, .. } => {
                if !lines.is_empty() {
                    let spans = parse_paragraph(&lines, &self.paragraph_gap);
                    self.emit(Block::Paragraph { spans });
                }
            }
            other => self.leaf = other, // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence { opened_at, lines } = prev {
            // Unterminated fence: the rest of the input is code.
            log::warn!("code fence opened at line {opened_at} is never closed");
            self.emit(Block::CodeBlock {
                text: CodeFence::content(&lines),
            });
        }
    }
}
