use super::kinds::{CodeFence, Heading};

/// A line that starts a new block on its own, whatever came before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    Heading { level: u8, text: String },
    FencedCode { tag: Option<String> },
}

pub fn try_open_leaf(line: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(sig) = CodeFence::sig(line) {
        return Some(BlockOpen::FencedCode { tag: sig.tag });
    }
    if let Some((level, text)) = Heading::atx(line) {
        return Some(BlockOpen::Heading { level, text });
    }
    None
}
