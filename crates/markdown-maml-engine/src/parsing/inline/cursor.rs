use super::types::Token;

/// A cursor for token-by-token inline parsing.
///
/// Cloning is cheap; parsers save a clone before a speculative match and
/// restore it on failure.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The tokens being parsed.
    pub toks: &'a [Token],
    /// Current index into `toks`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `toks`.
    pub fn new(toks: &'a [Token]) -> Self {
        Self { toks, i: 0 }
    }

    /// Returns true if every token has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.toks.len()
    }

    /// Peeks at the current token without advancing.
    pub fn peek(&self) -> Option<Token> {
        self.toks.get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given tokens.
    pub fn starts_with(&self, pat: &[Token]) -> bool {
        self.toks.get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one token, returning the consumed token.
    pub fn bump(&mut self) -> Option<Token> {
        let t = self.peek()?;
        self.i += 1;
        Some(t)
    }

    /// Advances by `n` tokens.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
