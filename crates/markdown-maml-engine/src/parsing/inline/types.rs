/// A unit of paragraph text after escapes and line breaks are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A source character. May act as an inline delimiter.
    Char(char),
    /// An escaped or synthesised character. Always plain text.
    Literal(char),
    /// Explicit break from trailing spaces.
    HardBreak,
}

impl Token {
    /// The character carried by the token, if any.
    pub fn char(self) -> Option<char> {
        match self {
            Token::Char(c) | Token::Literal(c) => Some(c),
            Token::HardBreak => None,
        }
    }
}
