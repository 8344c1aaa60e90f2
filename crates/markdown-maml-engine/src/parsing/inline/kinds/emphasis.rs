use crate::parsing::inline::types::Token;

pub struct Emphasis;

impl Emphasis {
    pub const DELIM: char = '*';
    pub const SINGLE: [Token; 1] = [Token::Char(Self::DELIM)];
    pub const STRONG: [Token; 2] = [Token::Char(Self::DELIM), Token::Char(Self::DELIM)];
}
