use xi_rope::Rope;

/// A single physical line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    /// Line text including its terminator, if it had one.
    pub text: String,
}

impl LineRef {
    /// Line text without the trailing `\n` or `\r\n`.
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

impl AsRef<str> for LineRef {
    fn as_ref(&self) -> &str {
        self.content()
    }
}

/// Iterates the lines of `rope` in order, keeping their terminators.
///
/// Terminators are kept so code blocks can reproduce their source text
/// exactly.
pub fn lines_of(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    rope.lines_raw(..)
        .enumerate()
        .map(|(i, line)| LineRef {
            number: i + 1,
            text: line.into_owned(),
        })
}
