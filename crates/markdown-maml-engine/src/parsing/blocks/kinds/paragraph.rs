/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the default leaf block when no
/// other opener matches. Their lines are handed to the inline parser.
pub struct Paragraph;

impl Paragraph {
    /// Trailing spaces that turn the following line break into a hard break.
    pub const HARD_BREAK_SPACES: &'static str = "  ";
}

/// One source line of a paragraph, trimmed, with the break facts the
/// inline parser needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphLine {
    pub text: String,
    /// A run of blank lines separated this line from the previous one.
    pub gap_before: bool,
    /// The source line ended in two or more spaces.
    pub hard_break: bool,
}

impl ParagraphLine {
    pub fn new(content: &str, gap_before: bool) -> Self {
        Self {
            text: content.trim().to_string(),
            gap_before,
            hard_break: content.ends_with(Paragraph::HARD_BREAK_SPACES),
        }
    }
}
