/// What a fence line carries besides its backticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Language tag after the opening backticks. Recognised, never stored
    /// in the tree.
    pub tag: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the fence signature if `line` is a fence line.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let rest = line.trim_end().strip_prefix(Self::BACKTICKS)?;
        if rest.contains('`') {
            return None;
        }
        let tag = rest.trim();
        Some(FenceSig {
            tag: (!tag.is_empty()).then(|| tag.to_string()),
        })
    }

    /// Only a bare fence closes a code block; tagged fences inside one are
    /// content.
    pub fn closes(sig: &FenceSig) -> bool {
        sig.tag.is_none()
    }

    /// Joins raw body lines (terminators included) into the block text.
    ///
    /// Trailing blank lines and the final terminator are dropped.
    pub fn content(lines: &[String]) -> String {
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let mut text = lines[..end].concat();
        let len = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(len);
        text
    }
}
