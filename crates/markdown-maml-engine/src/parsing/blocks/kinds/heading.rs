/// Heading block type with owned marker constants.
///
/// Covers both ATX (`### Text`) and setext (`Text` over `===` or `---`)
/// forms.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;
    pub const SETEXT_LEVEL_1: char = '=';
    pub const SETEXT_LEVEL_2: char = '-';

    /// Parses an ATX heading line into `(level, text)`.
    ///
    /// The marker run must start the line, be 1 to 6 long and be followed by
    /// some text. A closing `#` run is dropped.
    pub fn atx(line: &str) -> Option<(u8, String)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let text = line[level..]
            .trim()
            .trim_end_matches(Self::MARKER)
            .trim_end();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text.to_string()))
    }

    /// Returns the setext level if `line` is a run of `=` (1) or `-` (2).
    pub fn underline_level(line: &str) -> Option<u8> {
        let t = line.trim_end();
        let first = t.chars().next()?;
        let level = match first {
            Self::SETEXT_LEVEL_1 => 1,
            Self::SETEXT_LEVEL_2 => 2,
            _ => return None,
        };
        t.chars().all(|c| c == first).then_some(level)
    }
}
