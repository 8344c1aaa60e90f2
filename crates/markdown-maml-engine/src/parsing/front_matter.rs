//! Flat `key: value` front matter between two `---` lines.
//!
//! ```markdown
//! ---
//! schema: 2.0.0
//! external help file: Microsoft.PowerShell.Commands.dll-Help.xml
//! ---
//! ```
//!
//! Only scalar pairs are read. Nested values, lists and multi-line scalars
//! are out of reach; this is not a YAML parser.

use std::iter::Peekable;

use crate::models::FrontMatter;

/// The line that opens and closes a front-matter block.
pub const DELIMITER: &str = "---";

/// Result of reading a front-matter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatterBlock {
    pub entries: FrontMatter,
    /// Whether a closing delimiter was found before the input ran out.
    pub closed: bool,
}

/// Extracts the front matter of `text` without parsing the rest of it.
///
/// Returns an empty map when the first non-blank line is not `---`.
pub fn extract_front_matter(text: &str) -> FrontMatter {
    read_front_matter(&mut text.lines().peekable())
        .map(|block| block.entries)
        .unwrap_or_default()
}

/// Reads a front-matter block from the start of `lines`.
///
/// Leading blank lines are consumed either way. When the next line is not
/// the delimiter it is left in place and `None` is returned. Otherwise the
/// whole block is consumed, closing delimiter included; an unclosed block
/// takes the rest of the input.
pub fn read_front_matter<I>(lines: &mut Peekable<I>) -> Option<FrontMatterBlock>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    while lines.next_if(|l| is_blank(l.as_ref())).is_some() {}

    lines.next_if(|l| is_delimiter(l.as_ref()))?;

    let mut block = FrontMatterBlock::default();
    for line in lines {
        let line = line.as_ref();
        if is_blank(line) {
            continue;
        }
        if is_delimiter(line) {
            block.closed = true;
            break;
        }
        match line.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                block
                    .entries
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            _ => log::trace!("ignoring front matter line without a key: {line:?}"),
        }
    }
    Some(block)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}
