//! Backslash escaping and paragraph tokenization.
//!
//! Escapes work on runs of backslashes. Each pair in a run is one literal
//! backslash. An odd backslash left over escapes the next character when
//! that character is reserved, and is a literal backslash otherwise:
//!
//! | source   | text   |
//! |----------|--------|
//! | `\<`     | `<`    |
//! | `\\<`    | `\<`   |
//! | `\\\<`   | `\<`   |
//! | `\\\\<`  | `\\<`  |
//! | `\`      | `\`    |
//! | `\\\`    | `\\`   |

use crate::parsing::blocks::kinds::ParagraphLine;

use super::types::Token;

/// Characters a lone backslash can escape.
pub const RESERVED: [char; 7] = ['<', '>', '(', ')', '[', ']', '*'];

const BACKSLASH: char = '\\';

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Tokenizes one physical line, resolving backslash runs.
///
/// Escaped characters come out as [`Token::Literal`] so they can never
/// open or close a span.
pub fn tokenize_line(line: &str, out: &mut Vec<Token>) {
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c != BACKSLASH {
            out.push(Token::Char(c));
            continue;
        }

        let mut run = 1;
        while chars.next_if_eq(&BACKSLASH).is_some() {
            run += 1;
        }
        out.extend(std::iter::repeat_n(Token::Literal(BACKSLASH), run / 2));
        if run % 2 == 1 {
            let escaped = chars.next_if(|&next| is_reserved(next));
            out.push(Token::Literal(escaped.unwrap_or(BACKSLASH)));
        }
    }
}

/// Tokenizes a whole paragraph.
///
/// Between two lines goes a soft break (one space), a hard break when the
/// earlier line ended in two spaces, and `gap` when a blank run separated
/// them. A hard break and a gap can both apply.
pub fn tokenize_paragraph(lines: &[ParagraphLine], gap: &str) -> Vec<Token> {
    let mut out = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            let hard = lines[i - 1].hard_break;
            if hard {
                out.push(Token::HardBreak);
            }
            if line.gap_before {
                out.extend(gap.chars().map(Token::Literal));
            } else if !hard {
                out.push(Token::Literal(' '));
            }
        }
        tokenize_line(&line.text, &mut out);
    }
    out
}
