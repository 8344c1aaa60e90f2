use crate::{models::Span, parsing::blocks::kinds::ParagraphLine};

use super::{
    cursor::Cursor,
    escape::tokenize_paragraph,
    kinds::{Emphasis, Hyperlink},
    types::Token,
};

/// Parses the lines of one paragraph into [`Span`]s.
///
/// `gap` is the text kept where a blank run separated two lines.
pub fn parse_paragraph(lines: &[ParagraphLine], gap: &str) -> Vec<Span> {
    let tokens = tokenize_paragraph(lines, gap);
    parse_tokens(&tokens)
}

/// Parses resolved tokens into a sequence of [`Span`]s.
///
/// # Precedence
/// Strong (`**`) is tried before emphasis (`*`), then hyperlinks. A
/// construct that does not close, or would cross a hard break, is left as
/// text, delimiters included.
///
/// # Returns
/// Spans in source order. Text between constructs is coalesced into one
/// [`Span::Text`] per run, trimmed at both ends; runs that trim to nothing
/// are dropped.
pub fn parse_tokens(tokens: &[Token]) -> Vec<Span> {
    let mut cur = Cursor::new(tokens);
    let mut out = vec![];
    let mut text = String::new();

    // Helper to flush accumulated text as a Text span
    fn flush_text(out: &mut Vec<Span>, text: &mut String) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push(Span::Text(trimmed.to_string()));
        }
        text.clear();
    }

    while let Some(tok) = cur.peek() {
        if let Some(span) = try_parse_strong(&mut cur) {
            flush_text(&mut out, &mut text);
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_emphasis(&mut cur) {
            flush_text(&mut out, &mut text);
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_hyperlink(&mut cur) {
            flush_text(&mut out, &mut text);
            out.push(span);
            continue;
        }

        match tok {
            Token::HardBreak => {
                flush_text(&mut out, &mut text);
                out.push(Span::HardBreak);
            }
            Token::Char(c) | Token::Literal(c) => text.push(c),
        }
        cur.bump();
    }

    flush_text(&mut out, &mut text);
    out
}

/// Collects text up to (not including) `close`.
///
/// Returns `None` at a hard break or end of input.
fn take_until(cur: &mut Cursor<'_>, close: &[Token]) -> Option<String> {
    let mut inner = String::new();
    while !cur.starts_with(close) {
        inner.push(cur.bump()?.char()?);
    }
    Some(inner)
}

/// Collects text up to the `close` that balances an already consumed
/// `open`, and consumes that `close`.
///
/// Returns `None` at a hard break or end of input.
fn take_balanced(cur: &mut Cursor<'_>, open: char, close: char) -> Option<String> {
    let mut inner = String::new();
    let mut depth = 0usize;
    loop {
        match cur.bump()? {
            Token::HardBreak => return None,
            Token::Char(c) if c == close => {
                if depth == 0 {
                    return Some(inner);
                }
                depth -= 1;
                inner.push(c);
            }
            Token::Char(c) => {
                if c == open {
                    depth += 1;
                }
                inner.push(c);
            }
            Token::Literal(c) => inner.push(c),
        }
    }
}

/// Attempts to parse `**text**` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<Span> {
    try_parse_delimited(cur, &Emphasis::STRONG).map(Span::Strong)
}

/// Attempts to parse `*text*` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Span> {
    try_parse_delimited(cur, &Emphasis::SINGLE).map(Span::Emphasis)
}

fn try_parse_delimited(cur: &mut Cursor<'_>, delim: &[Token]) -> Option<String> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    match take_until(cur, delim) {
        Some(inner) if !inner.is_empty() => {
            cur.bump_n(delim.len());
            Some(inner)
        }
        _ => {
            // Not closed (or empty), restore cursor
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `[text](uri)` at the current position.
///
/// Brackets and parentheses nest. The URI may be empty.
/// On failure, cursor position is restored.
fn try_parse_hyperlink(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Token::Char(Hyperlink::TEXT_OPEN)) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let link = parse_link_tail(cur);
    if link.is_none() {
        // Not a link, restore cursor
        *cur = saved;
    }
    link
}

/// Parses `text](uri)`, the part of a link after its opening bracket.
fn parse_link_tail(cur: &mut Cursor<'_>) -> Option<Span> {
    let text = take_balanced(cur, Hyperlink::TEXT_OPEN, Hyperlink::TEXT_CLOSE)?;
    if cur.peek() != Some(Token::Char(Hyperlink::URI_OPEN)) {
        return None;
    }
    cur.bump(); // (
    let uri = take_balanced(cur, Hyperlink::URI_OPEN, Hyperlink::URI_CLOSE)?;
    Some(Span::Hyperlink { text, uri })
}
