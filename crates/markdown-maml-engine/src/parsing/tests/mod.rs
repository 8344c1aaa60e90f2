//! Scenario tests for the parsing module.
//!
//! Inputs use `\r\n` line endings, the way help sources are usually
//! checked in.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    models::{Block, Document, Span},
    parsing::{MarkdownParser, ParseOptions, parse, parse_bytes, parse_chunks},
};

const HEADING_TEXT: &str = "Heading Text";
const CODE_BLOCK_TEXT: &str = "Code block text\r\non multiple lines";
const PARAGRAPH_TEXT: &str = "Some text\r\non multiple\r\nlines";
const HYPERLINK_TEXT: &str = "Microsoft Corporation";
const HYPERLINK_URI: &str = "https://go.microsoft.com/fwlink/?LinkID=135175&query=stuff";

fn parsed(md: &str) -> Document {
    let doc = parse(md);
    invariants::check(&doc);
    doc
}

fn first_spans(doc: &Document) -> &[Span] {
    doc.blocks
        .iter()
        .find_map(|b| match b {
            Block::Paragraph { spans } => Some(spans.as_slice()),
            _ => None,
        })
        .expect("document has a paragraph")
}

fn text(s: &str) -> Span {
    Span::Text(s.to_string())
}

#[rstest]
fn parses_headings_with_hash_prefix(#[values(1, 2, 3, 4, 5, 6)] level: usize) {
    let doc = parsed(&format!("{}{HEADING_TEXT}\r\n", "#".repeat(level)));
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: level as u8,
            text: HEADING_TEXT.into()
        }]
    );
}

#[rstest]
#[case('=', 1)]
#[case('-', 2)]
fn parses_headings_with_underlines(#[case] underline: char, #[case] level: u8) {
    let underline = underline.to_string().repeat(HEADING_TEXT.len());
    let doc = parsed(&format!("{HEADING_TEXT}\r\n{underline}\r\n"));
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level,
            text: HEADING_TEXT.into()
        }]
    );
}

#[rstest]
#[case("```")]
#[case("```powershell")]
fn parses_code_block(#[case] opening: &str) {
    let doc = parsed(&format!("{opening}\r\n{CODE_BLOCK_TEXT}\r\n```\r\n"));
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            text: CODE_BLOCK_TEXT.into()
        }]
    );
}

#[test]
fn parses_paragraph() {
    let doc = parsed(PARAGRAPH_TEXT);
    assert_eq!(first_spans(&doc), &[text("Some text on multiple lines")]);
}

#[test]
fn parses_hyperlink() {
    let doc = parsed(&format!("[{HYPERLINK_TEXT}]({HYPERLINK_URI})"));
    assert_eq!(
        first_spans(&doc),
        &[Span::Hyperlink {
            text: HYPERLINK_TEXT.into(),
            uri: HYPERLINK_URI.into(),
        }]
    );
}

#[test]
fn parses_hyperlink_without_link() {
    let doc = parsed(&format!("[{HYPERLINK_TEXT}]()"));
    assert_eq!(
        first_spans(&doc),
        &[Span::Hyperlink {
            text: HYPERLINK_TEXT.into(),
            uri: String::new(),
        }]
    );
}

#[rstest]
#[case("This is a :\"text\" with doublequotes")]
#[case("about_Hash_Tables (http://go.microsoft.com/fwlink/?LinkID=135175).")]
#[case("Not a hyperlink [PSObject].")]
fn text_spans_keep_punctuation(#[case] line: &str) {
    let doc = parsed(&format!("\r\n# Foo\r\n{line}\r\n"));
    assert_eq!(doc.len(), 2);
    assert_eq!(first_spans(&doc), &[text(line)]);
}

#[test]
fn parses_escaped_less_and_more() {
    let doc = parsed(r"\<port-number\>");
    assert_eq!(first_spans(&doc), &[text("<port-number>")]);
}

#[test]
fn parses_paragraph_with_formatted_spans() {
    let doc = parsed(
        "Normal\r\n\r\nText *Italic*  \r\n\r\n**Bold**\r\n### New header!\r\nBoooo\r\n----\r\n",
    );
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph {
                spans: vec![
                    text("Normal\r\nText"),
                    Span::Emphasis("Italic".into()),
                    Span::HardBreak,
                    Span::Strong("Bold".into()),
                ]
            },
            Block::Heading {
                level: 3,
                text: "New header!".into()
            },
            Block::Heading {
                level: 2,
                text: "Boooo".into()
            },
        ]
    );
}

#[test]
fn parses_document_with_multiple_nodes() {
    let md = format!(
        "\r\n# {HEADING_TEXT}\r\n\r\n{PARAGRAPH_TEXT}\r\n\r\n```\r\n{CODE_BLOCK_TEXT}\r\n```\r\n\r\n## {HEADING_TEXT}\r\n{PARAGRAPH_TEXT} [{HYPERLINK_TEXT}]({HYPERLINK_URI})\r\n"
    );
    let doc = parsed(&md);
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                text: HEADING_TEXT.into()
            },
            Block::Paragraph {
                spans: vec![text("Some text on multiple lines")]
            },
            Block::CodeBlock {
                text: CODE_BLOCK_TEXT.into()
            },
            Block::Heading {
                level: 2,
                text: HEADING_TEXT.into()
            },
            Block::Paragraph {
                spans: vec![
                    text("Some text on multiple lines"),
                    Span::Hyperlink {
                        text: HYPERLINK_TEXT.into(),
                        uri: HYPERLINK_URI.into(),
                    },
                ]
            },
        ]
    );
}

#[test]
fn parses_empty_code_block() {
    let doc = parsed(
        "#### 1:\r\n\r\n```powershell\r\n```\r\n\r\n```powershell\r\n[Parameter(\r\n  ValueFromPipeline = $true,\r\n  ParameterSetName = 'Set 1')]\r\n```\r\n",
    );
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 4,
                text: "1:".into()
            },
            Block::CodeBlock {
                text: String::new()
            },
            Block::CodeBlock {
                text: "[Parameter(\r\n  ValueFromPipeline = $true,\r\n  ParameterSetName = 'Set 1')]"
                    .into()
            },
        ]
    );
}

#[test]
fn one_line_break_vs_two_line_breaks() {
    let doc = parsed("\r\n1\r\n2\r\n\r\n3\r\n");
    assert_eq!(doc.blocks, vec![Block::Paragraph {
        spans: vec![text("1 2\r\n3")]
    }]);
}

#[test]
fn multiple_input_strings() {
    // The middle chunk has no line break, so the fence tag runs on into the
    // paragraph and the final bare fence opens an empty code block.
    let doc = parse_chunks([
        "# Hello\r\n",
        "This is new line",
        "```powershell\r\nCode snippet\r\n```",
    ]);
    invariants::check(&doc);
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                text: "Hello".into()
            },
            Block::Paragraph {
                spans: vec![text("This is new line```powershell Code snippet")]
            },
            Block::CodeBlock {
                text: String::new()
            },
        ]
    );
}

#[rstest]
#[case(&["Hello wor", "ld\n"], "Hello world\n")]
#[case(&["# Tit", "le\n"], "# Title\n")]
#[case(&["```power", "shell\r\nx\r", "\n```\r\n"], "```powershell\r\nx\r\n```\r\n")]
#[case(&["a *it", "alic* [li", "nk](u", "ri)"], "a *italic* [link](uri)")]
#[case(&["text  ", "\r\nmore"], "text  \r\nmore")]
fn chunk_boundaries_are_invisible(#[case] chunks: &[&str], #[case] whole: &str) {
    let doc = parse_chunks(chunks.iter().copied());
    invariants::check(&doc);
    assert_eq!(doc, parse(whole));
}

#[test]
fn heading_split_across_chunks() {
    assert_eq!(
        parse_chunks(["# Tit", "le\n"]).blocks,
        vec![Block::Heading {
            level: 1,
            text: "Title".into()
        }]
    );
}

#[test]
fn escaping_matches_github() {
    let md = [
        "", r"\<", r"\\<", r"\\\<", r"\\\\<", r"\\\\\<", r"\\\\[", r"\", r"\\", r"\\\", r"\\\\",
        "(", ")", "[", "]", r"\(", r"\)", r"\[", r"\\[", r"\]", "",
    ]
    .join("\r\n");
    let doc = parsed(&md);
    assert_eq!(
        first_spans(&doc),
        &[text(r"< \< \< \\< \\< \\[ \ \ \\ \\ ( ) [ ] ( ) [ \[ ]")]
    );
}

#[test]
fn end_to_end_title_and_emphasis() {
    let doc = parsed("# Title\r\n\r\nHello *world*\r\n");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                text: "Title".into()
            },
            Block::Paragraph {
                spans: vec![text("Hello"), Span::Emphasis("world".into())]
            },
        ]
    );
}

#[test]
fn empty_input_is_empty_document() {
    assert!(parse("").is_empty());
    assert!(parse_chunks(Vec::<String>::new()).is_empty());
}

#[test]
fn front_matter_is_skipped() {
    let doc = parsed("---\r\nschema: 2.0.0\r\n---\r\n\r\n# Get-Thing\r\n");
    assert_eq!(
        doc.blocks,
        vec![Block::Heading {
            level: 1,
            text: "Get-Thing".into()
        }]
    );
}

#[test]
fn front_matter_kept_when_not_skipping() {
    let parser = MarkdownParser::new(ParseOptions {
        skip_front_matter: false,
        ..ParseOptions::default()
    });
    let doc = parser.parse_str("---\r\nschema: 2.0.0\r\n---\r\n");
    // The closing delimiter now reads as a setext underline.
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph {
                spans: vec![text("---")]
            },
            Block::Heading {
                level: 2,
                text: "schema: 2.0.0".into()
            },
        ]
    );
}

#[test]
fn paragraph_gap_is_configurable() {
    let parser = MarkdownParser::new(ParseOptions {
        paragraph_gap: "\n".into(),
        ..ParseOptions::default()
    });
    let doc = parser.parse_str("a\n\nb\n");
    assert_eq!(first_spans(&doc), &[text("a\nb")]);
}

#[test]
fn parse_with_front_matter_returns_both() {
    let parsed = MarkdownParser::default().parse_with_front_matter(
        "---\nexternal help file: Thing-help.xml\n---\n## SYNOPSIS\nDoes a thing.\n",
    );
    assert_eq!(parsed.front_matter["external help file"], "Thing-help.xml");
    assert_eq!(parsed.document.len(), 2);
}

#[test]
fn invalid_utf8_is_rejected_with_chunk_index() {
    let chunks: [&[u8]; 2] = [b"# ok\n", &[0x66, 0xff, 0x6f]];
    match parse_bytes(chunks) {
        Err(crate::ParseError::InvalidUtf8 { chunk, .. }) => assert_eq!(chunk, 1),
        other => panic!("expected InvalidUtf8, got {other:?}"),
    }
}

#[test]
fn valid_bytes_parse_like_text() {
    let doc = parse_bytes([b"# Title\r\n".as_slice(), b"Hello *world*".as_slice()]).unwrap();
    assert_eq!(doc, parse("# Title\r\nHello *world*"));
}

#[test]
fn character_split_across_byte_chunks() {
    let bytes = "Café\n".as_bytes();
    // `é` is two bytes; cut between them.
    let doc = parse_bytes([&bytes[..4], &bytes[4..]]).unwrap();
    assert_eq!(doc, parse("Café\n"));
}

#[test]
fn invalid_byte_in_later_chunk_is_reported_there() {
    let chunks: [&[u8]; 3] = [b"# ok\n", b"fine ", &[0xC3, 0x28]];
    match parse_bytes(chunks) {
        Err(crate::ParseError::InvalidUtf8 { chunk, source }) => {
            assert_eq!(chunk, 2);
            assert_eq!(source.error_len(), Some(1));
        }
        other => panic!("expected InvalidUtf8, got {other:?}"),
    }
}

#[test]
fn truncated_character_at_end_is_rejected() {
    let bytes = "Café".as_bytes();
    match parse_bytes([&bytes[..4]]) {
        Err(crate::ParseError::InvalidUtf8 { chunk, source }) => {
            assert_eq!(chunk, 0);
            assert_eq!(source.error_len(), None);
        }
        other => panic!("expected InvalidUtf8, got {other:?}"),
    }
}

#[test]
fn closing_hash_run_is_dropped_from_heading() {
    assert_eq!(
        parsed("## Title##\n").blocks,
        vec![Block::Heading {
            level: 2,
            text: "Title".into()
        }]
    );
}

#[test]
fn hash_run_without_text_is_paragraph() {
    assert_eq!(
        parsed("#   \n").blocks,
        vec![Block::Paragraph {
            spans: vec![text("#")]
        }]
    );
}
