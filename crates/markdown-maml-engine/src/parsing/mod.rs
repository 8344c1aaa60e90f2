pub mod blocks;
pub mod front_matter;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use xi_rope::Rope;

use crate::{
    error::ParseError,
    models::{Document, FrontMatter},
};
use blocks::{BlockBuilder, MarkdownLineClassifier};
use rope::{join_chunks, lines_of};

pub use front_matter::{extract_front_matter, read_front_matter};

/// Knobs for a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Skip a leading `---` front-matter block instead of parsing it as
    /// markdown.
    pub skip_front_matter: bool,
    /// Text kept inside a paragraph where blank lines separated two runs of
    /// prose.
    pub paragraph_gap: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_front_matter: true,
            paragraph_gap: "\r\n".to_string(),
        }
    }
}

/// A document together with its front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMarkdown {
    pub front_matter: FrontMatter,
    pub document: Document,
}

/// Parser with fixed options. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    options: ParseOptions,
}

impl MarkdownParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse_str(&self, text: &str) -> Document {
        parse_document(&Rope::from(text), &self.options)
    }

    /// Parses chunks as one document. Chunks are joined verbatim, so a line
    /// may be split across them.
    pub fn parse_chunks<I, S>(&self, chunks: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_document(&join_chunks(chunks), &self.options)
    }

    /// Parses byte chunks, rejecting the input before any parsing if it is
    /// not UTF-8.
    ///
    /// Chunks are joined before validation, so a character split across a
    /// boundary is accepted. The reported chunk is the one holding the first
    /// bad byte.
    pub fn parse_bytes<I, B>(&self, chunks: I) -> Result<Document, ParseError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut bytes = Vec::new();
        let mut chunk_ends = Vec::new();
        for chunk in chunks {
            bytes.extend_from_slice(chunk.as_ref());
            chunk_ends.push(bytes.len());
        }

        let text = std::str::from_utf8(&bytes).map_err(|source| {
            let offset = source.valid_up_to();
            let chunk = chunk_ends
                .iter()
                .position(|&end| offset < end)
                .unwrap_or(chunk_ends.len().saturating_sub(1));
            ParseError::InvalidUtf8 { chunk, source }
        })?;
        Ok(self.parse_str(text))
    }

    /// Extracts the front matter and parses the document in one call.
    pub fn parse_with_front_matter(&self, text: &str) -> ParsedMarkdown {
        ParsedMarkdown {
            front_matter: extract_front_matter(text),
            document: self.parse_str(text),
        }
    }
}

/// Parses `text` with default options.
pub fn parse(text: &str) -> Document {
    MarkdownParser::default().parse_str(text)
}

/// Parses an ordered sequence of chunks as one document, with default
/// options.
pub fn parse_chunks<I, S>(chunks: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    MarkdownParser::default().parse_chunks(chunks)
}

/// Parses byte chunks with default options.
pub fn parse_bytes<I, B>(chunks: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    MarkdownParser::default().parse_bytes(chunks)
}

/// Parses the text held in `rope`.
///
/// A single forward pass: lines are classified and fed to the block
/// builder as they are read.
pub fn parse_document(rope: &Rope, options: &ParseOptions) -> Document {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(options);
    let mut lines = lines_of(rope).peekable();

    if options.skip_front_matter
        && let Some(front_matter) = read_front_matter(&mut lines)
    {
        if front_matter.closed {
            log::debug!("skipped front matter with {} keys", front_matter.entries.len());
        } else {
            log::warn!("front matter is never closed; the rest of the input is metadata");
        }
    }

    let mut line_count = 0usize;
    for lr in lines {
        line_count += 1;
        builder.push(classifier.classify(lr));
    }

    let blocks = builder.finish();
    log::debug!(
        "parsed {} blocks from {line_count} lines ({} bytes)",
        blocks.len(),
        rope.len()
    );
    Document::new(blocks)
}
