/// Failures the parser reports to its caller.
///
/// Malformed markdown is never an error: unknown or incomplete constructs
/// degrade to plain text. Only input that cannot be read as text at all is
/// rejected, before any parsing starts.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Input chunk {chunk} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        chunk: usize,
        source: std::str::Utf8Error,
    },
}
