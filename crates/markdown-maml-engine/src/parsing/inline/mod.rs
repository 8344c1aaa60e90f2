//! # Inline Parsing
//!
//! Cursor-based span parsing over paragraph text.
//!
//! ## Architecture
//!
//! Inline parsing runs once per paragraph, after block parsing has decided
//! which lines belong to it. It has two steps:
//!
//! 1. **Tokenize** (`escape`): each line is run through the backslash-escape
//!    rules, then lines are joined with soft breaks (a space), hard breaks or
//!    the preserved blank-run gap
//! 2. **Parse** (`parser`): a `Cursor` walks the tokens and recognises strong,
//!    emphasis and hyperlink spans; everything else is text
//!
//! ## Modules
//!
//! - **`types`**: `Token` (delimiter-capable char, literal char, hard break)
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, Hyperlink)
//! - **`escape`**: Backslash-run escaping and paragraph tokenization
//! - **`cursor`**: `Cursor` for token-by-token parsing
//! - **`parser`**: `parse_paragraph()` main entry point with `try_parse_*` helpers
//!
//! ## Escapes
//!
//! Escaped characters become literal tokens, so `\[x](y)` or `\*x\*` never
//! form a span.

pub mod cursor;
pub mod escape;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_paragraph, parse_tokens};
pub use types::Token;
