//! # Block Parsing
//!
//! Two-phase block parsing over a forward-only line stream.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only (blank, heading marker, code fence, underline, prose)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` state machine
//!    (idle / paragraph / code block) turns the classified lines into `Block`s
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for lines that open a block by themselves
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks are emitted in source order
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A blank run inside prose is kept only when prose follows it
//! - Lookahead never goes further than the blank run after a paragraph line

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use open::BlockOpen;
