//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `DELIM = '*'`, `STRONG = **`
//! - **`Hyperlink`**: `[text](uri)` brackets and parentheses
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `*` or `[`.

pub mod emphasis;
pub mod hyperlink;

pub use emphasis::Emphasis;
pub use hyperlink::Hyperlink;
