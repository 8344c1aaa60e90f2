pub mod code_fence;
pub mod heading;
pub mod paragraph;

pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use paragraph::{Paragraph, ParagraphLine};
