pub mod join;
pub mod lines;

pub use join::join_chunks;
pub use lines::{LineRef, lines_of};
