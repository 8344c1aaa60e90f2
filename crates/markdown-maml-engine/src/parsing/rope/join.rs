use xi_rope::Rope;

/// Concatenates input chunks into a single rope.
///
/// Chunks are joined verbatim. A line split across a boundary reads as one
/// line, and a chunk that does not end in a line break runs on into the
/// next one.
pub fn join_chunks<I, S>(chunks: I) -> Rope
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rope = Rope::from("");
    for chunk in chunks {
        let chunk = chunk.as_ref();
        if chunk.is_empty() {
            continue;
        }
        let end = rope.len();
        rope.edit(end..end, chunk);
    }
    rope
}
