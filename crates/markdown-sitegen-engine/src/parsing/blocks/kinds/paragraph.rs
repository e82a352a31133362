/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are the fallback when no other
/// classification rule matches. Inline parsing is applied to the joined text.
pub struct Paragraph;

impl Paragraph {
    /// Joins the block's lines with single spaces.
    pub fn join_lines(block: &str) -> String {
        block.split('\n').collect::<Vec<_>>().join(" ")
    }
}
