/// Fenced code block delimited by triple backticks.
///
/// The whole block is the fence: it must both open and close with
/// [`CodeFence::FENCE`]. Content is a raw zone, so no inline parsing
/// happens inside.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Returns true if the block starts and ends with a fence.
    ///
    /// A block consisting of a single fence satisfies both ends.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Returns the raw content between the fences.
    ///
    /// Strips exactly one opening fence plus the newline right after it,
    /// then exactly one closing fence. The newline before the closing
    /// fence is kept.
    pub fn inner(block: &str) -> &str {
        let body = block.strip_prefix(Self::FENCE).unwrap_or(block);
        let body = body.strip_prefix('\n').unwrap_or(body);
        body.strip_suffix(Self::FENCE).unwrap_or(body)
    }
}
