/// Code span inline type with owned delimiter constant.
///
/// Split after emphasis, so emphasis markers inside a code span are
/// already consumed by the time this delimiter is looked at.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const DELIMITER: &'static str = "`";
}
