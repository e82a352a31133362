/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or assembler code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns true if the line opens with the quote prefix.
    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips every leading `>` and then surrounding whitespace.
    ///
    /// `>> nested` flattens to `nested`; nesting is not modelled.
    pub fn strip_prefix(line: &str) -> &str {
        line.trim_start_matches(Self::PREFIX).trim()
    }
}
