/// Strong emphasis, rendered as `<b>`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Emphasis, rendered as `<i>`.
///
/// Uses `_` rather than `*` so it never collides with [`Bold::DELIMITER`].
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "_";
}
