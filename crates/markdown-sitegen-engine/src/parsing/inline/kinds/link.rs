/// `[label](target)`
pub struct Link;

impl Link {
    pub const OPEN: &'static [u8] = b"[";
    /// Ends the label; must be followed directly by [`Link::TARGET_OPEN`].
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: &'static [u8] = b"](";
    pub const TARGET_CLOSE: u8 = b')';
}

/// `![alt](src)`, the link shape with a leading `!`.
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8] = b"![";
}
