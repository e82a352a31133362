use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns the heading level if the block opens with a heading marker.
    pub fn level(block: &str) -> Option<usize> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let heading_regex =
            HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6}) ").expect("Invalid heading regex"));

        heading_regex
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|markers| markers.len())
    }

    /// Strips the `level` markers and exactly one following space.
    pub fn strip_markers(block: &str, level: usize) -> &str {
        block.get(level + 1..).unwrap_or_default()
    }
}
