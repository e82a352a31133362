use std::sync::OnceLock;

use regex::Regex;

/// Unordered list item: `- item`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item_line(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Strips the leading `- ` marker.
    pub fn strip_marker(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// Ordered list item: a single digit and a dot, `1. item`.
///
/// Only single-digit numbering is recognized: `10. item` does not match,
/// and the marker is always taken to be exactly three characters wide.
pub struct OrderedList;

impl OrderedList {
    /// Width of `<digit>. ` in characters.
    pub const MARKER_WIDTH: usize = 3;

    pub fn is_item_line(line: &str) -> bool {
        static ORDERED_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        let item_regex = ORDERED_ITEM_REGEX
            .get_or_init(|| Regex::new(r"^\d\.").expect("Invalid ordered list regex"));
        item_regex.is_match(line)
    }

    /// Drops the first [`OrderedList::MARKER_WIDTH`] characters.
    pub fn strip_marker(line: &str) -> &str {
        line.char_indices()
            .nth(Self::MARKER_WIDTH)
            .map_or("", |(idx, _)| &line[idx..])
    }
}
