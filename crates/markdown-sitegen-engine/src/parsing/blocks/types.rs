use std::{fmt, str::FromStr};

use crate::error::MarkupError;

/// The structural kind of a block. Every block maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// The fallback when no other rule matches.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading,
    /// Opens and closes with a triple-backtick fence.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Every line starts with `<digit>.`.
    OrderedList,
}

impl BlockType {
    pub const ALL: [BlockType; 6] = [
        BlockType::Paragraph,
        BlockType::Heading,
        BlockType::Code,
        BlockType::Quote,
        BlockType::UnorderedList,
        BlockType::OrderedList,
    ];

    /// Stable lowercase name, as accepted by [`BlockType::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MarkupError::UnknownBlockType(s.to_string()))
    }
}
