use crate::error::{MarkupError, Result};

use super::blocks::{BlockType, classify, kinds::Heading, split_blocks};

/// Returns the text of the first level 1 heading in the document.
///
/// Lower-level headings before it are skipped.
///
/// # Errors
/// [`MarkupError::NoTitle`] when the document has no level 1 heading.
pub fn extract_title(document: &str) -> Result<String> {
    split_blocks(document)
        .into_iter()
        .find(|block| classify(block) == BlockType::Heading && Heading::level(block) == Some(1))
        .map(|block| block.trim_start_matches(Heading::MARKER).trim().to_string())
        .ok_or(MarkupError::NoTitle)
}
