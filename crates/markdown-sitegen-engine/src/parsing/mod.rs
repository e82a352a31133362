//! # Document Parsing
//!
//! Entry points that drive block segmentation, classification and assembly
//! over a whole document.

pub mod blocks;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use crate::{error::Result, html::Node};

use blocks::{block_to_node, classify, split_blocks};

pub use title::extract_title;

/// Converts a document into one `div` container holding a node per block.
///
/// # Errors
/// Fails fast on the first block that cannot be converted; no partial tree
/// is returned.
pub fn markdown_to_node(document: &str) -> Result<Node> {
    let children = split_blocks(document)
        .into_iter()
        .map(|block| {
            let block_type = classify(block);
            log::trace!("classified {block_type} block: {:?}", first_line(block));
            block_to_node(block, block_type)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("div", children))
}

/// Converts and renders a document in one step.
pub fn markdown_to_html(document: &str) -> Result<String> {
    markdown_to_node(document)?.render()
}

/// First line of a block, for diagnostics.
pub fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}
