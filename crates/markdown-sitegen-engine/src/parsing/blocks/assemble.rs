use crate::{
    error::{MarkupError, Result},
    html::Node,
    parsing::{first_line, inline::text_to_spans},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockType,
};

/// Converts one classified block into its HTML subtree.
///
/// # Errors
/// Propagates [`MarkupError::UnbalancedDelimiter`] from inline tokenization.
/// [`MarkupError::UnknownBlockType`] when `block` has no heading marker but
/// is passed as [`BlockType::Heading`].
pub fn block_to_node(block: &str, block_type: BlockType) -> Result<Node> {
    match block_type {
        BlockType::Heading => heading_to_node(block),
        BlockType::Code => Ok(code_to_node(block)),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => list_to_node(block, "ul", UnorderedList::strip_marker),
        BlockType::OrderedList => list_to_node(block, "ol", OrderedList::strip_marker),
        BlockType::Paragraph => paragraph_to_node(block),
    }
}

/// Tokenizes inline text and maps each span to a leaf node.
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    Ok(text_to_spans(text)?.into_iter().map(Node::from).collect())
}

fn heading_to_node(block: &str) -> Result<Node> {
    let Some(level) = Heading::level(block) else {
        return Err(MarkupError::UnknownBlockType(format!(
            "{} without a marker: {}",
            BlockType::Heading,
            first_line(block)
        )));
    };
    let text = Heading::strip_markers(block, level);
    Ok(Node::parent(format!("h{level}"), text_to_children(text)?))
}

fn code_to_node(block: &str) -> Node {
    let code = Node::parent("code", vec![Node::text(CodeFence::inner(block))]);
    Node::parent("pre", vec![code])
}

fn quote_to_node(block: &str) -> Result<Node> {
    let text = block
        .split('\n')
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Node::parent("blockquote", text_to_children(&text)?))
}

fn list_to_node(block: &str, tag: &str, strip_marker: fn(&str) -> &str) -> Result<Node> {
    let items = block
        .split('\n')
        .map(|line| -> Result<Node> {
            Ok(Node::parent("li", text_to_children(strip_marker(line))?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent(tag, items))
}

fn paragraph_to_node(block: &str) -> Result<Node> {
    Ok(Node::parent(
        "p",
        text_to_children(&Paragraph::join_lines(block))?,
    ))
}
