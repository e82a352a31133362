pub mod error;
pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{MarkupError, Result};
pub use html::Node;
pub use parsing::{
    blocks::{BlockType, block_to_node, classify, split_blocks},
    extract_title,
    inline::{Span, SpanKind, text_to_spans},
    markdown_to_html, markdown_to_node,
};
