//! # Block Parsing
//!
//! Segment, classify, assemble.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`split`): the document is cut into blocks at blank
//!    lines, each trimmed
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`
//! 3. **Assembly** (`assemble`): each block becomes an HTML `Node` subtree,
//!    running the inline tokenizer on any leaf text
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_blocks` segmentation
//! - **`classify`**: ordered first-match classification rules
//! - **`assemble`**: exhaustive `BlockType` to `Node` dispatch
//!
//! ## Key Invariants
//!
//! - Block order in the document is preserved
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - There is no nesting: a quote or list item never contains blocks

pub mod assemble;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use assemble::{block_to_node, text_to_children};
pub use classify::classify;
pub use split::split_blocks;
pub use types::BlockType;
