//! # HTML Node Tree
//!
//! The structural output of block assembly. A [`Node`] is either a leaf
//! carrying a value or a container owning an ordered list of children;
//! rendering walks the tree once and emits markup verbatim.
//!
//! ## Rendering Rules
//!
//! - Leaf without a tag: the value as-is (plain inline text)
//! - Leaf with a tag: `<tag attrs>value</tag>`
//! - Container: `<tag attrs>` + rendered children + `</tag>`
//! - Anything else fails with [`MarkupError::UnrenderableNode`]
//!
//! No escaping is performed on values, tag names or attribute values.
//!
//! [`MarkupError::UnrenderableNode`]: crate::MarkupError::UnrenderableNode

pub mod node;

pub use node::Node;
