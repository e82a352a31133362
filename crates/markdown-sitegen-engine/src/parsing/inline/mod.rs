//! # Inline Parsing
//!
//! Turns the text of a paragraph, heading, quote or list item into typed
//! [`Span`]s.
//!
//! ## Architecture
//!
//! The tokenizer is a pipeline of passes over a span sequence that starts as
//! one `Text` span holding the whole string:
//!
//! 1. Delimiter splits for bold (`**`), italic (`_`) and code (`` ` ``)
//! 2. Image extraction (`![alt](src)`)
//! 3. Link extraction (`[label](target)`)
//!
//! Every pass only re-examines `Text` spans; typed spans are never re-entered,
//! so there is no nesting.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`, plus the `Span` to `Node` mapping
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte reference scanning
//! - **`parser`**: `text_to_spans()` main entry point and the individual passes

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{
    extract_images, extract_links, split_delimiter, split_images, split_links, text_to_spans,
};
pub use types::{Span, SpanKind};
