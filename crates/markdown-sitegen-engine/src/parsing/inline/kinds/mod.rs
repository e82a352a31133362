//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters, so the tokenizer
//! never hardcodes `**` or `](`.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "_"`
//! - **`CodeSpan`**: ``DELIMITER = "`"``
//! - **`Image`**: `OPEN = b"!["`
//! - **`Link`**: `OPEN = b"["`, shared label/target delimiters

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};
