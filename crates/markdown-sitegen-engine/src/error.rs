use thiserror::Error;

/// Failures raised while converting a document into an HTML node tree.
///
/// The conversion is a pure function of its input, so none of these are
/// transient: each one points at malformed input or a bug in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("unbalanced `{delimiter}` delimiter in: {text}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("cannot render node: {0}")]
    UnrenderableNode(&'static str),

    #[error("unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("no level 1 heading found to use as the page title")]
    NoTitle,
}

pub type Result<T, E = MarkupError> = std::result::Result<T, E>;
