use crate::html::Node;

/// Discriminant of a [`Span`], for callers that only care which kind it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One inline unit of a block's text.
///
/// Only links and images carry a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Text outside any construct.
    Text(String),
    /// Text between `**` pairs.
    Bold(String),
    /// Text between `_` pairs.
    Italic(String),
    /// Text between backticks. Never re-parsed.
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](src)`
    Image { alt: String, src: String },
}

impl Span {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::Bold(content.into())
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::Italic(content.into())
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::Code(content.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self::Image {
            alt: alt.into(),
            src: src.into(),
        }
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            Self::Text(_) => SpanKind::Text,
            Self::Bold(_) => SpanKind::Bold,
            Self::Italic(_) => SpanKind::Italic,
            Self::Code(_) => SpanKind::Code,
            Self::Link { .. } => SpanKind::Link,
            Self::Image { .. } => SpanKind::Image,
        }
    }

    /// Display text; the alt text for images.
    pub fn content(&self) -> &str {
        match self {
            Self::Text(s) | Self::Bold(s) | Self::Italic(s) | Self::Code(s) => s,
            Self::Link { text, .. } => text,
            Self::Image { alt, .. } => alt,
        }
    }

    /// The URL of a link or image.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } => Some(url),
            Self::Image { src, .. } => Some(src),
            _ => None,
        }
    }

    /// Only text spans are examined by the splitting passes.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<Span> for Node {
    fn from(span: Span) -> Self {
        match span {
            Span::Text(text) => Node::text(text),
            Span::Bold(text) => Node::leaf("b", text),
            Span::Italic(text) => Node::leaf("i", text),
            Span::Code(text) => Node::leaf("code", text),
            Span::Link { text, url } => Node::leaf("a", text).with_attribute("href", url),
            Span::Image { alt, src } => Node::leaf("img", "")
                .with_attribute("src", src)
                .with_attribute("alt", alt),
        }
    }
}
