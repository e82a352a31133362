use crate::error::{MarkupError, Result};

/// A generic HTML tree element.
///
/// # Invariants
///
/// - A renderable node has either a `value` (leaf) or at least one child
///   (container), never both
/// - A container always has a tag
/// - Children are owned exclusively and rendered in order
/// - Attributes render in insertion order and names are unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    tag: Option<String>,
    value: Option<String>,
    children: Vec<Node>,
    attributes: Vec<(String, String)>,
}

impl Node {
    /// Creates a node from raw parts without checking the invariants.
    ///
    /// Invalid combinations are reported by [`Node::render`].
    pub fn new(tag: Option<String>, value: Option<String>, children: Vec<Node>) -> Self {
        Self {
            tag,
            value,
            children,
            attributes: Vec::new(),
        }
    }

    /// Creates an untagged leaf that renders as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, Some(value.into()), Vec::new())
    }

    /// Creates a tagged leaf: `<tag>value</tag>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Some(tag.into()), Some(value.into()), Vec::new())
    }

    /// Creates a container: `<tag>children...</tag>`.
    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(Some(tag.into()), None, children)
    }

    /// Sets an attribute. A new name is appended; an existing one keeps its
    /// position and takes the new value.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, old)) => *old = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Serializes attributes as ` name="value"` pairs.
    ///
    /// Each pair gets one leading space; an empty attribute set yields `""`.
    pub fn attributes_to_html(&self) -> String {
        let mut out = String::new();
        self.write_attributes(&mut out);
        out
    }

    /// Renders this node and its subtree to HTML.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        if !self.children.is_empty() {
            if self.value.is_some() {
                return Err(MarkupError::UnrenderableNode(
                    "node has both a value and children",
                ));
            }
            let Some(tag) = self.tag.as_deref() else {
                return Err(MarkupError::UnrenderableNode("container node has no tag"));
            };
            self.write_open(out, tag);
            for child in &self.children {
                child.render_into(out)?;
            }
            write_close(out, tag);
            return Ok(());
        }

        let Some(value) = self.value.as_deref() else {
            return Err(MarkupError::UnrenderableNode(
                "node has neither a value nor children",
            ));
        };
        match self.tag.as_deref() {
            None => out.push_str(value),
            Some(tag) => {
                self.write_open(out, tag);
                out.push_str(value);
                write_close(out, tag);
            }
        }
        Ok(())
    }

    fn write_open(&self, out: &mut String, tag: &str) {
        out.push('<');
        out.push_str(tag);
        self.write_attributes(out);
        out.push('>');
    }

    fn write_attributes(&self, out: &mut String) {
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

fn write_close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
