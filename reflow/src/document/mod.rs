use std::fmt;

/// A reflowed document: the ordered Markdown nodes produced from raw prose.
///
/// Rendering joins nodes with a blank line, so `to_string()` is exactly the
/// text returned by [`format_body`](crate::format_body).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub nodes: Vec<DocumentNode>,
}

impl Document {
    pub fn empty() -> Self {
        Document { nodes: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Labels of all headings, in order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::Heading { text, .. } => Some(text.as_str()),
            DocumentNode::Paragraph(_) => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::Paragraph(text) => Some(text.as_str()),
            DocumentNode::Heading { .. } => None,
        })
    }
}

/// A single top-level Markdown node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// An ATX heading promoted from a `Label:` prefix.
    Heading { level: u8, text: String },
    /// Paragraph text, emitted verbatim. May contain single newlines and any
    /// Markdown the author wrote, including their own `#` headings.
    Paragraph(String),
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

impl fmt::Display for DocumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentNode::Heading { level, text } => {
                for _ in 0..*level {
                    write!(f, "#")?;
                }
                write!(f, " {}", text)
            }
            DocumentNode::Paragraph(text) => write!(f, "{}", text),
        }
    }
}
