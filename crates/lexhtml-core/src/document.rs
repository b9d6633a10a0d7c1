//! Lexical document tree
//!
//! This module defines the typed nodes of an editor document. The tree is
//! built from JSON by `convert` and only ever read by the renderer.

use crate::format::TextFormat;

/// A decoded editor document.
///
/// `root` is always a [`Node::Root`] when produced by
/// [`parse_document`](crate::parse_document).
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    pub root: Node,
}

impl DocumentState {
    /// Create a document from the root's block children
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            root: Node::Root(children),
        }
    }

    /// Block children of the root
    pub fn blocks(&self) -> &[Node] {
        match &self.root {
            Node::Root(children) => children,
            _ => &[],
        }
    }
}

/// Block alignment stored in an element's `format` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
    Start,
    End,
}

impl Alignment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            "justify" => Some(Alignment::Justify),
            "start" => Some(Alignment::Start),
            "end" => Some(Alignment::End),
            _ => None,
        }
    }

    /// CSS `text-align` value
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
            Alignment::Start => "start",
            Alignment::End => "end",
        }
    }
}

/// A node of the editor document, discriminated by kind
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Document root containing block nodes
    Root(Vec<Node>),

    /// Paragraph containing inline nodes
    Paragraph {
        align: Option<Alignment>,
        children: Vec<Node>,
    },

    /// Heading with level (1-6) and inline content
    Heading {
        level: u8,
        align: Option<Alignment>,
        children: Vec<Node>,
    },

    /// Block quote containing inline or block nodes
    Quote {
        align: Option<Alignment>,
        children: Vec<Node>,
    },

    /// List (ordered or unordered); items are `ListItem` nodes
    List {
        ordered: bool,
        start: u32,
        items: Vec<Node>,
    },

    /// List item holding inline nodes and/or nested lists
    ListItem(Vec<Node>),

    /// Code block; formatting of the source runs is dropped
    Code {
        language: Option<String>,
        code: String,
    },

    /// Thematic break
    HorizontalRule,

    /// Table whose children are `TableRow` nodes
    Table(Vec<Node>),

    /// Table row; `is_header` is `None` when the editor stored no flag
    TableRow {
        is_header: Option<bool>,
        cells: Vec<Node>,
    },

    /// Table cell; `header` is set when the cell itself is a header cell
    TableCell {
        header: bool,
        children: Vec<Node>,
    },

    Image {
        src: String,
        alt_text: String,
        width: Option<f64>,
        height: Option<f64>,
        max_width: Option<f64>,
    },

    Link {
        url: String,
        target: Option<String>,
        rel: Option<String>,
        title: Option<String>,
        children: Vec<Node>,
    },

    /// Hard line break
    LineBreak,

    /// Tab character
    Tab,

    /// Text run, the only node carrying literal content
    Text { text: String, format: TextFormat },

    /// A kind this renderer does not know; renders nothing
    Unknown { kind: String },
}

impl Node {
    /// Plain text node
    pub fn text(text: &str) -> Self {
        Node::Text {
            text: text.to_string(),
            format: TextFormat::NONE,
        }
    }

    /// Formatted text node
    pub fn formatted(text: &str, format: TextFormat) -> Self {
        Node::Text {
            text: text.to_string(),
            format,
        }
    }

    /// Paragraph with no alignment
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph {
            align: None,
            children,
        }
    }

    /// The kind name as it appears in the serialized document
    pub fn kind(&self) -> &str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::Quote { .. } => "quote",
            Node::List { .. } => "list",
            Node::ListItem(_) => "listitem",
            Node::Code { .. } => "code",
            Node::HorizontalRule => "horizontalrule",
            Node::Table(_) => "table",
            Node::TableRow { .. } => "tablerow",
            Node::TableCell { .. } => "tablecell",
            Node::Image { .. } => "image",
            Node::Link { .. } => "link",
            Node::LineBreak => "linebreak",
            Node::Tab => "tab",
            Node::Text { .. } => "text",
            Node::Unknown { kind } => kind,
        }
    }

    /// Child nodes, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children)
            | Node::Paragraph { children, .. }
            | Node::Heading { children, .. }
            | Node::Quote { children, .. }
            | Node::ListItem(children)
            | Node::Table(children)
            | Node::TableCell { children, .. }
            | Node::Link { children, .. } => children,
            Node::List { items, .. } => items,
            Node::TableRow { cells, .. } => cells,
            Node::Code { .. }
            | Node::HorizontalRule
            | Node::Image { .. }
            | Node::LineBreak
            | Node::Tab
            | Node::Text { .. }
            | Node::Unknown { .. } => &[],
        }
    }

    /// Concatenated literal text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { text, .. } => text.clone(),
            Node::Code { code, .. } => code.clone(),
            Node::LineBreak => "\n".to_string(),
            Node::Tab => "\t".to_string(),
            _ => self
                .children()
                .iter()
                .map(|child| child.text_content())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Node::HorizontalRule.kind(), "horizontalrule");
        assert_eq!(Node::ListItem(vec![]).kind(), "listitem");
        let unknown = Node::Unknown {
            kind: "poll".to_string(),
        };
        assert_eq!(unknown.kind(), "poll");
    }

    #[test]
    fn test_text_content() {
        let node = Node::paragraph(vec![
            Node::text("Hello"),
            Node::LineBreak,
            Node::formatted("World", TextFormat::BOLD),
        ]);
        assert_eq!(node.text_content(), "Hello\nWorld");
    }

    #[test]
    fn test_document_blocks() {
        let doc = DocumentState::new(vec![Node::HorizontalRule]);
        assert_eq!(doc.blocks(), &[Node::HorizontalRule]);
    }

    #[test]
    fn test_alignment_names() {
        assert_eq!(Alignment::from_name("center"), Some(Alignment::Center));
        assert_eq!(Alignment::from_name(""), None);
        assert_eq!(Alignment::Justify.as_css(), "justify");
    }
}
