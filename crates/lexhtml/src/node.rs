//! DOM node structure for post-processing rendered markup.
//!
//! A small owned tree that the HTML parser produces and the enhancement
//! pass mutates in place before the markup is written back out.

use indexmap::IndexMap;

use crate::utilities::{escape_attribute, escape_text, is_void};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// A DOM node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node type (1 = Element, 3 = Text, 11 = Fragment)
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text` or `#document-fragment` otherwise
    pub node_name: String,

    /// Text content for text nodes
    pub node_value: Option<String>,

    /// Attributes in insertion order
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_lowercase(),
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a document fragment node
    pub fn document_fragment() -> Self {
        Self {
            node_type: NodeType::DocumentFragment,
            node_name: "#document-fragment".to_string(),
            node_value: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Tag name for elements, node name otherwise
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Check whether this is an element with the given tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.is_element() && self.node_name.eq_ignore_ascii_case(tag)
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_lowercase(), value.to_string());
    }

    /// Order attributes by name, so output does not depend on mutation order
    pub fn sort_attributes(&mut self) {
        self.attributes.sort_keys();
    }

    /// Whitespace-separated class tokens
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add a class token if not already present
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let classes = match self.attr("class").map(str::trim) {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attr("class", &classes);
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.children.iter_mut()
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            _ => self.children().map(|child| child.text_content()).collect(),
        }
    }

    /// Serialize this node as HTML
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize this node's children as HTML
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        match self.node_type {
            NodeType::Text => {
                out.push_str(&escape_text(self.node_value.as_deref().unwrap_or_default()))
            }
            NodeType::Element => {
                out.push('<');
                out.push_str(&self.node_name);
                for (name, value) in &self.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attribute(value));
                    out.push('"');
                }
                out.push('>');

                if is_void(&self.node_name) {
                    return;
                }

                for child in self.children() {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&self.node_name);
                out.push('>');
            }
            NodeType::DocumentFragment => {
                for child in self.children() {
                    child.write_html(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert!(node.is_tag("div"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let mut node = Node::element_with_attrs("a", vec![("href", "/x"), ("title", "X")]);
        assert_eq!(node.attr("href"), Some("/x"));
        assert_eq!(node.attr("HREF"), Some("/x"));
        assert_eq!(node.attr("class"), None);

        node.set_attr("href", "/y");
        assert_eq!(node.outer_html(), "<a href=\"/y\" title=\"X\"></a>");
    }

    #[test]
    fn test_sort_attributes() {
        let mut node = Node::element_with_attrs("img", vec![("src", "a.png"), ("alt", "")]);
        node.sort_attributes();
        assert_eq!(node.outer_html(), "<img alt=\"\" src=\"a.png\">");
    }

    #[test]
    fn test_classes() {
        let mut node = Node::element_with_attrs("img", vec![("class", " lexical-image  big ")]);
        assert!(node.has_class("lexical-image"));
        assert!(node.has_class("big"));
        assert!(!node.has_class("lexical"));

        node.add_class("big");
        node.add_class("ready");
        assert_eq!(node.attr("class"), Some("lexical-image  big ready"));
    }

    #[test]
    fn test_text_is_escaped_on_output() {
        let mut p = Node::element("p");
        p.add_child(Node::text("a < b & c"));
        assert_eq!(p.outer_html(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_fragment_html() {
        let mut fragment = Node::document_fragment();
        fragment.add_child(Node::element("hr"));
        fragment.add_child(Node::text("x"));
        assert_eq!(fragment.outer_html(), "<hr>x");
        assert_eq!(fragment.inner_html(), "<hr>x");
    }
}
