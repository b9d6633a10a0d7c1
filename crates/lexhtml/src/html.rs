//! HTML parsing support.
//!
//! Parses an HTML fragment into the [`Node`] tree used by the
//! enhancement pass.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::enhance::{enhance, EnhanceOptions};
use crate::node::Node;

/// Parse an HTML fragment into a document fragment node.
///
/// Attributes are ordered by name, so the tree does not depend on the
/// parser's attribute storage order. Comments are dropped.
///
/// # Example
///
/// ```rust
/// use lexhtml::parse_html;
///
/// let fragment = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(fragment.inner_html(), "<h1>Hello <em>World</em></h1>");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    let mut fragment = Node::document_fragment();
    append_children(&mut fragment, document.root_element());
    fragment
}

/// Parse markup, run the enhancement pass and serialize it again
pub fn enhance_html(html: &str, options: &EnhanceOptions) -> String {
    let mut fragment = parse_html(html);
    enhance(&mut fragment, options);
    fragment.inner_html()
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let mut attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    attrs.sort_by(|a, b| a.0.cmp(b.0));

    let mut node = Node::element_with_attrs(element.value().name(), attrs);
    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_html() {
        let fragment = parse_html("<p>Hello World</p>");
        assert_eq!(fragment.children.len(), 1);
        assert!(fragment.children[0].is_tag("p"));
        assert_eq!(fragment.text_content(), "Hello World");
    }

    #[test]
    fn test_entities_round_trip() {
        let fragment = parse_html("<p>Hi &amp; Bye &lt;3</p>");
        assert_eq!(fragment.text_content(), "Hi & Bye <3");
        assert_eq!(fragment.inner_html(), "<p>Hi &amp; Bye &lt;3</p>");
    }

    #[test]
    fn test_attributes_sorted() {
        let fragment = parse_html(r#"<img src="/a.png" alt="x" class="lexical-image" />"#);
        assert_eq!(
            fragment.inner_html(),
            r#"<img alt="x" class="lexical-image" src="/a.png">"#
        );
    }

    #[test]
    fn test_comments_dropped() {
        let fragment = parse_html("<p>a<!-- note -->b</p>");
        assert_eq!(fragment.inner_html(), "<p>ab</p>");
    }

    #[test]
    fn test_table_structure_preserved() {
        let html = "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>";
        assert_eq!(parse_html(html).inner_html(), html);
    }
}
