//! Serializer - the main entry point for document to HTML conversion.

use serde_json::Value;

use crate::document::{DocumentState, Node};
use crate::options::RenderOptions;
use crate::render::render_node;
use crate::serialize::{serialize, serialize_document, serialize_value, Serialized};

/// Document serializer holding its render options.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: RenderOptions,
}

impl Serializer {
    /// Create a Serializer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Serializer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Serialize a JSON document string
    pub fn serialize(&self, json: &str) -> Serialized {
        serialize(json, &self.options)
    }

    /// Serialize a parsed JSON value
    pub fn serialize_value(&self, value: &Value) -> Serialized {
        serialize_value(value, &self.options)
    }

    /// Serialize a decoded document
    pub fn serialize_document(&self, document: &DocumentState) -> Serialized {
        serialize_document(document, &self.options)
    }

    /// Render a single node
    pub fn render_node(&self, node: &Node) -> String {
        render_node(node, &self.options)
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextFormat;

    #[test]
    fn test_serialize() {
        let serializer = Serializer::new();
        let result = serializer.serialize(
            r#"{"root":{"children":[{"kind":"paragraph","children":[{"kind":"text","text":"Hello","format":0}]}]}}"#,
        );
        assert_eq!(result.html, "<p>Hello</p>");
    }

    #[test]
    fn test_custom_image_class() {
        let mut serializer = Serializer::new();
        serializer.options_mut().image_class = "article-image".to_string();
        let html = serializer.render_node(&Node::Image {
            src: "/a.png".to_string(),
            alt_text: "a".to_string(),
            width: None,
            height: None,
            max_width: None,
        });
        assert!(html.contains("class=\"article-image\""));
    }

    #[test]
    fn test_custom_read_time_divisor() {
        let serializer = Serializer::with_options(RenderOptions {
            read_time_divisor: 5,
            ..Default::default()
        });
        let document = DocumentState::new(vec![Node::paragraph(vec![Node::formatted(
            "Hello",
            TextFormat::NONE,
        )])]);
        // "<p>Hello</p>" is 12 characters
        assert_eq!(serializer.serialize_document(&document).approx_read_time_minutes, 3);
    }

    #[test]
    fn test_shared_across_threads() {
        let serializer = std::sync::Arc::new(Serializer::new());
        let json = r#"{"root":{"children":[{"kind":"horizontalrule"}]}}"#;
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let serializer = serializer.clone();
                std::thread::spawn(move || serializer.serialize(json))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().html, "<hr>");
        }
    }
}
