//! Convert serialized editor JSON to the document tree
//!
//! Accepts both the `kind` discriminant and the editor's native `type`
//! field, along with the editor's native attribute spellings (`tag`,
//! `listType`, `headerState`, ...).

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::document::{Alignment, DocumentState, Node};
use crate::format::TextFormat;
use crate::{RenderError, Result};

/// Parse a JSON document string.
///
/// Nesting depth is not limited; deeply nested lists and quotes decode
/// like any other document.
pub fn parse_document(json: &str) -> Result<DocumentState> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    document_from_value(&value)
}

/// Convert an already-parsed JSON value.
///
/// The value is either `{"root": {...}}` or the root node itself.
pub fn document_from_value(value: &Value) -> Result<DocumentState> {
    let root = match value.get("root") {
        Some(root) => root,
        None if node_kind(value) == Some("root") => value,
        None => return Err(RenderError::MissingRoot),
    };

    if !root.is_object() {
        return Err(RenderError::InvalidRoot("root is not an object".to_string()));
    }

    match node_kind(root) {
        None | Some("root") => {}
        Some(other) => {
            return Err(RenderError::InvalidRoot(format!(
                "expected kind \"root\", found \"{}\"",
                other
            )))
        }
    }

    Ok(DocumentState::new(convert_children(root)))
}

/// Node discriminant, `kind` taking precedence over `type`
fn node_kind(value: &Value) -> Option<&str> {
    value
        .get("kind")
        .or_else(|| value.get("type"))
        .and_then(Value::as_str)
}

fn convert_children(value: &Value) -> Vec<Node> {
    value
        .get("children")
        .and_then(Value::as_array)
        .map(|children| children.iter().filter_map(convert_node).collect())
        .unwrap_or_default()
}

/// Convert one node. `None` drops a node missing a required attribute.
fn convert_node(value: &Value) -> Option<Node> {
    let Some(kind) = node_kind(value) else {
        debug!("skipping node without a kind");
        return None;
    };

    match kind {
        "paragraph" => Some(Node::Paragraph {
            align: alignment(value),
            children: convert_children(value),
        }),

        "heading" => {
            let Some(level) = heading_level(value) else {
                debug!("skipping heading without a valid level");
                return None;
            };
            Some(Node::Heading {
                level,
                align: alignment(value),
                children: convert_children(value),
            })
        }

        "quote" => Some(Node::Quote {
            align: alignment(value),
            children: convert_children(value),
        }),

        "list" => {
            let ordered = value
                .get("ordered")
                .and_then(Value::as_bool)
                .unwrap_or_else(|| {
                    string_attr(value, "listType") == Some("number")
                        || string_attr(value, "tag") == Some("ol")
                });
            let start = value
                .get("start")
                .and_then(Value::as_u64)
                .map(|s| s.clamp(1, u32::MAX as u64) as u32)
                .unwrap_or(1);
            Some(Node::List {
                ordered,
                start,
                items: convert_children(value),
            })
        }

        "listitem" => Some(Node::ListItem(convert_children(value))),

        "code" => Some(Node::Code {
            language: non_empty(value, "language"),
            code: code_text(value),
        }),

        "horizontalrule" => Some(Node::HorizontalRule),

        "table" => {
            let rows = convert_children(value)
                .into_iter()
                .filter(|row| {
                    let keep = matches!(row, Node::TableRow { .. });
                    if !keep {
                        debug!(kind = row.kind(), "dropping non-row table child");
                    }
                    keep
                })
                .collect();
            Some(Node::Table(rows))
        }

        "tablerow" => Some(Node::TableRow {
            is_header: value.get("isHeader").and_then(Value::as_bool),
            cells: convert_children(value),
        }),

        "tablecell" => {
            let header = value
                .get("headerState")
                .and_then(Value::as_u64)
                .map(|state| state != 0)
                .or_else(|| value.get("isHeader").and_then(Value::as_bool))
                .unwrap_or(false);
            Some(Node::TableCell {
                header,
                children: convert_children(value),
            })
        }

        "image" => {
            let Some(src) = non_empty(value, "src").or_else(|| non_empty(value, "url")) else {
                debug!("skipping image without src");
                return None;
            };
            let alt_text = string_attr(value, "altText")
                .or_else(|| string_attr(value, "alt"))
                .unwrap_or_default()
                .to_string();
            Some(Node::Image {
                src,
                alt_text,
                width: dimension(value, "width"),
                height: dimension(value, "height"),
                max_width: dimension(value, "maxWidth"),
            })
        }

        "link" | "autolink" => Some(Node::Link {
            url: string_attr(value, "url").unwrap_or_default().to_string(),
            target: non_empty(value, "target"),
            rel: non_empty(value, "rel"),
            title: non_empty(value, "title"),
            children: convert_children(value),
        }),

        "linebreak" => Some(Node::LineBreak),

        "tab" => Some(Node::Tab),

        "text" | "code-highlight" => Some(Node::Text {
            text: string_attr(value, "text").unwrap_or_default().to_string(),
            format: TextFormat::from_bits(
                value
                    .get("format")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .min(u32::MAX as u64) as u32,
            ),
        }),

        other => Some(Node::Unknown {
            kind: other.to_string(),
        }),
    }
}

/// `level: 2` or the editor's `tag: "h2"`
fn heading_level(value: &Value) -> Option<u8> {
    let level = match value.get("level").and_then(Value::as_u64) {
        Some(level) => level,
        None => string_attr(value, "tag")?
            .strip_prefix('h')?
            .parse::<u64>()
            .ok()?,
    };
    (1..=6).contains(&level).then_some(level as u8)
}

/// Flatten a code block's runs to plain text
fn code_text(value: &Value) -> String {
    let mut code = String::new();
    if let Some(children) = value.get("children").and_then(Value::as_array) {
        for child in children {
            match node_kind(child) {
                Some("text") | Some("code-highlight") => {
                    code.push_str(string_attr(child, "text").unwrap_or_default());
                }
                Some("linebreak") => code.push('\n'),
                Some("tab") => code.push('\t'),
                _ => {}
            }
        }
    }
    code
}

fn alignment(value: &Value) -> Option<Alignment> {
    string_attr(value, "format").and_then(Alignment::from_name)
}

fn string_attr<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn non_empty(value: &Value, key: &str) -> Option<String> {
    crate::utilities::clean_attribute(string_attr(value, key)).map(str::to_string)
}

/// Positive finite number; the editor stores `"inherit"` for unset sizes
fn dimension(value: &Value, key: &str) -> Option<f64> {
    value
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v > 0.0)
}
