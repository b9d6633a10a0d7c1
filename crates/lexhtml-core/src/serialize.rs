//! Document serialization
//!
//! Top-level entry points: JSON or a decoded document in, HTML and a
//! read-time estimate out. These never fail; undecodable input yields an
//! empty result.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::convert::{document_from_value, parse_document};
use crate::document::DocumentState;
use crate::options::RenderOptions;
use crate::render::render_node;

/// Rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Serialized {
    pub html: String,
    pub approx_read_time_minutes: u32,
}

impl Serialized {
    /// Result for a document with no renderable content
    pub fn empty() -> Self {
        Self {
            html: String::new(),
            approx_read_time_minutes: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl Default for Serialized {
    fn default() -> Self {
        Self::empty()
    }
}

/// Serialize a JSON document string
pub fn serialize(json: &str, options: &RenderOptions) -> Serialized {
    match parse_document(json) {
        Ok(document) => serialize_document(&document, options),
        Err(err) => {
            warn!(error = %err, "discarding undecodable document");
            Serialized::empty()
        }
    }
}

/// Serialize an already-parsed JSON value
pub fn serialize_value(value: &Value, options: &RenderOptions) -> Serialized {
    match document_from_value(value) {
        Ok(document) => serialize_document(&document, options),
        Err(err) => {
            warn!(error = %err, "discarding undecodable document");
            Serialized::empty()
        }
    }
}

/// Serialize a decoded document
pub fn serialize_document(document: &DocumentState, options: &RenderOptions) -> Serialized {
    let html = render_node(&document.root, options);
    let approx_read_time_minutes = read_time_minutes(&html, options);
    Serialized {
        html,
        approx_read_time_minutes,
    }
}

/// Minutes to read, from the rendered HTML length. Never less than 1.
///
/// Length is counted in Unicode scalar values (`char`s), not bytes or
/// UTF-16 code units, so an emoji counts once.
pub fn read_time_minutes(html: &str, options: &RenderOptions) -> u32 {
    let length = html.chars().count();
    let divisor = options.read_time_divisor.max(1);
    let minutes = length.div_ceil(divisor).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
