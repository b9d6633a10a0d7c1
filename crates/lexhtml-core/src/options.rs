//! Configuration options for HTML serialization

use serde::{Deserialize, Serialize};

/// Options for HTML serialization.
///
/// Deserializes from camelCase JSON with every field optional, so a host
/// can keep overrides in its own config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Marker class attached to every rendered image
    pub image_class: String,

    /// Rendered characters per minute of reading time
    pub read_time_divisor: usize,

    /// Tokens a `target="_blank"` link must carry in `rel`
    pub blank_link_rel: String,

    /// Render empty paragraphs as `<p><br></p>` instead of dropping them
    pub preserve_empty_paragraphs: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_class: "lexical-image".to_string(),
            read_time_divisor: 500,
            blank_link_rel: "noopener noreferrer".to_string(),
            preserve_empty_paragraphs: false,
        }
    }
}
