//! ArticleRenderer - serialization followed by presentation enhancement.

use lexhtml_core::{DocumentState, RenderOptions, Serialized, Serializer};

use crate::enhance::EnhanceOptions;
use crate::html::enhance_html;

/// Renders article content for display
#[derive(Debug, Clone, Default)]
pub struct ArticleRenderer {
    serializer: Serializer,
    enhance_options: EnhanceOptions,
}

impl ArticleRenderer {
    /// Create an ArticleRenderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ArticleRenderer with custom options.
    ///
    /// The enhancement pass targets images by the serializer's image class.
    pub fn with_options(render: RenderOptions, mut enhance: EnhanceOptions) -> Self {
        enhance.image_class = render.image_class.clone();
        Self {
            serializer: Serializer::with_options(render),
            enhance_options: enhance,
        }
    }

    /// Render a JSON document to enhanced HTML.
    ///
    /// The read-time estimate is taken from the serializer output, before
    /// enhancement adds attributes and wrappers.
    pub fn render(&self, json: &str) -> Serialized {
        self.finish(self.serializer.serialize(json))
    }

    /// Render a decoded document to enhanced HTML
    pub fn render_document(&self, document: &DocumentState) -> Serialized {
        self.finish(self.serializer.serialize_document(document))
    }

    /// Enhance already-rendered markup
    pub fn enhance(&self, html: &str) -> String {
        enhance_html(html, &self.enhance_options)
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    pub fn enhance_options(&self) -> &EnhanceOptions {
        &self.enhance_options
    }

    fn finish(&self, serialized: Serialized) -> Serialized {
        if serialized.is_empty() {
            return serialized;
        }
        Serialized {
            html: self.enhance(&serialized.html),
            approx_read_time_minutes: serialized.approx_read_time_minutes,
        }
    }
}
