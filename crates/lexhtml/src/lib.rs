//! # lexhtml
//!
//! Render Lexical editor documents to HTML for article pages.
//!
//! The serializer itself lives in `lexhtml-core` and is re-exported here.
//! This crate adds the presentation pass that runs over the rendered
//! markup: responsive image attributes and scroll wrappers for tables.
//!
//! ## Design
//!
//! Rendering is split in two steps so each stays independently testable:
//!
//! - **Serialize**: document JSON to HTML, deterministic and never failing
//! - **Enhance**: parse that HTML into a [`Node`] tree, mutate it in place,
//!   write it back. Idempotent, so re-running it on enhanced markup is safe.
//!
//! ## Example
//!
//! ```rust
//! use lexhtml::ArticleRenderer;
//!
//! let renderer = ArticleRenderer::new();
//! let json = r#"{"root":{"children":[
//!     {"kind":"image","src":"/a.png","altText":"x","maxWidth":600}
//! ]}}"#;
//!
//! let article = renderer.render(json);
//! assert!(article.html.contains("data-enhanced=\"true\""));
//! assert_eq!(article.approx_read_time_minutes, 1);
//! ```

pub mod enhance;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
#[cfg(feature = "html")]
mod service;
mod utilities;

pub use enhance::{enhance, EnhanceOptions};
#[cfg(feature = "html")]
pub use html::{enhance_html, parse_html};
pub use node::{Node, NodeType};
#[cfg(feature = "html")]
pub use service::ArticleRenderer;
pub use utilities::*;

pub use lexhtml_core::{
    document_from_value, escape_html, parse_document, read_time_minutes, render_node,
    render_text, serialize, serialize_document, serialize_value, Alignment, DocumentState,
    RenderError, RenderOptions, Result, Serialized, Serializer, TextFormat,
};

/// Editor document node, distinct from the DOM [`Node`]
pub use lexhtml_core::Node as DocumentNode;
