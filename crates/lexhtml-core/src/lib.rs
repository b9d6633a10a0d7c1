//! lexhtml-core - Lexical document model and HTML serialization
//!
//! This crate provides the typed document tree emitted by the rich-text
//! editor and the serializer that renders it to safe, semantic HTML.
//! It is used by `lexhtml`, which adds DOM post-processing on top.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────┐             ┌──────────┐
//! JSON string ──▶ │ convert  │ ─ Node ───▶ │  render  │ ──▶ HTML + read time
//!                 └──────────┘             └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use lexhtml_core::{serialize, RenderOptions};
//!
//! let json = r#"{"root":{"children":[
//!     {"kind":"heading","level":2,"children":[{"kind":"text","text":"Hi & Bye","format":0}]}
//! ]}}"#;
//!
//! let out = serialize(json, &RenderOptions::default());
//! assert_eq!(out.html, "<h2>Hi &amp; Bye</h2>");
//! assert_eq!(out.approx_read_time_minutes, 1);
//! ```

mod convert;
mod document;
mod format;
mod options;
mod render;
mod serialize;
mod service;
mod text;
mod utilities;

pub use convert::{document_from_value, parse_document};
pub use document::{Alignment, DocumentState, Node};
pub use format::TextFormat;
pub use options::RenderOptions;
pub use render::render_node;
pub use serialize::{
    read_time_minutes, serialize, serialize_document, serialize_value, Serialized,
};
pub use service::Serializer;
pub use text::render_text;
pub use utilities::{escape_html, is_unsafe_url};

/// Error type for document decoding
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document has no root node")]
    MissingRoot,

    #[error("Invalid root node: {0}")]
    InvalidRoot(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
